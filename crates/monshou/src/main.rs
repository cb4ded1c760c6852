//! monshou: deterministic SVG icon catalog tool.
//!
//! Four subcommands over one JSON store:
//!
//! - `build` generates icons until the catalog reaches its target size,
//!   deduplicating what is already there first.
//! - `dedup` drops structural duplicates and rewrites the store.
//! - `fix` replaces invalid records with freshly generated markup.
//! - `verify` reports duplicate and invalid counts; exits non-zero when
//!   either remains.
//!
//! Every flag has a default, so bare invocations work on the conventional
//! store path. Progress goes to stderr, reports to stdout.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use monshou_catalog::{
    BuildConfig, ExhaustionPolicy, FingerprintMode, StoreError, builder, store,
};

/// Conventional store location, relative to the working directory.
const DEFAULT_CATALOG: &str = "data/icons.json";

/// Deterministic SVG icon catalog generator, deduplicator, and validator.
#[derive(Parser)]
#[command(name = "monshou", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate icons until the catalog reaches the target size.
    ///
    /// Existing records are deduplicated first; a missing store file
    /// starts from an empty catalog.
    Build {
        /// Catalog store path.
        #[arg(long, default_value = DEFAULT_CATALOG)]
        catalog: PathBuf,

        /// Catalog size to aim for.
        #[arg(long, default_value_t = monshou_catalog::DEFAULT_TARGET)]
        target: usize,

        /// Generation attempts per icon before giving up.
        #[arg(long, default_value_t = monshou_catalog::DEFAULT_RETRY_CEILING)]
        retry_ceiling: u64,

        /// Commit the final attempt of an exhausted icon instead of
        /// skipping it.
        #[arg(long)]
        accept_best_effort: bool,

        /// Salt folded into the seed schedule.
        #[arg(long, default_value_t = 0)]
        seed_salt: u64,
    },

    /// Drop structural duplicates and rewrite the store.
    Dedup {
        /// Catalog store path.
        #[arg(long, default_value = DEFAULT_CATALOG)]
        catalog: PathBuf,

        /// Treat records with equal skeletons but different coordinates
        /// as distinct.
        #[arg(long)]
        coordinate_sensitive: bool,
    },

    /// Replace invalid records with freshly generated markup.
    Fix {
        /// Catalog store path.
        #[arg(long, default_value = DEFAULT_CATALOG)]
        catalog: PathBuf,

        /// Generation attempts per repair before giving up.
        #[arg(long, default_value_t = monshou_catalog::DEFAULT_RETRY_CEILING)]
        retry_ceiling: u64,
    },

    /// Report duplicate and invalid counts without rewriting anything.
    Verify {
        /// Catalog store path.
        #[arg(long, default_value = DEFAULT_CATALOG)]
        catalog: PathBuf,

        /// Treat records with equal skeletons but different coordinates
        /// as distinct.
        #[arg(long)]
        coordinate_sensitive: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            let mut source = std::error::Error::source(&e);
            while let Some(inner) = source {
                eprintln!("  caused by: {inner}");
                source = inner.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode, StoreError> {
    match command {
        Command::Build {
            catalog,
            target,
            retry_ceiling,
            accept_best_effort,
            seed_salt,
        } => {
            let existing = store::load_or_empty(&catalog)?;
            let config = BuildConfig {
                target,
                retry_ceiling,
                seed_salt,
                exhaustion: if accept_best_effort {
                    ExhaustionPolicy::AcceptBestEffort
                } else {
                    ExhaustionPolicy::Skip
                },
            };
            eprintln!(
                "Building {} from {} existing records (target {target})",
                catalog.display(),
                existing.len()
            );
            let (built, summary) = builder::build(existing, &config, |generated, needed| {
                eprintln!("  generated {generated}/{needed}");
            });
            store::persist(&catalog, &built)?;
            println!("Target:             {}", summary.target);
            println!("Retained:           {}", summary.retained);
            println!("Duplicates dropped: {}", summary.duplicates_dropped);
            println!("Generated:          {}", summary.generated);
            println!("Exhausted:          {}", summary.exhausted);
            println!("Attempts:           {}", summary.attempts);
            println!("Produced:           {}", summary.produced);
            Ok(ExitCode::SUCCESS)
        }

        Command::Dedup {
            catalog,
            coordinate_sensitive,
        } => {
            let existing = store::load(&catalog)?;
            let before = existing.len();
            let (deduped, dropped) = builder::dedup(existing, mode(coordinate_sensitive));
            store::persist(&catalog, &deduped)?;
            println!("Records:            {before}");
            println!("Duplicates dropped: {dropped}");
            println!("Remaining:          {}", deduped.len());
            Ok(ExitCode::SUCCESS)
        }

        Command::Fix {
            catalog,
            retry_ceiling,
        } => {
            let existing = store::load(&catalog)?;
            let config = BuildConfig {
                retry_ceiling,
                ..BuildConfig::default()
            };
            let (fixed, summary) = builder::fix(existing, &config);
            store::persist(&catalog, &fixed)?;
            println!("Scanned:   {}", summary.scanned);
            println!("Invalid:   {}", summary.invalid);
            println!("Repaired:  {}", summary.repaired);
            println!("Exhausted: {}", summary.exhausted);
            println!("Attempts:  {}", summary.attempts);
            Ok(ExitCode::SUCCESS)
        }

        Command::Verify {
            catalog,
            coordinate_sensitive,
        } => {
            let existing = store::load(&catalog)?;
            let report = builder::verify(&existing, mode(coordinate_sensitive));
            println!("Records:    {}", report.total);
            println!("Duplicates: {}", report.duplicates);
            println!("Invalid:    {}", report.invalid);
            if report.is_clean() {
                println!("Catalog is clean.");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("Catalog has problems.");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

const fn mode(coordinate_sensitive: bool) -> FingerprintMode {
    if coordinate_sensitive {
        FingerprintMode::Literal
    } else {
        FingerprintMode::Structural
    }
}
