//! Uniqueness-driven catalog passes: build, dedup, fix, and verify.
//!
//! A build run is a small state machine: load (caller), partition existing
//! records by recomputed fingerprint, check the gap against the target,
//! generate the shortfall with bounded retries, persist (caller). All
//! passes take the catalog by value and hand back a new one; nothing here
//! touches the filesystem.
//!
//! Per-candidate failures (fingerprint collision, invalid markup) are not
//! errors. They are absorbed by the retry loop; hitting the ceiling is
//! reported as data in the summary and the run moves on to the next
//! ordinal.

use std::collections::HashSet;

use monshou_export::to_svg;
use monshou_pipeline::{
    PatternFamily, family_for_seed, fingerprint, fingerprint_literal, generate, is_valid,
};

use crate::types::{Catalog, IconRecord, icon_id};

/// Default catalog size a build run aims for.
pub const DEFAULT_TARGET: usize = 10_000;

/// Default per-ordinal retry ceiling.
pub const DEFAULT_RETRY_CEILING: u64 = 50_000;

/// How often (in produced icons) the build loop reports progress.
pub const PROGRESS_INTERVAL: usize = 500;

/// Seed-schedule constant separating repair draws from build draws, so a
/// fix pass never replays the build schedule.
const REPAIR_SALT: u64 = 0x7265_7061_6972_2d31;

/// Weyl increments for the ordinal and attempt seed schedules.
const ORDINAL_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const ATTEMPT_GAMMA: u64 = 0xD1B5_4A32_D192_ED03;

/// Which uniqueness standard a dedup or verify pass applies.
///
/// Structural hashing is the system's single source of truth; the literal
/// mode treats every coordinate variation as distinct and is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FingerprintMode {
    /// Command-skeleton hashing, coordinate values erased.
    #[default]
    Structural,
    /// Whole-markup hashing, coordinate values preserved.
    Literal,
}

impl FingerprintMode {
    /// Fingerprint of the markup under this mode.
    #[must_use]
    pub fn compute(self, svg: &str) -> String {
        match self {
            Self::Structural => fingerprint(svg),
            Self::Literal => fingerprint_literal(svg),
        }
    }
}

/// What to do with an ordinal whose retry ceiling is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExhaustionPolicy {
    /// Drop the ordinal, shrinking final output below the target.
    #[default]
    Skip,
    /// Commit the final attempt even though it collided or failed
    /// validation.
    AcceptBestEffort,
}

/// Build-run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Catalog size to aim for.
    pub target: usize,
    /// Attempts per ordinal before giving up.
    pub retry_ceiling: u64,
    /// Salt folded into every base seed, letting two runs over the same
    /// ordinals draw disjoint candidate schedules.
    pub seed_salt: u64,
    /// Policy applied when an ordinal exhausts its retries.
    pub exhaustion: ExhaustionPolicy,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            retry_ceiling: DEFAULT_RETRY_CEILING,
            seed_salt: 0,
            exhaustion: ExhaustionPolicy::default(),
        }
    }
}

/// A generated candidate: the markup plus its structural fingerprint and
/// the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Seed the figure was generated from.
    pub seed: u64,
    /// Serialized markup.
    pub svg: String,
    /// Structural fingerprint of `svg`.
    pub hash: String,
}

/// Outcome of one ordinal's bounded-attempt generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// A unique, valid candidate was found.
    Success(Candidate),
    /// The retry ceiling was reached; the final attempt is carried so the
    /// caller can apply [`ExhaustionPolicy::AcceptBestEffort`].
    Exhausted {
        /// The last candidate attempted. May collide or be invalid.
        best_effort: Candidate,
    },
}

/// Counts reported by a build run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Catalog size the run aimed for.
    pub target: usize,
    /// Records kept from the existing catalog after dedup.
    pub retained: usize,
    /// Records dropped as structural duplicates during partition.
    pub duplicates_dropped: usize,
    /// Records generated and committed this run.
    pub generated: usize,
    /// Ordinals that hit the retry ceiling.
    pub exhausted: usize,
    /// Total generation attempts across all ordinals.
    pub attempts: u64,
    /// Final catalog size.
    pub produced: usize,
}

/// Counts reported by a fix pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixSummary {
    /// Records examined.
    pub scanned: usize,
    /// Records that failed validation.
    pub invalid: usize,
    /// Invalid records replaced with fresh markup.
    pub repaired: usize,
    /// Invalid records left in place because retries ran out.
    pub exhausted: usize,
    /// Total generation attempts.
    pub attempts: u64,
}

/// Duplicate and validity counts for a verify pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Records examined.
    pub total: usize,
    /// Records sharing a fingerprint with an earlier record.
    pub duplicates: usize,
    /// Records failing the validity checker.
    pub invalid: usize,
}

impl VerifyReport {
    /// Whether the catalog is free of duplicates and invalid records.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.duplicates == 0 && self.invalid == 0
    }
}

/// Result of splitting a catalog into first-seen-unique records.
#[derive(Debug)]
pub struct Partitioned {
    /// Records kept, original order preserved.
    pub unique: Catalog,
    /// Number of records dropped as duplicates.
    pub dropped: usize,
    /// Fingerprints of the kept records.
    pub index: HashSet<String>,
}

/// Base seed for an ordinal's candidate schedule.
#[must_use]
pub const fn base_seed(salt: u64, ordinal: u64) -> u64 {
    salt ^ ordinal.wrapping_mul(ORDINAL_GAMMA)
}

/// Seed for one attempt within an ordinal's schedule. Attempt 0 is the
/// base seed itself; later attempts perturb it deterministically.
#[must_use]
pub const fn attempt_seed(base: u64, attempt: u64) -> u64 {
    base.wrapping_add(attempt.wrapping_mul(ATTEMPT_GAMMA))
}

/// Recompute fingerprints and keep the first-seen record per fingerprint,
/// stable with respect to the original order.
#[must_use]
pub fn partition(catalog: Catalog, mode: FingerprintMode) -> Partitioned {
    let mut index = HashSet::new();
    let mut unique = Vec::new();
    let mut dropped = 0;
    for record in catalog.into_records() {
        if index.insert(mode.compute(&record.svg)) {
            unique.push(record);
        } else {
            dropped += 1;
        }
    }
    Partitioned {
        unique: Catalog::new(unique),
        dropped,
        index,
    }
}

/// Drop structural duplicates, returning the deduplicated catalog and the
/// number of records removed.
#[must_use]
pub fn dedup(catalog: Catalog, mode: FingerprintMode) -> (Catalog, usize) {
    let parts = partition(catalog, mode);
    (parts.unique, parts.dropped)
}

/// Bounded-attempt generation of one unique, valid candidate.
///
/// Walks the deterministic attempt schedule until a candidate's structural
/// fingerprint is absent from `index` and its markup passes validation, or
/// the ceiling is reached. A ceiling of 0 is treated as 1: there is always
/// at least one attempt, so [`GenerationOutcome::Exhausted`] always
/// carries a concrete candidate. Returns the outcome and the number of
/// attempts consumed.
#[must_use]
pub fn generate_unique(
    base: u64,
    retry_ceiling: u64,
    index: &HashSet<String>,
) -> (GenerationOutcome, u64) {
    let ceiling = retry_ceiling.max(1);
    let mut attempt = 0;
    loop {
        let seed = attempt_seed(base, attempt);
        let svg = to_svg(&generate(seed));
        let hash = fingerprint(&svg);
        let candidate = Candidate { seed, svg, hash };
        let accepted = !index.contains(&candidate.hash) && is_valid(&candidate.svg);
        attempt += 1;
        if accepted {
            return (GenerationOutcome::Success(candidate), attempt);
        }
        if attempt == ceiling {
            return (
                GenerationOutcome::Exhausted {
                    best_effort: candidate,
                },
                attempt,
            );
        }
    }
}

/// Full build run: partition, gap check, generate the shortfall, return
/// the new catalog and its summary. Persistence is the caller's step.
///
/// `progress` is invoked with `(generated_so_far, needed)` every
/// [`PROGRESS_INTERVAL`] committed icons.
#[must_use]
pub fn build(
    catalog: Catalog,
    config: &BuildConfig,
    mut progress: impl FnMut(usize, usize),
) -> (Catalog, BuildSummary) {
    let Partitioned {
        unique,
        dropped,
        mut index,
    } = partition(catalog, FingerprintMode::Structural);
    let retained = unique.len();
    let mut records = unique.into_records();
    records.truncate(config.target);

    let needed = config.target - records.len();
    let mut summary = BuildSummary {
        target: config.target,
        retained,
        duplicates_dropped: dropped,
        ..BuildSummary::default()
    };

    for i in 0..needed {
        let base = base_seed(config.seed_salt, ord64(retained + i + 1));
        let (outcome, attempts) = generate_unique(base, config.retry_ceiling, &index);
        summary.attempts += attempts;
        let candidate = match outcome {
            GenerationOutcome::Success(candidate) => candidate,
            GenerationOutcome::Exhausted { best_effort } => {
                summary.exhausted += 1;
                match config.exhaustion {
                    ExhaustionPolicy::Skip => continue,
                    ExhaustionPolicy::AcceptBestEffort => best_effort,
                }
            }
        };
        let ordinal = records.len() + 1;
        index.insert(candidate.hash.clone());
        records.push(new_record(ordinal, &candidate));
        summary.generated += 1;
        if summary.generated % PROGRESS_INTERVAL == 0 {
            progress(summary.generated, needed);
        }
    }

    summary.produced = records.len();
    (Catalog::new(records), summary)
}

/// Replace each invalid record's `svg`/`hash` pair with freshly generated
/// valid, unique markup. Ids and metadata keep their values; this is the
/// only record mutation in the system.
///
/// An invalid record whose repair schedule exhausts is left untouched and
/// counted, never replaced by another invalid candidate.
#[must_use]
pub fn fix(mut catalog: Catalog, config: &BuildConfig) -> (Catalog, FixSummary) {
    let mut index: HashSet<String> = catalog
        .records()
        .iter()
        .filter(|record| is_valid(&record.svg))
        .map(|record| fingerprint(&record.svg))
        .collect();
    let mut summary = FixSummary {
        scanned: catalog.len(),
        ..FixSummary::default()
    };
    for (i, record) in catalog.records_mut().iter_mut().enumerate() {
        if is_valid(&record.svg) {
            continue;
        }
        summary.invalid += 1;
        let base = base_seed(config.seed_salt ^ REPAIR_SALT, ord64(i + 1));
        let (outcome, attempts) = generate_unique(base, config.retry_ceiling, &index);
        summary.attempts += attempts;
        match outcome {
            GenerationOutcome::Success(candidate) => {
                index.insert(candidate.hash.clone());
                record.svg = candidate.svg;
                record.hash = candidate.hash;
                summary.repaired += 1;
            }
            GenerationOutcome::Exhausted { .. } => summary.exhausted += 1,
        }
    }
    (catalog, summary)
}

/// Recompute every record's fingerprint and validity, counting duplicates
/// and invalid records.
#[must_use]
pub fn verify(catalog: &Catalog, mode: FingerprintMode) -> VerifyReport {
    let mut seen = HashSet::new();
    let mut report = VerifyReport {
        total: catalog.len(),
        ..VerifyReport::default()
    };
    for record in catalog.records() {
        if !seen.insert(mode.compute(&record.svg)) {
            report.duplicates += 1;
        }
        if !is_valid(&record.svg) {
            report.invalid += 1;
        }
    }
    report
}

fn new_record(ordinal: usize, candidate: &Candidate) -> IconRecord {
    let family = family_for_seed(candidate.seed);
    IconRecord {
        id: icon_id(ordinal),
        title: format!("{} {ordinal}", family.name()),
        description: describe(family),
        svg: candidate.svg.clone(),
        hash: candidate.hash.clone(),
        tags: family.tags().iter().map(ToString::to_string).collect(),
        category: family.category().to_string(),
        title_ja: Some(format!("{} {ordinal}", family.name_ja())),
        description_ja: Some(format!("自動生成された{}のモチーフ", family.name_ja())),
        tags_ja: Some(family.tags_ja().iter().map(ToString::to_string).collect()),
    }
}

fn describe(family: PatternFamily) -> String {
    format!(
        "Procedurally generated {} motif",
        family.name().to_lowercase()
    )
}

#[allow(clippy::cast_possible_truncation)]
const fn ord64(n: usize) -> u64 {
    n as u64
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn path_record(ordinal: usize, d: &str) -> IconRecord {
        let svg = format!(
            r#"<svg viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="{d}" fill="currentColor"/></svg>"#
        );
        IconRecord {
            id: icon_id(ordinal),
            title: format!("Seeded {ordinal}"),
            description: "Fixture record".into(),
            hash: fingerprint(&svg),
            svg,
            tags: vec!["fixture".into()],
            category: "geometric".into(),
            title_ja: None,
            description_ja: None,
            tags_ja: None,
        }
    }

    fn small_config(target: usize) -> BuildConfig {
        BuildConfig {
            target,
            ..BuildConfig::default()
        }
    }

    #[test]
    fn attempt_schedule_is_deterministic_and_spread() {
        let base = base_seed(7, 3);
        assert_eq!(attempt_seed(base, 0), base);
        let mut seeds: Vec<u64> = (0..100).map(|a| attempt_seed(base, a)).collect();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), 100);
    }

    #[test]
    fn partition_keeps_first_seen_per_fingerprint() {
        let catalog = Catalog::new(vec![
            path_record(1, "M2 2 L20 20 Z"),
            path_record(2, "M2 2 C3 3 4 4 10 10 Z"),
            path_record(3, "M5 5 L18 18 Z"),
        ]);
        let parts = partition(catalog, FingerprintMode::Structural);
        assert_eq!(parts.unique.len(), 2);
        assert_eq!(parts.dropped, 1);
        assert_eq!(parts.unique.records()[0].id, "icon-00001");
        assert_eq!(parts.unique.records()[1].id, "icon-00002");
    }

    #[test]
    fn literal_mode_keeps_coordinate_variants() {
        let catalog = Catalog::new(vec![
            path_record(1, "M2 2 L20 20 Z"),
            path_record(2, "M5 5 L18 18 Z"),
        ]);
        let (deduped, dropped) = dedup(catalog, FingerprintMode::Literal);
        assert_eq!(deduped.len(), 2);
        assert_eq!(dropped, 0);
    }

    #[test]
    fn build_fills_the_gap_with_sequential_ids() {
        // Records 1 and 3 share a command skeleton; the builder must drop
        // record 3 and generate three fresh ones.
        let catalog = Catalog::new(vec![
            path_record(1, "M2 2 L20 20 Z"),
            path_record(2, "M2 2 C3 3 4 4 10 10 Z"),
            path_record(3, "M5 5 L18 18 Z"),
        ]);
        let (built, summary) = build(catalog, &small_config(5), |_, _| {});
        assert_eq!(summary.retained, 2);
        assert_eq!(summary.duplicates_dropped, 1);
        assert_eq!(summary.generated, 3);
        assert_eq!(summary.exhausted, 0);
        assert_eq!(built.len(), 5);
        for (i, record) in built.records().iter().enumerate() {
            assert_eq!(record.id, icon_id(i + 1));
            assert!(is_valid(&record.svg), "record {} invalid", record.id);
        }
        let mut fingerprints: Vec<String> = built
            .records()
            .iter()
            .map(|r| fingerprint(&r.svg))
            .collect();
        fingerprints.sort_unstable();
        fingerprints.dedup();
        assert_eq!(fingerprints.len(), 5);
    }

    #[test]
    fn rebuild_of_a_complete_catalog_does_nothing() {
        let (built, first) = build(Catalog::default(), &small_config(12), |_, _| {});
        assert_eq!(first.produced, 12);
        let (rebuilt, second) = build(built.clone(), &small_config(12), |_, _| {});
        assert_eq!(second.attempts, 0);
        assert_eq!(second.generated, 0);
        assert_eq!(second.retained, 12);
        assert_eq!(rebuilt, built);
    }

    #[test]
    fn new_records_carry_family_metadata() {
        let (built, _) = build(Catalog::default(), &small_config(4), |_, _| {});
        for record in built.records() {
            assert!(!record.title.is_empty());
            assert!(!record.category.is_empty());
            assert_eq!(record.tags.len(), 3);
            assert_eq!(record.hash, fingerprint(&record.svg));
            assert!(record.title_ja.is_some());
            assert!(record.tags_ja.is_some());
        }
    }

    #[test]
    fn generate_unique_exhausts_when_every_attempt_is_taken() {
        let base = base_seed(0, 1);
        let ceiling = 4;
        let index: HashSet<String> = (0..ceiling)
            .map(|a| fingerprint(&to_svg(&generate(attempt_seed(base, a)))))
            .collect();
        let (outcome, attempts) = generate_unique(base, ceiling, &index);
        assert_eq!(attempts, ceiling);
        assert!(matches!(&outcome, GenerationOutcome::Exhausted { .. }));
        if let GenerationOutcome::Exhausted { best_effort } = outcome {
            assert!(index.contains(&best_effort.hash));
        }
    }

    #[test]
    fn skip_policy_drops_the_exhausted_ordinal() {
        // Seed the catalog with the exact candidate scheduled for ordinal
        // 2, so a ceiling of 1 must exhaust.
        let scheduled = to_svg(&generate(attempt_seed(base_seed(0, 2), 0)));
        let seeded = IconRecord {
            hash: fingerprint(&scheduled),
            svg: scheduled,
            ..path_record(1, "M2 2 L20 20 Z")
        };
        let config = BuildConfig {
            target: 2,
            retry_ceiling: 1,
            ..BuildConfig::default()
        };
        let (built, summary) = build(Catalog::new(vec![seeded]), &config, |_, _| {});
        assert_eq!(summary.exhausted, 1);
        assert_eq!(summary.generated, 0);
        assert_eq!(built.len(), 1);
    }

    #[test]
    fn best_effort_policy_commits_the_final_attempt() {
        let scheduled = to_svg(&generate(attempt_seed(base_seed(0, 2), 0)));
        let seeded = IconRecord {
            hash: fingerprint(&scheduled),
            svg: scheduled.clone(),
            ..path_record(1, "M2 2 L20 20 Z")
        };
        let config = BuildConfig {
            target: 2,
            retry_ceiling: 1,
            exhaustion: ExhaustionPolicy::AcceptBestEffort,
            ..BuildConfig::default()
        };
        let (built, summary) = build(Catalog::new(vec![seeded]), &config, |_, _| {});
        assert_eq!(summary.exhausted, 1);
        assert_eq!(summary.generated, 1);
        assert_eq!(built.len(), 2);
        assert_eq!(built.records()[1].id, "icon-00002");
        assert_eq!(built.records()[1].svg, scheduled);
    }

    #[test]
    fn fix_replaces_invalid_records_in_place() {
        let broken = path_record(2, "M2 NaN L12 12");
        let catalog = Catalog::new(vec![path_record(1, "M2 2 L20 20 Z"), broken]);
        let (fixed, summary) = fix(catalog, &BuildConfig::default());
        assert_eq!(summary.invalid, 1);
        assert_eq!(summary.repaired, 1);
        assert_eq!(summary.exhausted, 0);
        let repaired = &fixed.records()[1];
        assert_eq!(repaired.id, "icon-00002");
        assert_eq!(repaired.title, "Seeded 2");
        assert!(is_valid(&repaired.svg));
        assert_eq!(repaired.hash, fingerprint(&repaired.svg));
        assert_ne!(repaired.hash, fixed.records()[0].hash);
    }

    #[test]
    fn fix_leaves_valid_catalogs_untouched() {
        let catalog = Catalog::new(vec![
            path_record(1, "M2 2 L20 20 Z"),
            path_record(2, "M2 2 C3 3 4 4 10 10 Z"),
        ]);
        let (fixed, summary) = fix(catalog.clone(), &BuildConfig::default());
        assert_eq!(summary.invalid, 0);
        assert_eq!(summary.attempts, 0);
        assert_eq!(fixed, catalog);
    }

    #[test]
    fn verify_counts_duplicates_and_invalid_records() {
        let catalog = Catalog::new(vec![
            path_record(1, "M2 2 L20 20 Z"),
            path_record(2, "M5 5 L18 18 Z"),
            path_record(3, "M2 NaN L12 12"),
        ]);
        let report = verify(&catalog, FingerprintMode::Structural);
        assert_eq!(report.total, 3);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.invalid, 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn verify_passes_a_freshly_built_catalog() {
        let (built, _) = build(Catalog::default(), &small_config(10), |_, _| {});
        let report = verify(&built, FingerprintMode::Structural);
        assert_eq!(report.total, 10);
        assert!(report.is_clean());
    }
}
