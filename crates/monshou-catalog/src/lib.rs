//! monshou-catalog: catalog state, builder passes, and the JSON store.
//!
//! The catalog is an explicit value passed through the passes in
//! [`builder`] (build, dedup, fix, verify); [`store`] reads and writes
//! the single JSON artifact, atomically on the write side. No pass
//! persists implicitly; the caller loads, runs passes, and persists once.

pub mod builder;
pub mod store;
pub mod types;

pub use builder::{
    BuildConfig, BuildSummary, Candidate, DEFAULT_RETRY_CEILING, DEFAULT_TARGET, ExhaustionPolicy,
    FingerprintMode, FixSummary, GenerationOutcome, PROGRESS_INTERVAL, VerifyReport, build, dedup,
    fix, verify,
};
pub use store::{StoreError, load, load_or_empty, persist};
pub use types::{Catalog, IconRecord, icon_id};
