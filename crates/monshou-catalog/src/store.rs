//! Catalog Store file I/O.
//!
//! The store is one pretty-printed JSON array. Persisting is atomic:
//! serialize the whole catalog first, write it to a temp file in the
//! destination directory, then rename over the target. A crash mid-run
//! therefore never corrupts the last good store.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::types::Catalog;

/// A fatal store failure. Per-candidate generation failures never surface
/// here; only file-level problems do.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file could not be read.
    #[error("failed to read catalog `{path}`")]
    Read {
        /// Store file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The store file exists but is not a valid catalog.
    #[error("failed to parse catalog `{path}`")]
    Parse {
        /// Store file path.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The catalog could not be serialized.
    #[error("failed to serialize catalog")]
    Serialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The store file could not be written or swapped into place.
    #[error("failed to write catalog `{path}`")]
    Write {
        /// Store file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Load the catalog from `path`.
///
/// # Errors
///
/// Returns [`StoreError::Read`] when the file cannot be read (including
/// when it does not exist) and [`StoreError::Parse`] when its contents are
/// not a catalog.
pub fn load(path: &Path) -> Result<Catalog, StoreError> {
    let text = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the catalog from `path`, treating a missing file as an empty
/// catalog. A present but unparseable file is still fatal.
///
/// # Errors
///
/// Same as [`load`], except that a not-found condition yields
/// `Ok(Catalog::default())`.
pub fn load_or_empty(path: &Path) -> Result<Catalog, StoreError> {
    match load(path) {
        Err(StoreError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            Ok(Catalog::default())
        }
        other => other,
    }
}

/// Persist the catalog to `path` atomically.
///
/// The catalog is serialized in full before any file is touched, written
/// to a temp file in the destination directory, and renamed over `path`.
///
/// # Errors
///
/// Returns [`StoreError::Serialize`] when serialization fails and
/// [`StoreError::Write`] when the temp file cannot be created, written,
/// or swapped into place.
pub fn persist(path: &Path, catalog: &Catalog) -> Result<(), StoreError> {
    let mut text = serde_json::to_string_pretty(catalog)
        .map_err(|source| StoreError::Serialize { source })?;
    text.push('\n');

    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(text.as_bytes()).map_err(write_err)?;
    temp.persist(path)
        .map(|_| ())
        .map_err(|persist_error| write_err(persist_error.error))
}
