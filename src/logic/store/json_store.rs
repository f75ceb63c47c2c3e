//! JSON File Store
//!
//! Whole-collection persistence: the record collection is loaded fully
//! into memory on each read and rewritten fully on each save. Saves go
//! through a temp file + rename so a crashed write never leaves a
//! truncated file visible to a later load.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::record::EmailRecord;
use crate::constants;

/// Supported on-disk schema version
pub const SCHEMA_VERSION: u32 = 1;

/// On-disk file format: the collection wrapped with a schema version
#[derive(Debug, Serialize, Deserialize)]
struct InboxFile {
    schema_version: u32,
    emails: Vec<EmailRecord>,
}

// ============================================================================
// ERRORS
// ============================================================================

/// Store errors
///
/// An absent file is not represented here: it is a normal startup
/// condition and `load` maps it to an empty collection.
#[derive(Debug, Clone)]
pub enum StoreError {
    /// File I/O error
    Io(String),

    /// File exists but cannot be parsed (fatal, no auto-repair)
    Corrupt(String),

    /// File parses but carries an unsupported schema version
    UnsupportedVersion { found: u32, supported: u32 },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Corrupt(e) => write!(f, "database is corrupt: {}", e),
            Self::UnsupportedVersion { found, supported } => write!(
                f,
                "unsupported database schema version {} (supported: {})",
                found, supported
            ),
        }
    }
}

impl std::error::Error for StoreError {}

// ============================================================================
// STORE
// ============================================================================

/// JSON-file-backed record store
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store handle for the given file path.
    /// The parent directory is created eagerly so saves cannot fail on it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok();
        }
        Self { path }
    }

    /// Store handle at the configured default location
    /// (`MAILGUARD_DB` env var, else the platform data directory)
    pub fn open_default() -> Self {
        Self::new(constants::database_path())
    }

    /// Check if any persisted state exists yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full persisted collection
    ///
    /// No file yet is a normal startup condition and returns an empty
    /// collection. A file that exists but does not parse is fatal and
    /// surfaced to the caller; there is no recovery attempt.
    pub fn load(&self) -> Result<Vec<EmailRecord>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No database at {:?} yet, starting empty", self.path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };

        let file: InboxFile =
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        if file.schema_version != SCHEMA_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: file.schema_version,
                supported: SCHEMA_VERSION,
            });
        }

        Ok(file.emails)
    }

    /// Serialize and persist the entire collection, atomically
    ///
    /// Writes to a temp sibling first and renames it over the target.
    pub fn save(&self, emails: &[EmailRecord]) -> Result<(), StoreError> {
        let file = InboxFile {
            schema_version: SCHEMA_VERSION,
            emails: emails.to_vec(),
        };

        let content = serde_json::to_string_pretty(&file)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(|e| StoreError::Io(e.to_string()))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::Io(e.to_string()))?;

        log::debug!("Saved {} records to {:?}", emails.len(), self.path);
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
