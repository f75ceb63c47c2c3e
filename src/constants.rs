//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the database location, only edit this file.

use std::path::PathBuf;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "MailGuard";

/// Default database file name
pub const DEFAULT_DB_FILENAME: &str = "inbox.json";

/// Default data directory name (under the platform data dir)
pub const DEFAULT_DATA_DIR: &str = "mailguard";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get the database file path from environment or use the platform default
///
/// `MAILGUARD_DB` overrides everything; otherwise the file lives under
/// the local data directory (falling back to the working directory).
pub fn database_path() -> PathBuf {
    if let Ok(path) = std::env::var("MAILGUARD_DB") {
        return PathBuf::from(path);
    }

    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DATA_DIR)
        .join(DEFAULT_DB_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_path_shape() {
        // The env override is exercised by the store tests through
        // explicit paths instead.
        if std::env::var("MAILGUARD_DB").is_err() {
            let path = database_path();
            assert!(path.ends_with(PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_DB_FILENAME)));
        }
    }
}
