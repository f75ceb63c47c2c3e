//! Record Store
//!
//! Append-only collection of classified email records, persisted as a
//! single JSON file. `InboxStore` is an explicit handle passed to
//! callers; there is no process-wide singleton.

pub mod json_store;
pub mod record;

pub use json_store::{JsonStore, StoreError, SCHEMA_VERSION};
pub use record::EmailRecord;

use parking_lot::Mutex;

// ============================================================================
// INBOX STORE (single-writer handle)
// ============================================================================

/// Store handle serializing load-modify-save sequences
///
/// The backing file assumes a single writer at a time; the mutex makes
/// that hold for in-process concurrent callers. Cross-process locking is
/// out of scope.
pub struct InboxStore {
    store: JsonStore,
    write_lock: Mutex<()>,
}

impl InboxStore {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Handle at the configured default location
    pub fn open_default() -> Self {
        Self::new(JsonStore::open_default())
    }

    /// Backing file path
    pub fn path(&self) -> &std::path::Path {
        self.store.path()
    }

    /// Load the full collection, oldest first (append order)
    pub fn load(&self) -> Result<Vec<EmailRecord>, StoreError> {
        self.store.load()
    }

    /// Append one record and persist the whole collection.
    /// Returns the new collection size.
    pub fn append(&self, record: EmailRecord) -> Result<usize, StoreError> {
        let _guard = self.write_lock.lock();

        let mut emails = self.store.load()?;
        emails.push(record);
        self.store.save(&emails)?;

        log::info!("Record appended, inbox now holds {} emails", emails.len());
        Ok(emails.len())
    }
}
