use dashmap::DashMap;
use shortly_core::{KeyValueStorage, StorageError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Inner {
    values: DashMap<String, String>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

/// In-memory implementation of [`KeyValueStorage`] backed by a `DashMap`.
///
/// Clones share the same backing map, so a clone handed to a fresh store
/// behaves like storage that survived a process restart. Reads and writes
/// can be made to fail on demand to exercise error paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    inner: Arc<Inner>,
}

impl InMemoryStorage {
    /// Creates a new, empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with a single value.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.inner.values.insert(key.into(), value.into());
        storage
    }

    /// Makes every subsequent read fail with [`StorageError::Unavailable`].
    pub fn fail_reads(&self, fail: bool) {
        self.inner.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent write fail with [`StorageError::QuotaExceeded`].
    pub fn fail_writes(&self, fail: bool) {
        self.inner.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Returns the stored value without going through failure injection.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.values.get(key).map(|v| v.value().clone())
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.inner.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(format!(
                "read of '{key}' rejected by in-memory storage"
            )));
        }
        Ok(self.peek(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::QuotaExceeded(format!(
                "write of '{key}' rejected by in-memory storage"
            )));
        }
        self.inner.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
