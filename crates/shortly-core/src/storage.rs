use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage quota exceeded: {0}")]
    QuotaExceeded(String),
    #[error("storage is read-only: {0}")]
    ReadOnly(String),
    #[error("invalid storage key: '{0}'")]
    InvalidKey(String),
    #[error("storage io failed: {0}")]
    Io(String),
}

/// The durable key-value capability the mapping store persists through.
///
/// Both operations are synchronous and expected to complete in bounded
/// time. Implementations decide where the bytes live; the store only
/// ever reads and replaces whole values.
pub trait KeyValueStorage: Send + Sync + 'static {
    /// Returns the value previously written under `key`, or `None` if the
    /// key was never written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Durably stores `value` under `key`, replacing any prior value.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
