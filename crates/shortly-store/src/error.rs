use crate::codec::CodecError;
use shortly_core::{Record, StorageError};
use thiserror::Error;

/// Why a submitted URL was rejected.
///
/// The display strings are meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please enter a url.")]
    EmptyInput,
    #[error("please enter a valid url (including http:// or https://).")]
    MalformedUrl { reason: String },
}

/// Why the collection could not be written back to storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Encode(#[from] CodecError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("mapping store has not been loaded")]
    NotLoaded,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The record was added in memory but could not be saved.
    #[error("alias {} was created but could not be saved: {source}", .record.alias())]
    Persist {
        record: Record,
        #[source]
        source: PersistError,
    },
}

impl StoreError {
    /// `true` when the input itself was rejected.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }

    /// `true` when the change happened in memory but durable storage failed.
    pub fn is_persistence(&self) -> bool {
        matches!(self, StoreError::Persist { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("failed to read persisted mappings: {0}")]
    Storage(#[from] StorageError),
    #[error("persisted mappings are corrupt: {0}")]
    CorruptPersistedData(#[source] CodecError),
    /// A failed write left records that storage does not have yet.
    #[error("{records} mappings in memory have not been saved; refusing to reload")]
    UnsavedChanges { records: usize },
}
