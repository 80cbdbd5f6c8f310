//! Short-alias generation and persisted-mapping store.
//!
//! [`MappingStore`] validates submitted URLs, assigns each one a generated
//! alias, keeps the records newest first and writes the whole collection
//! back to a [`KeyValueStorage`] after every change.

pub mod codec;
pub mod error;
pub mod settings;
pub mod store;
pub mod validate;

pub use error::{LoadError, PersistError, StoreError, ValidationError};
pub use settings::{CorruptDataPolicy, StoreSettings, DEFAULT_STORAGE_KEY};
pub use shortly_core::{Alias, KeyValueStorage, MappingCollection, Record, StorageError};
pub use shortly_generator::Generator;
pub use store::{MappingStore, StoreState};
pub use validate::validate_url;
