//! Core types and traits for the shortly alias store.
//!
//! This crate provides the shared types used by the alias generators,
//! the durable-storage backends and the mapping store itself.

pub mod alias;
pub mod error;
pub mod record;
pub mod storage;

pub use alias::{Alias, ALIAS_PREFIX, ALPHABET, TOKEN_LENGTH};
pub use error::AliasError;
pub use record::{MappingCollection, Record};
pub use storage::{KeyValueStorage, StorageError};
