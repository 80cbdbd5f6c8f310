pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::InMemoryStorage;
pub use shortly_core::{KeyValueStorage, StorageError};
