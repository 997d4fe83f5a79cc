// ABOUTME: Data layer and persistence for EightPass
// ABOUTME: String-keyed stores backing the typed settings facade

pub mod error;
pub mod json_file;
pub mod memory;
pub mod store;

// Re-export main types
pub use error::{StorageError, StorageResult};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;
