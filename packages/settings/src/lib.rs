// ABOUTME: Application settings for EightPass
// ABOUTME: Typed properties, installation id, and global password handling over a key-value store

pub mod app_settings;
pub mod error;
pub mod global;
pub mod global_pass;
pub mod keys;
pub mod notifier;
pub mod types;

// Re-export main types
pub use app_settings::{AppSettings, AppSettingsBuilder};
pub use error::{SettingsError, SettingsResult};
pub use global::{app_settings, initialize_settings};
pub use global_pass::GlobalPassHandler;
pub use notifier::{PasswordChangeNotifier, PasswordSource};
pub use types::Tristate;

// Re-export the storage seam so callers need only this crate
pub use eightpass_storage::{JsonFileStore, KeyValueStore, MemoryStore, StorageError};
