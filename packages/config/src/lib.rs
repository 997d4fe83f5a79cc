// ABOUTME: Configuration and environment variable management for EightPass
// ABOUTME: Resolves where the settings store lives on disk

pub mod constants;
pub mod paths;

pub use paths::{eightpass_dir, settings_file, SETTINGS_FILE_NAME};
