// ABOUTME: Error types for the settings facade
// ABOUTME: Construction, decoding, and storage failures

use eightpass_storage::StorageError;
use std::num::ParseIntError;
use thiserror::Error;

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid value {value:?} for setting '{key}'")]
    Format {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Settings already initialized")]
    AlreadyInitialized,
}
