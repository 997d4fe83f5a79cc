// ABOUTME: Error types for key-value persistence
// ABOUTME: Surfaces I/O and encoding failures from store adapters to callers

use std::path::PathBuf;
use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid store path: {}", .0.display())]
    InvalidPath(PathBuf),
}
