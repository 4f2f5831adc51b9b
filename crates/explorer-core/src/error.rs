//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] explorer_storage::StorageError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] explorer_navigation::NavigationError),

    #[error("API error: {0}")]
    Api(#[from] explorer_api::ApiError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
