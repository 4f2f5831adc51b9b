//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("API error: {0}")]
    Api(#[from] explorer_api::ApiError),

    #[error("Router error: {0}")]
    Router(String),

    #[error("No transactions available from {0}")]
    NoTransactions(String),

    #[error("Storage error: {0}")]
    Storage(#[from] explorer_storage::StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
