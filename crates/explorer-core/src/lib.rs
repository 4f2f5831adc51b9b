//! Stacks Explorer Core
//!
//! Coordination layer: configuration, persisted preferences, the UI store
//! and the navigation entry points all hang off [`Explorer`].

mod config;
mod error;
mod explorer;

pub use config::Config;
pub use error::CoreError;
pub use explorer::Explorer;

// Re-export core components
pub use explorer_api::{
    ApiError, HttpTransactionApi, Transaction, TransactionApi, TransactionList,
    TransactionListRequest, TransactionStatus, TransactionType,
};
pub use explorer_navigation::{
    classify, decode_address, ensure_hex_prefix, handle_validation, is_valid_address,
    is_valid_contract_id, is_valid_tx_id, Classification, ClassificationResult, NavigationError,
    QueryError, QueryKind, RecentlyViewedEntry, RecordingRouter, Route, Router,
    TXID_ROUTE_TEMPLATE,
};
pub use explorer_storage::{Database, StorageError};
pub use explorer_ui::{
    transaction_caption, transaction_title, ColorMode, Environment, NetworkOption, Networks,
    Store, Toast, ToastTone, UiAction, UiState,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
