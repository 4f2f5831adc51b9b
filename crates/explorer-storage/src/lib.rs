//! Explorer storage layer
//!
//! SQLite persistence for explorer preferences (color mode, selected
//! network) and the recently viewed transaction list.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
