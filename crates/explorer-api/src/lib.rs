//! Stacks API access for the explorer
//!
//! - Transaction model as returned by `/extended/v1/tx`
//! - `TransactionApi` seam so callers can swap the HTTP client for a fake

mod client;
mod error;
mod model;

pub use client::{HttpTransactionApi, TransactionApi, TransactionListRequest};
pub use error::ApiError;
pub use model::{
    ContractCall, SmartContract, TokenTransfer, Transaction, TransactionList, TransactionStatus,
    TransactionType,
};

pub type Result<T> = std::result::Result<T, ApiError>;
