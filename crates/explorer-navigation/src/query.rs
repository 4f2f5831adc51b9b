//! Search query classification
//!
//! Resolution order, first match wins:
//! 1. Blank input → `EmptyQuery`
//! 2. Contains `.` → contract reference, or `InvalidContractName`
//! 3. Otherwise → transaction id (with `0x` added if missing), or
//!    `InvalidTransactionId`
//!
//! A `.` always means contract intent; such queries are never retried as
//! transaction ids.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contract::ContractId;
use crate::txid::{ensure_hex_prefix, validate_tx_id};

/// What a valid query refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    ContractReference(ContractId),
    /// Normalized `0x`-prefixed id
    TransactionId(String),
}

/// Why a query was rejected. `Display` is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryError {
    #[error("No query provided")]
    EmptyQuery,

    #[error("Contract name seems invalid.")]
    InvalidContractName,

    #[error("Transaction ID hash seems invalid.")]
    InvalidTransactionId,
}

pub type Classification = std::result::Result<QueryKind, QueryError>;

/// Classify a raw search query. Never panics; the input is only read.
pub fn classify(query: &str) -> Classification {
    if query.trim().is_empty() {
        return Err(QueryError::EmptyQuery);
    }

    if query.contains('.') {
        return ContractId::parse(query)
            .map(QueryKind::ContractReference)
            .ok_or(QueryError::InvalidContractName);
    }

    let normalized = ensure_hex_prefix(query);
    match validate_tx_id(&normalized) {
        Some(tx_id) => Ok(QueryKind::TransactionId(tx_id.to_string())),
        None => Err(QueryError::InvalidTransactionId),
    }
}

/// Wire form of a classification: `{ success, message? }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ClassificationResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn err(error: QueryError) -> Self {
        Self {
            success: false,
            message: Some(error.to_string()),
        }
    }
}

impl From<&Classification> for ClassificationResult {
    fn from(classification: &Classification) -> Self {
        match classification {
            Ok(_) => Self::ok(),
            Err(e) => Self::err(*e),
        }
    }
}

/// Shorthand for `ClassificationResult::from(&classify(query))`
pub fn handle_validation(query: &str) -> ClassificationResult {
    ClassificationResult::from(&classify(query))
}
