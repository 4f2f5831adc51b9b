//! Transaction id validation

use std::borrow::Cow;

const TX_ID_PREFIX: &str = "0x";
const TX_ID_HEX_LEN: usize = 64;

/// Prepend `0x` unless the input already carries it.
pub fn ensure_hex_prefix(query: &str) -> Cow<'_, str> {
    if query.starts_with(TX_ID_PREFIX) {
        Cow::Borrowed(query)
    } else {
        Cow::Owned(format!("{TX_ID_PREFIX}{query}"))
    }
}

/// Match `0x` followed by exactly 64 hex digits. Returns the matched id.
pub fn validate_tx_id(tx_id: &str) -> Option<&str> {
    let hex = tx_id.strip_prefix(TX_ID_PREFIX)?;

    if hex.len() == TX_ID_HEX_LEN && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(tx_id)
    } else {
        None
    }
}

pub fn is_valid_tx_id(tx_id: &str) -> bool {
    validate_tx_id(tx_id).is_some()
}
