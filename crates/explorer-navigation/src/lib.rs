//! Explorer navigation
//!
//! Search bar resolution:
//!   1. Blank → "No query provided"
//!   2. `<address>.<name>` → contract page
//!   3. 64 hex digits, `0x` optional → transaction page
//!
//! Also owns the "random transaction" action and the recently viewed list.

mod address;
mod contract;
mod dispatch;
mod error;
mod query;
mod recent;
mod router;
mod txid;

pub use address::{decode_address, encode_address, is_valid_address, AddressError, DecodedAddress};
pub use contract::{
    asset_name_parts, contract_name, fungible_asset_name, is_valid_contract_id,
    is_valid_contract_name, AssetNameParts, ContractId,
};
pub use dispatch::{navigate_to_random_tx, random_tx_types, select_random_transaction, submit_query};
pub use error::NavigationError;
pub use query::{classify, handle_validation, Classification, ClassificationResult, QueryError, QueryKind};
pub use recent::{RecentlyViewed, RecentlyViewedEntry};
pub use router::{txid_path, RecordingRouter, Route, Router, TXID_ROUTE_TEMPLATE};
pub use txid::{ensure_hex_prefix, is_valid_tx_id, validate_tx_id};

pub type Result<T> = std::result::Result<T, NavigationError>;
