//! Contract identifiers: `<address>.<name>`

use serde::{Deserialize, Serialize};

use crate::address::is_valid_address;

/// Symbols allowed after the first letter of a contract name
const NAME_SYMBOLS: &[char] = &['-', '_', '!', '?', '+', '<', '>', '=', '/', '*'];

/// A validated `<address>.<name>` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractId {
    pub address: String,
    pub name: String,
}

impl ContractId {
    /// Validate the first two `.`-separated segments as address and name.
    /// Anything after a second `.` is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        let mut segments = input.split('.');
        let address = segments.next()?;
        let name = segments.next()?;

        if !is_valid_address(address) || !is_valid_contract_name(name) {
            return None;
        }

        Some(Self {
            address: address.to_string(),
            name: name.to_string(),
        })
    }
}

impl std::fmt::Display for ContractId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.address, self.name)
    }
}

/// True when `input` is `<address>.<name>` with a decodable address and a
/// well-formed name.
pub fn is_valid_contract_id(input: &str) -> bool {
    ContractId::parse(input).is_some()
}

/// Clarity contract name grammar: a letter followed by letters, digits or
/// `-_!?+<>=/*`; or one of the operator names `+ - * / = < > <= >=`.
pub fn is_valid_contract_name(name: &str) -> bool {
    if matches!(name, "+" | "-" | "*" | "/" | "=" | "<" | ">" | "<=" | ">=") {
        return true;
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || NAME_SYMBOLS.contains(&c))
        }
        _ => false,
    }
}

/// Name portion of `address.name[::asset]`
pub fn contract_name(fully_realized: &str) -> Option<&str> {
    fully_realized.split('.').nth(1)
}

/// Asset portion of `address.contract::asset`
pub fn fungible_asset_name(fully_realized: &str) -> Option<&str> {
    contract_name(fully_realized)?.split("::").nth(1)
}

/// The three parts of a fully realized asset identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetNameParts<'a> {
    pub address: &'a str,
    pub contract: Option<&'a str>,
    pub asset: Option<&'a str>,
}

pub fn asset_name_parts(fully_realized: &str) -> AssetNameParts<'_> {
    let address = fully_realized.split('.').next().unwrap_or_default();
    let contract = contract_name(fully_realized).and_then(|name| name.split("::").next());

    AssetNameParts {
        address,
        contract,
        asset: fungible_asset_name(fully_realized),
    }
}
