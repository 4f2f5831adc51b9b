//! Transaction data as served by the Stacks API

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    TokenTransfer,
    SmartContract,
    ContractCall,
    PoisonMicroblock,
    /// System-generated block reward transaction
    Coinbase,
    Unknown(String),
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::TokenTransfer => "token_transfer",
            TransactionType::SmartContract => "smart_contract",
            TransactionType::ContractCall => "contract_call",
            TransactionType::PoisonMicroblock => "poison_microblock",
            TransactionType::Coinbase => "coinbase",
            TransactionType::Unknown(other) => other,
        }
    }
}

impl From<String> for TransactionType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "token_transfer" => TransactionType::TokenTransfer,
            "smart_contract" => TransactionType::SmartContract,
            "contract_call" => TransactionType::ContractCall,
            "poison_microblock" => TransactionType::PoisonMicroblock,
            "coinbase" => TransactionType::Coinbase,
            _ => TransactionType::Unknown(s),
        }
    }
}

impl From<TransactionType> for String {
    fn from(tx_type: TransactionType) -> Self {
        tx_type.as_str().to_string()
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionStatus {
    Success,
    Pending,
    AbortByResponse,
    AbortByPostCondition,
    /// Any other status string, kept verbatim
    Unknown(String),
}

impl Default for TransactionStatus {
    fn default() -> Self {
        TransactionStatus::Unknown("unknown".to_string())
    }
}

impl TransactionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionStatus::Success => "success",
            TransactionStatus::Pending => "pending",
            TransactionStatus::AbortByResponse => "abort_by_response",
            TransactionStatus::AbortByPostCondition => "abort_by_post_condition",
            TransactionStatus::Unknown(other) => other,
        }
    }
}

impl From<String> for TransactionStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "success" => TransactionStatus::Success,
            "pending" => TransactionStatus::Pending,
            "abort_by_response" => TransactionStatus::AbortByResponse,
            "abort_by_post_condition" => TransactionStatus::AbortByPostCondition,
            _ => TransactionStatus::Unknown(s),
        }
    }
}

impl From<TransactionStatus> for String {
    fn from(status: TransactionStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartContract {
    pub contract_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCall {
    pub contract_id: String,
    pub function_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTransfer {
    pub recipient_address: String,
    /// Amount in micro-STX, as a decimal string
    pub amount: String,
    /// Hex-encoded memo bytes
    #[serde(default)]
    pub memo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub tx_id: String,
    pub tx_type: TransactionType,
    #[serde(default)]
    pub tx_status: TransactionStatus,
    /// Unix seconds of the anchoring burn block; absent while pending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burn_block_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smart_contract: Option<SmartContract>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_call: Option<ContractCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_transfer: Option<TokenTransfer>,
}

impl Transaction {
    pub fn new(tx_id: impl Into<String>, tx_type: TransactionType) -> Self {
        Self {
            tx_id: tx_id.into(),
            tx_type,
            tx_status: TransactionStatus::Success,
            burn_block_time: None,
            smart_contract: None,
            contract_call: None,
            token_transfer: None,
        }
    }

    pub fn is_coinbase(&self) -> bool {
        self.tx_type == TransactionType::Coinbase
    }

    /// Contract id for contract deploys and calls
    pub fn contract_id(&self) -> Option<&str> {
        match self.tx_type {
            TransactionType::SmartContract => {
                self.smart_contract.as_ref().map(|c| c.contract_id.as_str())
            }
            TransactionType::ContractCall => {
                self.contract_call.as_ref().map(|c| c.contract_id.as_str())
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    pub results: Vec<Transaction>,
}
