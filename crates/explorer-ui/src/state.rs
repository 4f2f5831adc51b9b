//! UI state shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Settings key holding the selected network
pub const NETWORK_SETTING: &str = "selected_network";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Environment {
    #[default]
    Production,
    Staging,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NetworkOption {
    Mocknet,
    #[default]
    Testnet,
}

impl NetworkOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkOption::Mocknet => "mocknet",
            NetworkOption::Testnet => "testnet",
        }
    }
}

impl std::fmt::Display for NetworkOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NetworkOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_matches('"').to_lowercase().as_str() {
            "mocknet" => Ok(NetworkOption::Mocknet),
            "testnet" => Ok(NetworkOption::Testnet),
            _ => Err(format!("Unknown network: {}", s)),
        }
    }
}

/// API server per network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Networks {
    pub mocknet: String,
    pub testnet: String,
}

impl Networks {
    pub fn api_server(&self, network: NetworkOption) -> &str {
        match network {
            NetworkOption::Mocknet => &self.mocknet,
            NetworkOption::Testnet => &self.testnet,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastTone {
    #[default]
    Info,
    Positive,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub tone: ToastTone,
}

impl Toast {
    pub fn new(text: impl Into<String>, tone: ToastTone) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub toasts: Vec<Toast>,
    /// Last app clock tick; drives relative timestamps
    pub app_time: Option<DateTime<Utc>>,
    pub env: Environment,
    pub networks: Networks,
    pub selected_network: NetworkOption,
}

impl UiState {
    /// API server of the selected network, if one is configured
    pub fn api_server(&self) -> Option<&str> {
        let server = self.networks.api_server(self.selected_network);
        (!server.is_empty()).then_some(server)
    }
}
