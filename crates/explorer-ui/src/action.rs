//! UI actions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Environment, NetworkOption, Networks, Toast};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum UiAction {
    #[serde(rename = "ui/toast/add")]
    AddToast(Toast),
    /// Remove a toast by id
    #[serde(rename = "ui/toast/remove")]
    RemoveToast(String),
    /// Clock tick carrying the current time
    #[serde(rename = "ui/time")]
    AppTime(DateTime<Utc>),
    #[serde(rename = "ui/config/env")]
    SetEnv(Environment),
    #[serde(rename = "ui/config/network")]
    SetNetworks(Networks),
    #[serde(rename = "ui/config/network/select")]
    SelectNetwork(NetworkOption),
}

impl UiAction {
    /// Action type string
    pub fn kind(&self) -> &'static str {
        match self {
            UiAction::AddToast(_) => "ui/toast/add",
            UiAction::RemoveToast(_) => "ui/toast/remove",
            UiAction::AppTime(_) => "ui/time",
            UiAction::SetEnv(_) => "ui/config/env",
            UiAction::SetNetworks(_) => "ui/config/network",
            UiAction::SelectNetwork(_) => "ui/config/network/select",
        }
    }
}
