//! Explorer configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use explorer_ui::Networks;

const DEFAULT_MOCKNET_API_SERVER: &str = "http://localhost:3999";
const DEFAULT_TESTNET_API_SERVER: &str = "https://stacks-node-api.blockstack.org";
const APP_DIR_NAME: &str = "stacks-explorer";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    pub mocknet_api_server: String,
    pub testnet_api_server: String,
    /// Staging deployment
    pub staging: bool,
    pub request_timeout_secs: u64,
    /// How many viewed transactions to keep
    pub recent_limit: usize,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("explorer.db"),
            mocknet_api_server: DEFAULT_MOCKNET_API_SERVER.to_string(),
            testnet_api_server: DEFAULT_TESTNET_API_SERVER.to_string(),
            staging: false,
            request_timeout_secs: 30,
            recent_limit: 50,
        }
    }

    /// Defaults overlaid with `MOCKNET_API_SERVER`, `TESTNET_API_SERVER`,
    /// `STAGING` and `EXPLORER_DATA_DIR`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = set("EXPLORER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(Self::data_dir);
        let mut config = Self::new(data_dir);

        if let Some(server) = set("MOCKNET_API_SERVER") {
            config.mocknet_api_server = server;
        }
        if let Some(server) = set("TESTNET_API_SERVER") {
            config.testnet_api_server = server;
        }
        config.staging = set("STAGING").is_some_and(|v| is_truthy(&v));

        config
    }

    pub fn networks(&self) -> Networks {
        Networks {
            mocknet: self.mocknet_api_server.clone(),
            testnet: self.testnet_api_server.clone(),
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::app_data_dir(APP_DIR_NAME).unwrap_or_else(|| PathBuf::from(".stacks-explorer"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

mod dirs {
    use std::env::var_os;
    use std::path::PathBuf;

    /// `<platform data root>/<app>`, when the root can be located
    pub fn app_data_dir(app: &str) -> Option<PathBuf> {
        let root = if cfg!(target_os = "windows") {
            var_os("LOCALAPPDATA").map(PathBuf::from)
        } else if cfg!(target_os = "macos") {
            var_os("HOME").map(|home| PathBuf::from(home).join("Library/Application Support"))
        } else {
            var_os("XDG_DATA_HOME")
                .map(PathBuf::from)
                .or_else(|| var_os("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        };

        root.map(|dir| dir.join(app))
    }
}
