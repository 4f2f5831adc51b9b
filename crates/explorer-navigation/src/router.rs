//! Client-side routing seam

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Page template for transaction and contract detail pages
pub const TXID_ROUTE_TEMPLATE: &str = "/txid/[txid]";

/// Concrete path for a transaction id or contract reference
pub fn txid_path(id: &str) -> String {
    format!("/txid/{id}")
}

/// Performs a route transition. Implemented by whatever hosts the explorer.
#[async_trait]
pub trait Router: Send + Sync {
    async fn push(&self, template: &str, path: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub template: String,
    pub path: String,
}

/// Router that only remembers the transitions it was asked to make.
#[derive(Debug, Default)]
pub struct RecordingRouter {
    routes: Mutex<Vec<Route>>,
}

impl RecordingRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().clone()
    }

    pub fn last_path(&self) -> Option<String> {
        self.routes.lock().last().map(|r| r.path.clone())
    }
}

#[async_trait]
impl Router for RecordingRouter {
    async fn push(&self, template: &str, path: &str) -> Result<()> {
        self.routes.lock().push(Route {
            template: template.to_string(),
            path: path.to_string(),
        });
        Ok(())
    }
}
