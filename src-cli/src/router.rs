//! Router for terminal sessions

use async_trait::async_trait;
use explorer_core::{NavigationError, Router};

/// Prints each destination instead of rendering a page
pub struct TerminalRouter;

#[async_trait]
impl Router for TerminalRouter {
    async fn push(&self, template: &str, path: &str) -> Result<(), NavigationError> {
        tracing::info!(template, path, "Route");
        println!("→ {path}");
        Ok(())
    }
}
