use std::sync::Arc;

use crate::config::Config;
use crate::print_host::{PrintHost, PrintTiming};
use crate::workspace::Workspace;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub workspace: Workspace,
    pub config: Config,
    /// Pluggable print backend. Headless browser when configured, blocked otherwise.
    pub print_host: Arc<dyn PrintHost>,
}

impl AppState {
    pub fn new(config: Config, print_host: Arc<dyn PrintHost>) -> Self {
        Self {
            workspace: Workspace::new(),
            config,
            print_host,
        }
    }

    pub fn print_timing(&self) -> PrintTiming {
        PrintTiming::from_config(&self.config)
    }
}
