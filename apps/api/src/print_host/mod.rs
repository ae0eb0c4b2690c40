//! Print flow: open a print context, write the document, wait for it to
//! load, let it settle, then print.
//!
//! Hosts are pluggable behind [`PrintHost`]. `AppState` carries an
//! `Arc<dyn PrintHost>`: a [`HeadlessBrowserHost`] when a browser binary is
//! configured, a [`BlockedHost`] otherwise.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;

pub mod headless;

pub use headless::HeadlessBrowserHost;

#[derive(Debug, Error)]
pub enum PrintError {
    /// The host refused to open a print context.
    #[error("print context could not be opened")]
    Blocked,

    #[error("document did not finish loading within {0:?}")]
    LoadTimeout(Duration),

    #[error("failed to write document: {0}")]
    Write(#[from] std::io::Error),

    #[error("print failed: {0}")]
    Print(String),
}

/// What a completed print job produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintOutcome {
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintTiming {
    /// Upper bound on the wait for the content-loaded signal.
    pub load_timeout: Duration,
    /// Fixed pause between load and print so late layout can settle.
    pub settle_delay: Duration,
}

impl PrintTiming {
    pub fn from_config(config: &Config) -> Self {
        Self {
            load_timeout: Duration::from_millis(config.print_load_timeout_ms),
            settle_delay: Duration::from_millis(config.print_settle_delay_ms),
        }
    }
}

/// Something that can hand out print contexts.
#[async_trait]
pub trait PrintHost: Send + Sync {
    /// Opens a fresh print context, or `None` when the host blocks it.
    async fn open(&self) -> Option<Box<dyn PrintWindow>>;
}

/// One print context: receives a document, signals load, prints.
#[async_trait]
pub trait PrintWindow: Send {
    async fn write(&mut self, html: &str) -> Result<(), PrintError>;

    /// Resolves once the written document has finished loading.
    async fn loaded(&mut self) -> Result<(), PrintError>;

    async fn print(&mut self) -> Result<PrintOutcome, PrintError>;
}

/// Host used when no print backend is configured. Every open is refused.
pub struct BlockedHost;

#[async_trait]
impl PrintHost for BlockedHost {
    async fn open(&self) -> Option<Box<dyn PrintWindow>> {
        None
    }
}

/// Picks the host for the configured environment.
pub fn host_from_config(config: &Config) -> Arc<dyn PrintHost> {
    match &config.print_browser {
        Some(browser) => {
            info!("Print host: headless browser at {}", browser.display());
            Arc::new(HeadlessBrowserHost::new(
                browser.clone(),
                config.print_output_dir.clone(),
            ))
        }
        None => {
            info!("Print host: none configured, print requests will be blocked");
            Arc::new(BlockedHost)
        }
    }
}

/// Runs one print job: open → write → await load (bounded) → settle → print.
///
/// No retries. A blocked context or a load timeout ends the job.
pub async fn run_print_job(
    host: &dyn PrintHost,
    html: &str,
    timing: PrintTiming,
) -> Result<PrintOutcome, PrintError> {
    let Some(mut window) = host.open().await else {
        warn!("Print context blocked by host");
        return Err(PrintError::Blocked);
    };

    window.write(html).await?;

    match tokio::time::timeout(timing.load_timeout, window.loaded()).await {
        Ok(loaded) => loaded?,
        Err(_) => {
            warn!(
                timeout_ms = timing.load_timeout.as_millis() as u64,
                "Print document did not signal load in time"
            );
            return Err(PrintError::LoadTimeout(timing.load_timeout));
        }
    }

    tokio::time::sleep(timing.settle_delay).await;

    let outcome = window.print().await?;
    info!(output = %outcome.output.display(), "Print job completed");
    Ok(outcome)
}
