//! Headless Chromium print host.
//!
//! Each print context stages the document in its own temporary directory.
//! The load signal is a `--dump-dom` run, which exits once the page has fired
//! its load event; printing is a `--print-to-pdf` run into the output dir.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::process::Command;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::print_host::{PrintError, PrintHost, PrintOutcome, PrintWindow};

const DOCUMENT_FILE: &str = "document.html";

pub struct HeadlessBrowserHost {
    browser: PathBuf,
    output_dir: PathBuf,
}

impl HeadlessBrowserHost {
    pub fn new(browser: PathBuf, output_dir: PathBuf) -> Self {
        Self { browser, output_dir }
    }
}

#[async_trait]
impl PrintHost for HeadlessBrowserHost {
    async fn open(&self) -> Option<Box<dyn PrintWindow>> {
        let staging = match TempDir::new() {
            Ok(dir) => dir,
            Err(e) => {
                warn!("Could not create print staging dir: {e}");
                return None;
            }
        };
        debug!(staging = %staging.path().display(), "Opened headless print context");
        Some(Box::new(HeadlessWindow {
            browser: self.browser.clone(),
            output_dir: self.output_dir.clone(),
            staging,
            written: false,
        }))
    }
}

struct HeadlessWindow {
    browser: PathBuf,
    output_dir: PathBuf,
    staging: TempDir,
    written: bool,
}

impl HeadlessWindow {
    fn document_path(&self) -> PathBuf {
        self.staging.path().join(DOCUMENT_FILE)
    }

    fn document_url(&self) -> String {
        file_url(&self.document_path())
    }

    async fn run_browser(&self, args: &[String]) -> Result<(), PrintError> {
        let output = Command::new(&self.browser)
            .args(["--headless", "--disable-gpu", "--no-sandbox"])
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| PrintError::Print(format!("could not start {}: {e}", self.browser.display())))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PrintError::Print(format!(
                "browser exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl PrintWindow for HeadlessWindow {
    async fn write(&mut self, html: &str) -> Result<(), PrintError> {
        tokio::fs::write(self.document_path(), html).await?;
        self.written = true;
        Ok(())
    }

    async fn loaded(&mut self) -> Result<(), PrintError> {
        if !self.written {
            return Err(PrintError::Print("nothing was written to the print context".to_string()));
        }
        self.run_browser(&["--dump-dom".to_string(), self.document_url()])
            .await
    }

    async fn print(&mut self) -> Result<PrintOutcome, PrintError> {
        tokio::fs::create_dir_all(&self.output_dir).await?;
        let output = pdf_path(&self.output_dir);
        self.run_browser(&[
            "--no-pdf-header-footer".to_string(),
            format!("--print-to-pdf={}", output.display()),
            self.document_url(),
        ])
        .await?;
        Ok(PrintOutcome { output })
    }
}

/// `file://` URL for an absolute path. Bytes outside the unreserved set and
/// `/` are percent-encoded so spaces, `#` and `?` survive as path text.
fn file_url(path: &Path) -> String {
    let mut url = String::from("file://");
    for byte in path.to_string_lossy().bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
                url.push(byte as char)
            }
            _ => url.push_str(&format!("%{byte:02X}")),
        }
    }
    url
}

fn pdf_path(dir: &Path) -> PathBuf {
    dir.join(format!("{}.pdf", Uuid::new_v4()))
}
