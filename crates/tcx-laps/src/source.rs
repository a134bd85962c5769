//! Where a TCX document comes from: a local file or an HTTP(S) URL.

use std::{fmt, path::PathBuf};

use tracing::{info, warn};

use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Path(PathBuf),
    Url(String),
}

impl InputSource {
    /// Anything starting with `http` is fetched; everything else is a path.
    pub fn from_input(input: &str) -> Self {
        if input.starts_with("http") {
            InputSource::Url(input.to_string())
        } else {
            InputSource::Path(PathBuf::from(input))
        }
    }

    /// Reads the raw document. Errors are passed through untouched; there is
    /// no retry.
    pub async fn read(&self) -> Result<Vec<u8>> {
        let bytes = match self {
            InputSource::Path(path) => {
                info!("Reading {}", path.display());
                tokio::fs::read(path).await?
            }
            InputSource::Url(url) => {
                info!("Fetching {}", url);
                reqwest::get(url)
                    .await?
                    .error_for_status()?
                    .bytes()
                    .await?
                    .to_vec()
            }
        };

        if !looks_like_tcx(&bytes) {
            warn!("{} does not look like a TCX document", self);
        }

        Ok(bytes)
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Path(path) => write!(f, "{}", path.display()),
            InputSource::Url(url) => f.write_str(url),
        }
    }
}

/// Checks the head of a document for the TCX root element.
pub fn looks_like_tcx(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(1024)];
    String::from_utf8_lossy(head).contains("TrainingCenterDatabase")
}
