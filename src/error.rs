// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Backend library failed to load: {0:#}")]
    LibraryLoad(anyhow::Error),
    #[error("Backend initialization failed: {0:#}")]
    Init(anyhow::Error),
    #[error("Backend returned an invalid (zero) handle")]
    InvalidHandle,
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}
