//! Error types for the library seams
//!
//! Orchestration code works with `anyhow`; these typed errors cover the two
//! places callers branch on the failure kind: remote generation and writes.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the remote generation provider. Always recoverable.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// No credentials configured
    #[error("remote provider not configured: {0}")]
    NotConfigured(String),

    /// Transport failure (connect, TLS, body read)
    #[error("remote request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("remote provider error {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body or embedded JSON could not be parsed
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Failures while persisting an artifact. These surface to the caller.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid target path: {0}")]
    InvalidPath(PathBuf),
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
