//! Error types for the claimcheck CLI

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid claims JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
