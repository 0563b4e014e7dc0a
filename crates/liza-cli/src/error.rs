//! CLI errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("error reading {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing output: {0}")]
    Write(#[from] std::io::Error),

    #[error("error serializing tokens: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
