//! Error types for the shiny-icons library

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse overrides: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Override {block}.{name} has non-numeric value {value:?}")]
    InvalidOverride {
        block: String,
        name: String,
        value: String,
    },

    #[error("Failed creating directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, IconError>;
