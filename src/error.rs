//! Error types for loading game configuration

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate a `Tuning` file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
