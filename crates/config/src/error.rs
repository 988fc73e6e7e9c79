use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse / deserialization error.
    #[error("config parse error in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Parsed but unusable values.
    #[error("config validation error: {0}")]
    Invalid(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading an answer or writing a prompt failed.
    #[error("prompt failed: {0}")]
    Prompt(#[source] std::io::Error),
}
