use std::path::PathBuf;

use thiserror::Error;

/// Failures loading settings, parsing the command line or saving reports.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid match config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid match report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown engine `{0}` (expected `classical` or `random[:seed]`)")]
    UnknownEngine(String),

    #[error("bad value `{value}` for {flag}")]
    InvalidFlag { flag: String, value: String },
}
