use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid pattern thresholds: {0}")]
    InvalidThresholds(String),

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: f64 },

    #[error(
        "config_version {found} is newer than this build supports ({supported})"
    )]
    UnsupportedVersion { found: u64, supported: u32 },

    #[error("config is not a JSON object")]
    NotAnObject,

    #[error("failed to read config at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
