use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML option source: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON option source: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported option source format: {} (expected .toml or .json)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}
