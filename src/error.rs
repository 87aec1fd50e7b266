//! Error types for the demo actions server

use thiserror::Error;

/// Result type alias for demo actions operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or serving the demo actions
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Descriptor and manifest disagree
    #[error("consistency error: {0}")]
    Consistency(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid deployment URL
    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
}
