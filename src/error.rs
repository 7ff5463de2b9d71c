use thiserror::Error;

/// Unified error type for version-stamp operations
#[derive(Error, Debug)]
pub enum StampError {
    #[error("Version tag file improperly formed: {0}")]
    VersionTag(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Source control lookup failed: {0}")]
    Scm(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-stamp
pub type Result<T> = std::result::Result<T, StampError>;

impl StampError {
    /// Create a version tag error with context
    pub fn version_tag(msg: impl Into<String>) -> Self {
        StampError::VersionTag(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        StampError::Config(msg.into())
    }

    /// Create a source control error with context
    pub fn scm(msg: impl Into<String>) -> Self {
        StampError::Scm(msg.into())
    }
}
