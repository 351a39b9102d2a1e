use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("service construction failed: {0}")]
    Construction(String),
}

/// Peer-variant reachability query failure. Treated as "not enabled" by
/// the selector, never re-raised.
#[derive(Debug, Error)]
#[error("variant query failed: {0}")]
pub struct QueryError(String);

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("origin {0:?} is not a known variant")]
    UnknownOrigin(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
