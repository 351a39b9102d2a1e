use thiserror::Error;

use castway_core::CodecError;

/// Consumer-side callback failure. Contained at the dispatcher: logged,
/// never propagated back into the discovery backend.
#[derive(Debug, Error)]
#[error("consumer callback failed: {0}")]
pub struct CallbackError(String);

impl CallbackError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("envelope serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("envelope payload error: {0}")]
    Codec(#[from] CodecError),
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend {name} failed to start: {reason}")]
    StartFailed { name: String, reason: String },
}
