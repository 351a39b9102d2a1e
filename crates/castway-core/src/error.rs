use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed base64 input: {0}")]
    Decode(String),
}
