use thiserror::Error;

/// Error type for token operations.
///
/// Callers reject `Expired`, `InvalidSignature`, and `Malformed` tokens
/// identically; the variants exist so logs can tell them apart.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
