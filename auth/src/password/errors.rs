use thiserror::Error;

/// Error type for password operations.
///
/// A mismatched password is NOT an error; `verify` reports it as `Ok(false)`.
/// Only hashing failures and undecodable stored hashes are errors.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is corrupt: {0}")]
    CorruptHash(String),
}
