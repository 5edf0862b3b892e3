use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Wraps bcrypt with a fixed work factor. Each hash uses a fresh random
/// salt; the produced string is self-describing and embeds the algorithm
/// version, cost, and salt, so `verify` needs no extra parameters.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Work factor used when none is configured.
    pub const DEFAULT_COST: u32 = 10;

    /// Create a new password hasher with the given bcrypt work factor.
    ///
    /// # Arguments
    /// * `cost` - bcrypt cost factor; each increment doubles the hashing work
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password securely.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Self-describing bcrypt hash string (`$2b$...`)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Recomputes the hash using the salt and cost embedded in `hash` and
    /// compares in constant time.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored bcrypt hash string
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `CorruptHash` - Stored hash is not a decodable bcrypt string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(password, hash).map_err(|e| PasswordError::CorruptHash(e.to_string()))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COST)
    }
}
