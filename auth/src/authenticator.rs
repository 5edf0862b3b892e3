use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// Constructed once at process start from the injected configuration and
/// shared read-only across requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl_secs: i64,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed bearer token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    /// * `hash_cost` - bcrypt work factor for password hashing
    /// * `token_ttl_secs` - Seconds until issued tokens expire
    pub fn new(jwt_secret: &[u8], hash_cost: u32, token_ttl_secs: i64) -> Self {
        Self {
            password_hasher: PasswordHasher::new(hash_cost),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl_secs,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a bearer token for the subject.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity to encode as the token subject
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is corrupt
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: impl ToString,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(subject)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a bearer token without password verification.
    ///
    /// Used at registration, where the caller has just created the account.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, subject: impl ToString) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, self.token_ttl_secs);
        self.jwt_handler.encode(&claims)
    }

    /// Validate a bearer token and return its claims.
    ///
    /// A token is valid strictly before its expiry instant; at or after
    /// it, the token is rejected.
    ///
    /// # Errors
    /// * `JwtError` - Token is expired, tampered, or malformed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        // decode still accepts a token at exactly its expiry instant;
        // re-check so expiry is exclusive.
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";
    const TEST_COST: u32 = 4;

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET, TEST_COST, 3600);

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, "user123")
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let claims = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(claims.sub, "user123");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(SECRET, TEST_COST, 3600);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, "user123");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_corrupt_hash() {
        let authenticator = Authenticator::new(SECRET, TEST_COST, 3600);

        let result = authenticator.authenticate("my_password", "garbage", "user123");
        assert!(matches!(result, Err(AuthenticationError::PasswordError(_))));
    }

    #[test]
    fn test_issue_and_validate_token() {
        let authenticator = Authenticator::new(SECRET, TEST_COST, 3600);

        let token = authenticator
            .issue_token("user123")
            .expect("Failed to issue token");

        let claims = authenticator
            .validate_token(&token)
            .expect("Failed to validate token");

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = Authenticator::new(SECRET, TEST_COST, 3600);

        let result = authenticator.validate_token("invalid.token.here");
        assert!(result.is_err());
    }

    #[test]
    fn test_token_rejected_at_exact_expiry_instant() {
        let authenticator = Authenticator::new(SECRET, TEST_COST, 3600);

        // Token whose expiry is exactly now; it must already be rejected
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "user123".to_string(),
            iat: now - 10,
            exp: now,
        };
        let handler = crate::JwtHandler::new(SECRET);
        let token = handler.encode(&claims).expect("Failed to encode token");

        let result = authenticator.validate_token(&token);
        assert!(matches!(result, Err(JwtError::Expired)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let authenticator = Authenticator::new(SECRET, TEST_COST, -10);

        let token = authenticator
            .issue_token("user123")
            .expect("Failed to issue token");

        let result = authenticator.validate_token(&token);
        assert!(matches!(result, Err(JwtError::Expired)));
    }
}
