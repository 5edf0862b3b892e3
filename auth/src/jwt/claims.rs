use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Signed token payload.
///
/// Carries only the subject identity plus issuance/expiry timestamps.
/// Never persisted; expiry is the sole termination mechanism, there is
/// no server-side revocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject with expiry a fixed duration from now.
    ///
    /// # Arguments
    /// * `subject` - Unique subject identifier
    /// * `ttl_secs` - Seconds until the token expires
    pub fn for_subject(subject: impl ToString, ttl_secs: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::seconds(ttl_secs);

        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the token is expired at the given instant.
    ///
    /// A token is valid strictly before its expiry timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject("user123", 3600);

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: "user123".to_string(),
            iat: 0,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // valid strictly before expiry
        assert!(claims.is_expired(1001));
    }
}
