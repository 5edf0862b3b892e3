use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Token handler for encoding and decoding signed bearer tokens.
///
/// Generic over the claims type. Uses HS256 (HMAC with SHA-256) with a
/// server-held secret; verification is stateless, so there is no session
/// store and no pre-expiry revocation.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new token handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or config files, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode a token, checking signature integrity and expiry.
    ///
    /// The expiry check here is inclusive: a token is still accepted at
    /// exactly its `exp` instant. `Authenticator::validate_token` layers
    /// the exclusive check on top via `Claims::is_expired`.
    ///
    /// # Errors
    /// * `Expired` - Current time is past the claim expiry
    /// * `InvalidSignature` - Token was tampered with or signed with a
    ///   different secret
    /// * `Malformed` - Token is not decodable
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is exact; no clock-skew leeway.
        validation.leeway = 0;

        let token_data =
            decode::<T>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::Expired,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::Malformed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::Claims;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(SECRET);

        let claims = Claims::for_subject("user123", 3600);

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded: Claims = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_malformed_token() {
        let handler = JwtHandler::new(SECRET);

        let result = handler.decode::<Claims>("not.a.token");
        assert!(matches!(result, Err(JwtError::Malformed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let claims = Claims::for_subject("user123", 3600);
        let token = handler1.encode(&claims).expect("Failed to encode token");

        let result = handler2.decode::<Claims>(&token);
        assert!(matches!(result, Err(JwtError::InvalidSignature)));
    }

    #[test]
    fn test_decode_tampered_token() {
        let handler = JwtHandler::new(SECRET);

        let claims = Claims::for_subject("user123", 3600);
        let token = handler.encode(&claims).expect("Failed to encode token");

        // Flip a character in the signature segment
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert!(handler.decode::<Claims>(&tampered).is_err());
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(SECRET);

        // Already expired at issuance
        let claims = Claims::for_subject("user123", -10);
        let token = handler.encode(&claims).expect("Failed to encode token");

        let result = handler.decode::<Claims>(&token);
        assert!(matches!(result, Err(JwtError::Expired)));
    }
}
