//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the API service:
//! - Password hashing (bcrypt with a configurable work factor)
//! - Signed bearer token generation and validation (JWT, HS256)
//! - Authentication coordination
//!
//! All secrets and cost parameters are injected at construction time;
//! nothing in this crate reads ambient configuration.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new(10);
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_subject("user123", 3600);
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 10, 3600);
//!
//! // Register: hash password, issue token
//! let hash = auth.hash_password("password123").unwrap();
//! let token = auth.issue_token("user123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password123", &hash, "user123").unwrap();
//!
//! // Guard: validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! # let _ = token;
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
