use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::DisplayNameError;
use crate::user::errors::EmailError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// Identity record created at registration. The password is stored only as
/// a salted hash, never as plaintext.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: DisplayName,
    pub email: EmailAddress,
    pub avatar: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name value type
///
/// Ensures the name is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    /// Create a new valid display name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    pub fn new(name: String) -> Result<Self, DisplayNameError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            Err(DisplayNameError::Empty)
        } else {
            Ok(Self(name))
        }
    }

    /// Get name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates format using an RFC 5322 compliant parser and normalizes to
/// lowercase, so uniqueness is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated, normalized email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_lowercase();
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub name: DisplayName,
    pub email: EmailAddress,
    pub password: String,
}

impl RegisterUserCommand {
    /// Construct a new register user command.
    ///
    /// # Arguments
    /// * `name` - Validated display name
    /// * `email` - Validated email address
    /// * `password` - Plain text password (will be hashed by the service)
    pub fn new(name: DisplayName, email: EmailAddress, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}
