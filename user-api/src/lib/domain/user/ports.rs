use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// Checks email uniqueness, derives the avatar reference, hashes the
    /// password, and persists the record.
    ///
    /// # Errors
    /// * `EmailAlreadyRegistered` - Email is already taken
    /// * `PasswordHash` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve user by unique email address.
    ///
    /// # Errors
    /// * `NotFoundByEmail` - No user with this email
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError>;
}

/// Persistence operations for the user aggregate.
///
/// The store carries a unique index on email; `create` surfaces its
/// violation as `EmailAlreadyRegistered`, making the store the actual
/// enforcement point for the uniqueness invariant.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyRegistered` - Email unique index violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
}
