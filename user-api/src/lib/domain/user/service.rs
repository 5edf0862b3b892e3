use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use chrono::Utc;

use crate::domain::user::avatar::gravatar_url;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `password_hasher` - Hasher configured with the process-wide work factor
    pub fn new(repository: Arc<UR>, password_hasher: PasswordHasher) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // Fast-path uniqueness check. Not atomic with the insert; the
        // store's unique index is the actual enforcement point.
        if let Some(existing) = self.repository.find_by_email(&command.email).await? {
            return Err(UserError::EmailAlreadyRegistered(
                existing.email.as_str().to_string(),
            ));
        }

        let avatar = gravatar_url(command.email.as_str());

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            avatar,
            password_hash,
            created_at: Utc::now(),
        };

        self.repository.create(user).await
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFoundByEmail(email.to_string()))
    }
}
