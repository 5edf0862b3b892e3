use axum::extract::State;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// `GET /api/auth` - return the authenticated user's record, sans password.
///
/// The auth guard has already resolved the identity; a missing record here
/// is an invariant violation, not a client error.
pub async fn current_user(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
) -> Result<Json<CurrentUserResponse>, ApiError> {
    let user = state
        .user_service
        .get_user(&authenticated.user_id)
        .await
        .map_err(|e| match e {
            UserError::NotFound(id) => {
                tracing::error!(
                    user_id = %id,
                    "Token resolved to an identity with no user record"
                );
                ApiError::InternalServerError(format!("Authenticated user {} not found", id))
            }
            _ => ApiError::from(e),
        })?;

    Ok(Json((&user).into()))
}

/// User profile as returned to the client. The password hash is stripped:
/// it has no field here at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            avatar: user.avatar.clone(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::avatar::gravatar_url;
    use crate::domain::user::models::DisplayName;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserId;

    #[test]
    fn test_response_has_no_password_field() {
        let user = User {
            id: UserId::new(),
            name: DisplayName::new("Ada".to_string()).unwrap(),
            email: EmailAddress::new("ada@example.com".to_string()).unwrap(),
            avatar: gravatar_url("ada@example.com"),
            password_hash: "$2b$10$secret".to_string(),
            created_at: Utc::now(),
        };

        let response: CurrentUserResponse = (&user).into();
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "ada@example.com");
    }
}
