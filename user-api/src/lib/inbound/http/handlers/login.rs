use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::TokenResponse;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// `POST /api/auth` - authenticate a user and return a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<Json<TokenResponse>, ApiError> {
    let (email, password) = body.validate()?;

    // Unknown email and wrong password produce the same generic response,
    // so the endpoint cannot be used to enumerate accounts.
    let user = state
        .user_service
        .get_user_by_email(&email)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByEmail(_) => ApiError::InvalidCredentials,
            _ => ApiError::from(e),
        })?;

    let result = state
        .authenticator
        .authenticate(&password, &user.password_hash, user.id)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => ApiError::InvalidCredentials,
            auth::AuthenticationError::PasswordError(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::JwtError(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(Json(TokenResponse {
        token: result.access_token,
    }))
}

/// HTTP request body for login (raw JSON).
///
/// Unlike registration there is no password length check: accounts created
/// under an older policy must still be able to log in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl LoginRequestBody {
    /// Validate the input shape, accumulating every violation.
    fn validate(self) -> Result<(EmailAddress, String), ApiError> {
        let mut violations = Vec::new();

        let email = EmailAddress::new(self.email)
            .map_err(|_| violations.push("Please include a valid email".to_string()))
            .ok();

        if self.password.is_empty() {
            violations.push("Password is required".to_string());
        }

        match email {
            Some(email) if violations.is_empty() => Ok((email, self.password)),
            _ => Err(ApiError::Validation(violations)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_body() {
        let body = LoginRequestBody {
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
        };

        let (email, password) = body.validate().unwrap();
        assert_eq!(email.as_str(), "ada@example.com");
        assert_eq!(password, "pw");
    }

    #[test]
    fn test_short_password_accepted() {
        // No length minimum at login; legacy passwords must keep working
        let body = LoginRequestBody {
            email: "ada@example.com".to_string(),
            password: "x".to_string(),
        };
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_all_violations_accumulated() {
        let body = LoginRequestBody {
            email: "nope".to_string(),
            password: String::new(),
        };

        let Err(ApiError::Validation(messages)) = body.validate() else {
            panic!("expected validation error");
        };
        assert_eq!(
            messages,
            vec![
                "Please include a valid email".to_string(),
                "Password is required".to_string(),
            ]
        );
    }
}
