use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::TokenResponse;
use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

const MIN_PASSWORD_LENGTH: usize = 6;

/// `POST /api/users` - register a new user and return a bearer token.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<Json<TokenResponse>, ApiError> {
    let command = body.try_into_command()?;

    let user = state.user_service.register_user(command).await?;

    let token = state
        .authenticator
        .issue_token(user.id)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(Json(TokenResponse { token }))
}

/// HTTP request body for registration (raw JSON).
///
/// Fields default to empty strings so absent fields surface as validation
/// messages instead of a body-rejection error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl RegisterRequestBody {
    /// Validate all fields, accumulating every violation rather than
    /// short-circuiting on the first.
    fn try_into_command(self) -> Result<RegisterUserCommand, ApiError> {
        let mut violations = Vec::new();

        let name = DisplayName::new(self.name)
            .map_err(|_| violations.push("Name is required".to_string()))
            .ok();

        let email = EmailAddress::new(self.email)
            .map_err(|_| violations.push("Please include a valid email".to_string()))
            .ok();

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            violations.push("Please enter a password with 6 or more characters".to_string());
        }

        match (name, email) {
            (Some(name), Some(email)) if violations.is_empty() => {
                Ok(RegisterUserCommand::new(name, email, self.password))
            }
            _ => Err(ApiError::Validation(violations)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(name: &str, email: &str, password: &str) -> RegisterRequestBody {
        RegisterRequestBody {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_body() {
        let command = body("Ada", "ada@example.com", "secret1")
            .try_into_command()
            .unwrap();
        assert_eq!(command.name.as_str(), "Ada");
        assert_eq!(command.email.as_str(), "ada@example.com");
        assert_eq!(command.password, "secret1");
    }

    #[test]
    fn test_all_violations_accumulated() {
        let result = body("", "nope", "123").try_into_command();

        let Err(ApiError::Validation(messages)) = result else {
            panic!("expected validation error");
        };
        assert_eq!(
            messages,
            vec![
                "Name is required".to_string(),
                "Please include a valid email".to_string(),
                "Please enter a password with 6 or more characters".to_string(),
            ]
        );
    }

    #[test]
    fn test_short_password_rejected() {
        let result = body("Ada", "ada@example.com", "12345").try_into_command();

        let Err(ApiError::Validation(messages)) = result else {
            panic!("expected validation error");
        };
        assert_eq!(
            messages,
            vec!["Please enter a password with 6 or more characters".to_string()]
        );
    }

    #[test]
    fn test_six_char_password_accepted() {
        assert!(body("Ada", "ada@example.com", "123456")
            .try_into_command()
            .is_ok());
    }
}
