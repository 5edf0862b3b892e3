use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::user::errors::UserError;

pub mod current_user;
pub mod login;
pub mod register;

/// Success body for register and login: the signed bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Uniform error wire shape: `{"errors":[{"msg":"..."}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorsBody {
    pub errors: Vec<ErrorMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMessage {
    pub msg: String,
}

impl ErrorsBody {
    pub fn new(messages: Vec<String>) -> Self {
        Self {
            errors: messages.into_iter().map(|msg| ErrorMessage { msg }).collect(),
        }
    }

    pub fn single(msg: impl Into<String>) -> Self {
        Self::new(vec![msg.into()])
    }
}

/// Internal error taxonomy for the HTTP boundary.
///
/// `Validation` and `Conflict` share one wire shape (a 400 with a message
/// array), so clients cannot tell malformed input from an already-taken
/// email; internally they stay distinct kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Input shape violations, all accumulated
    Validation(Vec<String>),
    /// Duplicate registration
    Conflict(String),
    /// Unknown email or wrong password, indistinguishable on the wire
    InvalidCredentials,
    /// Missing or invalid bearer token
    Unauthorized(String),
    /// Unexpected failure; logged in full, opaque on the wire
    InternalServerError(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(messages) => (StatusCode::BAD_REQUEST, ErrorsBody::new(messages)),
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, ErrorsBody::single(msg)),
            ApiError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                ErrorsBody::single("Invalid Credentials"),
            ),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ErrorsBody::single(msg)),
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorsBody::single("Server Error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailAlreadyRegistered(_) => {
                ApiError::Conflict("User already exists".to_string())
            }
            UserError::InvalidCredentials => ApiError::InvalidCredentials,
            UserError::InvalidName(_) | UserError::InvalidEmail(_) => {
                ApiError::Validation(vec![err.to_string()])
            }
            // A NotFound reaching the boundary means the guard resolved an
            // identity whose record is gone: an invariant violation.
            UserError::NotFound(_)
            | UserError::NotFoundByEmail(_)
            | UserError::InvalidUserId(_)
            | UserError::PasswordHash(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_and_validation_share_wire_shape() {
        let conflict = ErrorsBody::single("User already exists");
        let validation = ErrorsBody::new(vec!["Name is required".to_string()]);

        let conflict_json = serde_json::to_value(&conflict).unwrap();
        let validation_json = serde_json::to_value(&validation).unwrap();

        assert!(conflict_json["errors"][0]["msg"].is_string());
        assert!(validation_json["errors"][0]["msg"].is_string());
    }

    #[test]
    fn test_duplicate_email_maps_to_conflict() {
        let err = UserError::EmailAlreadyRegistered("a@x.com".to_string());
        assert_eq!(
            ApiError::from(err),
            ApiError::Conflict("User already exists".to_string())
        );
    }

    #[test]
    fn test_not_found_maps_to_internal() {
        let err = UserError::NotFound("some-id".to_string());
        assert!(matches!(
            ApiError::from(err),
            ApiError::InternalServerError(_)
        ));
    }
}
