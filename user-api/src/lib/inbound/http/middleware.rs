use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the resolved identity through the request.
///
/// Request-scoped: created by the guard, discarded at request end.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Auth guard: validates the bearer token on protected routes and injects
/// the resolved identity into the request extensions.
///
/// The token travels in a custom header (configured, `x-auth-token` by
/// default), not an `Authorization: Bearer` scheme. A missing header gets
/// its own message; every validation failure gets one uniform message so
/// the response does not reveal whether a token was expired, tampered, or
/// malformed. The specific failure is still logged.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = req
        .headers()
        .get(&state.token_header)
        .ok_or_else(|| {
            ApiError::Unauthorized("No token, authorization denied".to_string()).into_response()
        })?
        .to_str()
        .map_err(|_| {
            tracing::warn!("Token header contains non-ASCII bytes");
            ApiError::Unauthorized("Token is not valid".to_string()).into_response()
        })?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::Unauthorized("Token is not valid".to_string()).into_response()
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a valid user ID");
        ApiError::Unauthorized("Token is not valid".to_string()).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}
