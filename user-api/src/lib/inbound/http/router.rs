use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::HeaderName;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::current_user::current_user;
use super::handlers::login::login;
use super::handlers::register::register;
use super::middleware::authenticate as auth_guard;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::user::PgUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub authenticator: Arc<Authenticator>,
    /// Custom header carrying the raw signed token.
    pub token_header: HeaderName,
}

pub fn create_router(
    user_service: Arc<UserService<PgUserRepository>>,
    authenticator: Arc<Authenticator>,
    token_header: HeaderName,
) -> Router {
    let state = AppState {
        user_service,
        authenticator,
        token_header,
    };

    let public_routes = Router::new()
        .route("/api/users", post(register))
        .route("/api/auth", post(login));

    let protected_routes = Router::new()
        .route("/api/auth", get(current_user))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
