use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use axum::http::HeaderName;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use user_api::config::Config;
use user_api::domain::user::service::UserService;
use user_api::inbound::http::router::create_router;
use user_api::outbound::repositories::PgUserRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "user-api",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_header = %config.jwt.header_name,
        token_ttl_secs = config.jwt.expiration_secs,
        hash_cost = config.password.cost,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.password.cost,
        config.jwt.expiration_secs,
    ));
    let user_repository = Arc::new(PgUserRepository::new(pg_pool));
    let user_service = Arc::new(UserService::new(
        user_repository,
        PasswordHasher::new(config.password.cost),
    ));

    let token_header: HeaderName = config.jwt.header_name.parse()?;

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(user_service, authenticator, token_header);
    axum::serve(http_listener, application).await?;

    Ok(())
}
