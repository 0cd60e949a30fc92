use std::sync::Arc;

use auth::Authenticator;
use auth::TokenService;
use chrono::Duration;
use document_service::config::Config;
use document_service::domain::document::service::DocumentService;
use document_service::domain::user::service::UserService;
use document_service::inbound::http::router::create_router;
use document_service::inbound::http::router::AppState;
use document_service::outbound::repositories::PostgresDocumentRepository;
use document_service::outbound::repositories::PostgresUserRepository;
use document_service::outbound::storage::FsBlobStorage;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "document_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "document-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        storage_root = %config.storage.root,
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

    let token_service = TokenService::new(&config.jwt.secret, &config.jwt.algorithm)?;
    let authenticator = Arc::new(Authenticator::new(token_service));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let document_repository = Arc::new(PostgresDocumentRepository::new(pg_pool));
    let blob_storage = Arc::new(FsBlobStorage::new(
        &config.storage.root,
        &config.storage.public_base_url,
    ));

    let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
    let document_service = Arc::new(DocumentService::new(
        document_repository,
        blob_storage,
        config.storage.max_upload_bytes,
    ));

    let state = AppState {
        user_service,
        document_service,
        authenticator,
        user_lookup: user_repository,
        access_ttl: Duration::minutes(config.jwt.access_ttl_minutes),
        signup_ttl: Duration::minutes(config.jwt.signup_ttl_minutes),
        max_upload_bytes: config.storage.max_upload_bytes,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(state);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
