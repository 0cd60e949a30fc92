use std::sync::Arc;
use std::time::Duration as StdDuration;

use auth::Authenticator;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use chrono::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_document::create_document;
use super::handlers::delete_document::delete_document;
use super::handlers::delete_user::delete_user;
use super::handlers::get_document::get_document;
use super::handlers::get_user::get_user;
use super::handlers::list_documents::list_documents;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::signup::signup;
use super::handlers::update_document::update_document;
use super::handlers::update_user::update_user;
use super::handlers::upload_document_file::upload_document_file;
use super::middleware::authenticate as auth_middleware;
use crate::domain::document::service::DocumentService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::document::PostgresDocumentRepository;
use crate::outbound::repositories::user::PostgresUserRepository;
use crate::outbound::storage::FsBlobStorage;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub document_service: Arc<DocumentService<PostgresDocumentRepository, FsBlobStorage>>,
    pub authenticator: Arc<Authenticator>,
    /// Subject lookup used by the authorization guard. Shares the same
    /// repository the user service is built on.
    pub user_lookup: Arc<PostgresUserRepository>,
    pub access_ttl: Duration,
    pub signup_ttl: Duration,
    pub max_upload_bytes: usize,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login));

    let protected_routes = Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/:user_id", get(get_user))
        .route("/api/users/:user_id", patch(update_user))
        .route("/api/users/:user_id", delete(delete_user))
        .route("/api/documents", post(create_document))
        .route("/api/documents", get(list_documents))
        .route("/api/documents/:document_id", get(get_document))
        .route("/api/documents/:document_id", put(update_document))
        .route("/api/documents/:document_id", delete(delete_document))
        .route(
            "/api/documents/:document_id/file",
            post(upload_document_file),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

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
            |response: &Response<Body>, latency: StdDuration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    // Leave headroom for multipart framing on top of the file itself.
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes + 64 * 1024);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .layer(body_limit)
        .with_state(state)
}
