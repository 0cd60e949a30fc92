use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::DocumentData;
use crate::domain::document::ports::DocumentServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// List the caller's documents, newest first.
pub async fn list_documents(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<ApiSuccess<Vec<DocumentData>>, ApiError> {
    state
        .document_service
        .list_documents(&current.user.id)
        .await
        .map_err(ApiError::from)
        .map(|documents| {
            ApiSuccess::new(
                StatusCode::OK,
                documents.iter().map(DocumentData::from).collect(),
            )
        })
}
