use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::document::models::DocumentId;
use crate::domain::document::ports::DocumentServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_document(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(document_id): Path<String>,
) -> Result<ApiSuccess<DeleteDocumentResponseData>, ApiError> {
    let document_id =
        DocumentId::from_string(&document_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .document_service
        .delete_document(&current.user.id, &document_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteDocumentResponseData {
                    message: "Document deleted successfully".to_string(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteDocumentResponseData {
    pub message: String,
}
