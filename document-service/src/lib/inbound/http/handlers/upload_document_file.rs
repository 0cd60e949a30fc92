use axum::extract::Multipart;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::DocumentData;
use crate::domain::document::models::DocumentId;
use crate::domain::document::ports::DocumentServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// Attach an uploaded file to a document.
///
/// Expects a single multipart field named `file` with a file name whose
/// extension identifies the type. Type and size checks happen in the domain
/// service.
pub async fn upload_document_file(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(document_id): Path<String>,
    mut multipart: Multipart,
) -> Result<ApiSuccess<DocumentData>, ApiError> {
    let document_id =
        DocumentId::from_string(&document_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| ApiError::BadRequest("File field has no file name".to_string()))?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read file field: {}", e)))?;

        let document = state
            .document_service
            .attach_file(&current.user.id, &document_id, &file_name, &bytes)
            .await
            .map_err(ApiError::from)?;

        return Ok(ApiSuccess::new(StatusCode::OK, (&document).into()));
    }

    Err(ApiError::BadRequest(
        "Missing multipart field 'file'".to_string(),
    ))
}
