use std::str::FromStr;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::DocumentData;
use crate::domain::document::errors::FileTypeError;
use crate::domain::document::models::DocumentId;
use crate::domain::document::models::FileType;
use crate::domain::document::models::UpdateDocumentCommand;
use crate::domain::document::ports::DocumentServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn update_document(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Path(document_id): Path<String>,
    Json(body): Json<UpdateDocumentRequest>,
) -> Result<ApiSuccess<DocumentData>, ApiError> {
    let document_id =
        DocumentId::from_string(&document_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .document_service
        .update_document(&current.user.id, &document_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref document| ApiSuccess::new(StatusCode::OK, document.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateDocumentRequest {
    title: Option<String>,
    file_type: Option<String>,
    file_url: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateDocumentRequestError {
    #[error("Invalid file type: {0}")]
    FileType(#[from] FileTypeError),
}

impl UpdateDocumentRequest {
    fn try_into_command(self) -> Result<UpdateDocumentCommand, ParseUpdateDocumentRequestError> {
        let file_type = self
            .file_type
            .as_deref()
            .map(FileType::from_str)
            .transpose()?;
        Ok(UpdateDocumentCommand {
            title: self.title,
            file_type,
            file_url: self.file_url,
            description: self.description,
        })
    }
}

impl From<ParseUpdateDocumentRequestError> for ApiError {
    fn from(err: ParseUpdateDocumentRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
