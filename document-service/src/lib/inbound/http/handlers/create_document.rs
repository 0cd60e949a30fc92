use std::str::FromStr;

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
use crate::domain::document::models::CreateDocumentCommand;
use crate::domain::document::models::FileType;
use crate::domain::document::ports::DocumentServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_document(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<CreateDocumentRequest>,
) -> Result<ApiSuccess<DocumentData>, ApiError> {
    state
        .document_service
        .create_document(&current.user.id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref document| ApiSuccess::new(StatusCode::CREATED, document.into()))
}

/// HTTP request body for creating a document (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateDocumentRequest {
    title: String,
    file_type: String,
    file_url: Option<String>,
    description: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateDocumentRequestError {
    #[error("Invalid file type: {0}")]
    FileType(#[from] FileTypeError),

    #[error("Title must not be empty")]
    EmptyTitle,
}

impl CreateDocumentRequest {
    fn try_into_command(self) -> Result<CreateDocumentCommand, ParseCreateDocumentRequestError> {
        if self.title.trim().is_empty() {
            return Err(ParseCreateDocumentRequestError::EmptyTitle);
        }
        let file_type = FileType::from_str(&self.file_type)?;
        Ok(CreateDocumentCommand {
            title: self.title,
            file_type,
            file_url: self.file_url,
            description: self.description,
        })
    }
}

impl From<ParseCreateDocumentRequestError> for ApiError {
    fn from(err: ParseCreateDocumentRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
