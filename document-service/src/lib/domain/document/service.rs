use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::document::errors::DocumentError;
use crate::domain::document::models::CreateDocumentCommand;
use crate::domain::document::models::Document;
use crate::domain::document::models::DocumentId;
use crate::domain::document::models::FileType;
use crate::domain::document::models::UpdateDocumentCommand;
use crate::domain::document::ports::BlobStorage;
use crate::domain::document::ports::DocumentRepository;
use crate::domain::document::ports::DocumentServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for document operations.
pub struct DocumentService<DR, BS>
where
    DR: DocumentRepository,
    BS: BlobStorage,
{
    repository: Arc<DR>,
    storage: Arc<BS>,
    max_upload_bytes: usize,
}

impl<DR, BS> DocumentService<DR, BS>
where
    DR: DocumentRepository,
    BS: BlobStorage,
{
    /// Create a new document service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Document persistence implementation
    /// * `storage` - Blob storage for uploaded files
    /// * `max_upload_bytes` - Upload size limit from configuration
    pub fn new(repository: Arc<DR>, storage: Arc<BS>, max_upload_bytes: usize) -> Self {
        Self {
            repository,
            storage,
            max_upload_bytes,
        }
    }
}

#[async_trait]
impl<DR, BS> DocumentServicePort for DocumentService<DR, BS>
where
    DR: DocumentRepository,
    BS: BlobStorage,
{
    async fn create_document(
        &self,
        owner: &UserId,
        command: CreateDocumentCommand,
    ) -> Result<Document, DocumentError> {
        let now = Utc::now();
        let document = Document {
            id: DocumentId::new(),
            owner_id: *owner,
            title: command.title,
            file_type: command.file_type,
            file_url: command.file_url,
            description: command.description,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(document).await
    }

    async fn get_document(
        &self,
        owner: &UserId,
        id: &DocumentId,
    ) -> Result<Document, DocumentError> {
        self.repository
            .find_by_id(owner, id)
            .await?
            .ok_or(DocumentError::NotFound(id.to_string()))
    }

    async fn list_documents(&self, owner: &UserId) -> Result<Vec<Document>, DocumentError> {
        self.repository.list_by_owner(owner).await
    }

    async fn update_document(
        &self,
        owner: &UserId,
        id: &DocumentId,
        command: UpdateDocumentCommand,
    ) -> Result<Document, DocumentError> {
        let mut document = self
            .repository
            .find_by_id(owner, id)
            .await?
            .ok_or(DocumentError::NotFound(id.to_string()))?;

        if let Some(title) = command.title {
            document.title = title;
        }

        if let Some(file_type) = command.file_type {
            document.file_type = file_type;
        }

        if let Some(file_url) = command.file_url {
            document.file_url = Some(file_url);
        }

        if let Some(description) = command.description {
            document.description = description;
        }

        document.updated_at = Utc::now();

        self.repository.update(document).await
    }

    async fn delete_document(
        &self,
        owner: &UserId,
        id: &DocumentId,
    ) -> Result<(), DocumentError> {
        self.repository.delete(owner, id).await
    }

    async fn attach_file(
        &self,
        owner: &UserId,
        id: &DocumentId,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<Document, DocumentError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("");
        let file_type = FileType::from_extension(extension)
            .ok_or_else(|| DocumentError::UnsupportedFileType(extension.to_string()))?;

        if bytes.len() > self.max_upload_bytes {
            return Err(DocumentError::FileTooLarge {
                max_bytes: self.max_upload_bytes,
                actual_bytes: bytes.len(),
            });
        }

        let mut document = self
            .repository
            .find_by_id(owner, id)
            .await?
            .ok_or(DocumentError::NotFound(id.to_string()))?;

        let key = format!("{}.{}", document.id, extension.to_ascii_lowercase());
        let url = self
            .storage
            .put(&key, file_type.content_type(), bytes)
            .await?;

        document.file_type = file_type;
        document.file_url = Some(url);
        document.updated_at = Utc::now();

        self.repository.update(document).await
    }
}
