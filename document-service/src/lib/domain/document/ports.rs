use async_trait::async_trait;

use crate::domain::document::errors::DocumentError;
use crate::domain::document::errors::StorageError;
use crate::domain::document::models::CreateDocumentCommand;
use crate::domain::document::models::Document;
use crate::domain::document::models::DocumentId;
use crate::domain::document::models::UpdateDocumentCommand;
use crate::domain::user::models::UserId;

/// Port for document domain service operations.
///
/// Every operation is scoped to an owner: a document belonging to another
/// user behaves exactly like one that does not exist.
#[async_trait]
pub trait DocumentServicePort: Send + Sync + 'static {
    /// Create a new document owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_document(
        &self,
        owner: &UserId,
        command: CreateDocumentCommand,
    ) -> Result<Document, DocumentError>;

    /// Retrieve one of the owner's documents.
    ///
    /// # Errors
    /// * `NotFound` - Document does not exist or belongs to another owner
    /// * `DatabaseError` - Database operation failed
    async fn get_document(
        &self,
        owner: &UserId,
        id: &DocumentId,
    ) -> Result<Document, DocumentError>;

    /// List all documents owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_documents(&self, owner: &UserId) -> Result<Vec<Document>, DocumentError>;

    /// Update one of the owner's documents with optional fields.
    ///
    /// # Errors
    /// * `NotFound` - Document does not exist or belongs to another owner
    /// * `DatabaseError` - Database operation failed
    async fn update_document(
        &self,
        owner: &UserId,
        id: &DocumentId,
        command: UpdateDocumentCommand,
    ) -> Result<Document, DocumentError>;

    /// Delete one of the owner's documents.
    ///
    /// # Errors
    /// * `NotFound` - Document does not exist or belongs to another owner
    /// * `DatabaseError` - Database operation failed
    async fn delete_document(&self, owner: &UserId, id: &DocumentId)
        -> Result<(), DocumentError>;

    /// Attach an uploaded file to one of the owner's documents.
    ///
    /// Boundary checks only: the file name's extension must map to a
    /// supported [`crate::document::models::FileType`], and the payload must
    /// fit the configured size limit. The stored blob's URL is written back
    /// to the document.
    ///
    /// # Arguments
    /// * `owner` - Authenticated owner
    /// * `id` - Document to attach the file to
    /// * `file_name` - Client-supplied file name (used for type sniffing)
    /// * `bytes` - File contents
    ///
    /// # Errors
    /// * `NotFound` - Document does not exist or belongs to another owner
    /// * `UnsupportedFileType` - Extension is outside the supported set
    /// * `FileTooLarge` - Payload exceeds the configured limit
    /// * `Storage` - Blob store write failed
    /// * `DatabaseError` - Database operation failed
    async fn attach_file(
        &self,
        owner: &UserId,
        id: &DocumentId,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<Document, DocumentError>;
}

/// Persistence operations for the document aggregate.
///
/// Owner scoping happens here, in the queries themselves, so a missing and a
/// foreign document are indistinguishable further up.
#[async_trait]
pub trait DocumentRepository: Send + Sync + 'static {
    /// Persist new document to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, document: Document) -> Result<Document, DocumentError>;

    /// Retrieve a document by identifier, scoped to its owner.
    ///
    /// # Returns
    /// Optional document (None if not found or owned by someone else)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(
        &self,
        owner: &UserId,
        id: &DocumentId,
    ) -> Result<Option<Document>, DocumentError>;

    /// Retrieve all documents of one owner, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Document>, DocumentError>;

    /// Update existing document in storage, scoped to its owner.
    ///
    /// # Errors
    /// * `NotFound` - Document does not exist for this owner
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, document: Document) -> Result<Document, DocumentError>;

    /// Remove a document from storage, scoped to its owner.
    ///
    /// # Errors
    /// * `NotFound` - Document does not exist for this owner
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, owner: &UserId, id: &DocumentId) -> Result<(), DocumentError>;
}

/// Blob storage for uploaded document files.
///
/// The core treats storage as a black box: it hands over bytes and gets back
/// a URL clients can fetch the file from.
#[async_trait]
pub trait BlobStorage: Send + Sync + 'static {
    /// Store a blob under a key.
    ///
    /// # Arguments
    /// * `key` - Storage key, unique per document file
    /// * `content_type` - MIME type of the contents
    /// * `bytes` - File contents
    ///
    /// # Returns
    /// Public URL of the stored blob
    ///
    /// # Errors
    /// * `WriteFailed` - Blob could not be stored
    async fn put(
        &self,
        key: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<String, StorageError>;
}
