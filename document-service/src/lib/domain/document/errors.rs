use thiserror::Error;

/// Error for DocumentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for FileType parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FileTypeError {
    #[error("Unknown file type: {0} (expected pdf, excel, doc, or csv)")]
    Unknown(String),
}

/// Error type for blob storage operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Failed to store blob {key}: {reason}")]
    WriteFailed { key: String, reason: String },
}

/// Error type for document domain operations.
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    #[error("Document with id {0} not found")]
    NotFound(String),

    #[error("Invalid document id: {0}")]
    InvalidDocumentId(#[from] DocumentIdError),

    #[error("Invalid file type: {0}")]
    InvalidFileType(#[from] FileTypeError),

    #[error("Unsupported upload file type: {0}")]
    UnsupportedFileType(String),

    #[error("File exceeds upload limit: {actual_bytes} bytes (max {max_bytes})")]
    FileTooLarge {
        max_bytes: usize,
        actual_bytes: usize,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
