use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::document::errors::DocumentIdError;
use crate::domain::document::errors::FileTypeError;
use crate::domain::user::models::UserId;

/// Document aggregate entity.
///
/// Every document belongs to exactly one owner; all reads and writes are
/// scoped to that owner. `file_url` stays empty until a file is attached
/// through the upload path.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,
    pub owner_id: UserId,
    pub title: String,
    pub file_type: FileType,
    pub file_url: Option<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Document unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    /// Generate a new random document ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a document ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, DocumentIdError> {
        Uuid::parse_str(s)
            .map(DocumentId)
            .map_err(|e| DocumentIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Closed set of supported document file types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Excel,
    Doc,
    Csv,
}

impl FileType {
    /// Canonical lowercase name, as persisted and serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Excel => "excel",
            FileType::Doc => "doc",
            FileType::Csv => "csv",
        }
    }

    /// MIME content type for the stored file.
    pub fn content_type(&self) -> &'static str {
        match self {
            FileType::Pdf => "application/pdf",
            FileType::Excel => "application/vnd.ms-excel",
            FileType::Doc => "application/msword",
            FileType::Csv => "text/csv",
        }
    }

    /// Map an uploaded file's extension to a file type.
    ///
    /// # Returns
    /// None for extensions outside the supported set
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(FileType::Pdf),
            "xls" | "xlsx" => Some(FileType::Excel),
            "doc" | "docx" => Some(FileType::Doc),
            "csv" => Some(FileType::Csv),
            _ => None,
        }
    }
}

impl FromStr for FileType {
    type Err = FileTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(FileType::Pdf),
            "excel" => Ok(FileType::Excel),
            "doc" => Ok(FileType::Doc),
            "csv" => Ok(FileType::Csv),
            other => Err(FileTypeError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to create a new document with domain types
#[derive(Debug)]
pub struct CreateDocumentCommand {
    pub title: String,
    pub file_type: FileType,
    pub file_url: Option<String>,
    pub description: String,
}

/// Command to update an existing document with optional fields.
///
/// Only provided fields will be updated.
#[derive(Debug)]
pub struct UpdateDocumentCommand {
    pub title: Option<String>,
    pub file_type: Option<FileType>,
    pub file_url: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_string_roundtrip() {
        for file_type in [FileType::Pdf, FileType::Excel, FileType::Doc, FileType::Csv] {
            assert_eq!(file_type.as_str().parse::<FileType>().unwrap(), file_type);
        }
    }

    #[test]
    fn test_file_type_unknown() {
        assert!("png".parse::<FileType>().is_err());
    }

    #[test]
    fn test_file_type_from_extension() {
        assert_eq!(FileType::from_extension("pdf"), Some(FileType::Pdf));
        assert_eq!(FileType::from_extension("PDF"), Some(FileType::Pdf));
        assert_eq!(FileType::from_extension("xlsx"), Some(FileType::Excel));
        assert_eq!(FileType::from_extension("docx"), Some(FileType::Doc));
        assert_eq!(FileType::from_extension("csv"), Some(FileType::Csv));
        assert_eq!(FileType::from_extension("exe"), None);
    }

    #[test]
    fn test_document_id_roundtrip() {
        let id = DocumentId::new();
        assert_eq!(DocumentId::from_string(&id.to_string()).unwrap(), id);
    }
}
