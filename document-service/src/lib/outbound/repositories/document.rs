use std::str::FromStr;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::document::errors::DocumentError;
use crate::domain::document::models::Document;
use crate::domain::document::models::DocumentId;
use crate::domain::document::models::FileType;
use crate::domain::document::ports::DocumentRepository;
use crate::domain::user::models::UserId;

pub struct PostgresDocumentRepository {
    pool: PgPool,
}

impl PostgresDocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_document(row: &PgRow) -> Result<Document, DocumentError> {
        Ok(Document {
            id: DocumentId(row.try_get("id").map_err(db_error)?),
            owner_id: UserId(row.try_get("owner_id").map_err(db_error)?),
            title: row.try_get("title").map_err(db_error)?,
            file_type: FileType::from_str(&row.try_get::<String, _>("file_type").map_err(db_error)?)?,
            file_url: row.try_get("file_url").map_err(db_error)?,
            description: row.try_get("description").map_err(db_error)?,
            created_at: row.try_get("created_at").map_err(db_error)?,
            updated_at: row.try_get("updated_at").map_err(db_error)?,
        })
    }
}

fn db_error(e: sqlx::Error) -> DocumentError {
    DocumentError::DatabaseError(e.to_string())
}

#[async_trait]
impl DocumentRepository for PostgresDocumentRepository {
    async fn create(&self, document: Document) -> Result<Document, DocumentError> {
        sqlx::query(
            r#"
            INSERT INTO documents
                (id, owner_id, title, file_type, file_url, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(document.id.0)
        .bind(document.owner_id.0)
        .bind(&document.title)
        .bind(document.file_type.as_str())
        .bind(&document.file_url)
        .bind(&document.description)
        .bind(document.created_at)
        .bind(document.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(document)
    }

    async fn find_by_id(
        &self,
        owner: &UserId,
        id: &DocumentId,
    ) -> Result<Option<Document>, DocumentError> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, title, file_type, file_url, description, created_at, updated_at
            FROM documents
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(|r| Self::row_to_document(&r)).transpose()
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Document>, DocumentError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, title, file_type, file_url, description, created_at, updated_at
            FROM documents
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.iter().map(Self::row_to_document).collect()
    }

    async fn update(&self, document: Document) -> Result<Document, DocumentError> {
        let result = sqlx::query(
            r#"
            UPDATE documents
            SET title = $3, file_type = $4, file_url = $5, description = $6, updated_at = $7
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(document.id.0)
        .bind(document.owner_id.0)
        .bind(&document.title)
        .bind(document.file_type.as_str())
        .bind(&document.file_url)
        .bind(&document.description)
        .bind(document.updated_at)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DocumentError::NotFound(document.id.to_string()));
        }

        Ok(document)
    }

    async fn delete(&self, owner: &UserId, id: &DocumentId) -> Result<(), DocumentError> {
        let result = sqlx::query(
            r#"
            DELETE FROM documents
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DocumentError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
