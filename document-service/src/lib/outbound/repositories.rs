pub mod document;
pub mod user;

pub use document::PostgresDocumentRepository;
pub use user::PostgresUserRepository;
