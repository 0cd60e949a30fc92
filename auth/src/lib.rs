//! Authentication utilities library
//!
//! Provides the authentication core for the document service:
//! - Password hashing (Argon2id)
//! - Signed, time-limited bearer tokens (JWT)
//! - Token-to-identity resolution through an injected lookup capability
//!
//! The consuming service adapts these pieces to its own domain: it implements
//! [`SubjectLookup`] over its user storage and maps [`Rejected`] to its
//! transport's uniform unauthenticated response.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//!
//! let tokens = TokenService::new("secret_key_at_least_32_bytes_long!", "HS256").unwrap();
//! let token = tokens.issue("a@b.com", Duration::minutes(15)).unwrap();
//! assert_eq!(tokens.verify(&token).unwrap(), "a@b.com");
//! ```
//!
//! ## Complete Login Flow
//! ```
//! use auth::{Authenticator, TokenService};
//! use chrono::Duration;
//!
//! let tokens = TokenService::new("secret_key_at_least_32_bytes_long!", "HS256").unwrap();
//! let auth = Authenticator::new(tokens);
//!
//! // Signup: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let token = auth
//!     .login("password123", &hash, "a@b.com", Duration::minutes(15))
//!     .unwrap();
//! assert!(!token.is_empty());
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::SubjectLookup;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::ConfigError;
pub use token::Rejected;
pub use token::TokenError;
pub use token::TokenService;
