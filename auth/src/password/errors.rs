use thiserror::Error;

/// Error type for password operations.
///
/// Verification has no error variant: a mismatch or a malformed stored hash
/// is reported as a plain `false` by [`super::PasswordHasher::verify`].
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
