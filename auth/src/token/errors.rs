use thiserror::Error;

/// Startup configuration errors for the token service.
///
/// These are fatal: a process without a usable signing secret and algorithm
/// must not start issuing tokens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Signing secret is not set")]
    MissingSecret,

    #[error("Signing algorithm is not set")]
    MissingAlgorithm,

    #[error("Unsupported signing algorithm: {0} (expected HS256, HS384, or HS512)")]
    UnsupportedAlgorithm(String),
}

/// Error type for token issuance.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}

/// Uniform verification failure.
///
/// Deliberately carries no cause: an invalid signature, a malformed or
/// truncated token, a past expiry, and a missing subject claim are all
/// indistinguishable to the caller, so a rejected request cannot be used as
/// an oracle for which check failed.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Unauthenticated")]
pub struct Rejected;
