use async_trait::async_trait;
use chrono::Duration;
use thiserror::Error;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Rejected;
use crate::token::TokenError;
use crate::token::TokenService;

/// Capability for resolving a token subject to a concrete identity.
///
/// Implemented by the consuming service over its user repository; the
/// authenticator treats storage as a black box.
#[async_trait]
pub trait SubjectLookup: Send + Sync {
    /// Resolved identity type (typically the service's user entity).
    type Identity: Send;

    /// Lookup failure type. Failures are never surfaced to callers of
    /// [`Authenticator::resolve`]; they collapse to [`Rejected`].
    type Error: std::error::Error + Send;

    /// Find the identity a subject claim refers to.
    ///
    /// # Arguments
    /// * `subject` - Subject claim extracted from a verified token
    ///
    /// # Returns
    /// The identity, or None if no record matches
    async fn find_by_subject(&self, subject: &str) -> Result<Option<Self::Identity>, Self::Error>;
}

/// Authentication coordinator combining password verification, token
/// issuance, and token-to-identity resolution.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

/// Login operation errors.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator around a configured token service.
    ///
    /// # Arguments
    /// * `token_service` - Token service holding the signing configuration
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(token_service: TokenService) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_service,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash.
    ///
    /// # Returns
    /// True iff the password matches; a malformed hash is simply false
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue a token for the subject.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Subject to embed in the token on success
    /// * `ttl` - Token validity window
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Token` - Token issuance failed
    pub fn login(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        ttl: Duration,
    ) -> Result<String, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_service.issue(subject, ttl)?)
    }

    /// Issue a token without password verification.
    ///
    /// Used at signup, where the caller has just created the account.
    ///
    /// # Errors
    /// * `TokenError` - Token issuance failed
    pub fn issue_token(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        self.token_service.issue(subject, ttl)
    }

    /// Resolve a bearer token to a concrete identity.
    ///
    /// Verifies the token, then looks up the subject through the injected
    /// capability. A valid token whose subject no longer exists, and a lookup
    /// failure, are both reported as the same [`Rejected`] as an invalid
    /// token; external callers cannot tell the cases apart.
    ///
    /// # Arguments
    /// * `token` - Bearer token as presented by the client
    /// * `lookup` - Subject lookup capability
    ///
    /// # Returns
    /// The authenticated identity
    pub async fn resolve<L: SubjectLookup>(
        &self,
        token: &str,
        lookup: &L,
    ) -> Result<L::Identity, Rejected> {
        let subject = self.token_service.verify(token)?;

        match lookup.find_by_subject(&subject).await {
            Ok(Some(identity)) => Ok(identity),
            Ok(None) => Err(Rejected),
            Err(_) => Err(Rejected),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    fn authenticator() -> Authenticator {
        let tokens = TokenService::new("test_secret_key_at_least_32_bytes!", "HS256")
            .expect("Failed to build token service");
        Authenticator::new(tokens)
    }

    /// Lookup over a fixed set of known subjects.
    struct StaticLookup {
        known: Vec<String>,
    }

    #[async_trait]
    impl SubjectLookup for StaticLookup {
        type Identity = String;
        type Error = Infallible;

        async fn find_by_subject(&self, subject: &str) -> Result<Option<String>, Infallible> {
            Ok(self.known.iter().find(|s| *s == subject).cloned())
        }
    }

    #[test]
    fn test_login_success() {
        let auth = authenticator();

        let hash = auth
            .hash_password("pass_word!")
            .expect("Failed to hash password");
        let token = auth
            .login("pass_word!", &hash, "a@b.com", Duration::minutes(15))
            .expect("Login failed");

        assert!(!token.is_empty());
    }

    #[test]
    fn test_login_wrong_password() {
        let auth = authenticator();

        let hash = auth
            .hash_password("pass_word!")
            .expect("Failed to hash password");
        let result = auth.login("wrong_password", &hash, "a@b.com", Duration::minutes(15));

        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_resolve_known_subject() {
        let auth = authenticator();
        let lookup = StaticLookup {
            known: vec!["a@b.com".to_string()],
        };

        let token = auth
            .issue_token("a@b.com", Duration::hours(2))
            .expect("Failed to issue token");

        let identity = auth.resolve(&token, &lookup).await.expect("Resolve failed");
        assert_eq!(identity, "a@b.com");
    }

    #[tokio::test]
    async fn test_resolve_unknown_subject_matches_invalid_token() {
        let auth = authenticator();
        let lookup = StaticLookup { known: vec![] };

        // Valid token whose subject has no matching record.
        let token = auth
            .issue_token("u1", Duration::hours(2))
            .expect("Failed to issue token");
        let missing_user = auth.resolve(&token, &lookup).await;

        // Token signed with a different secret.
        let other = Authenticator::new(
            TokenService::new("another_secret_key_32_bytes_long!!", "HS256")
                .expect("Failed to build token service"),
        );
        let forged = other
            .issue_token("u1", Duration::hours(2))
            .expect("Failed to issue token");
        let bad_signature = auth.resolve(&forged, &lookup).await;

        // Both failures are the same shape.
        assert_eq!(missing_user, Err(Rejected));
        assert_eq!(bad_signature, Err(Rejected));
    }
}
