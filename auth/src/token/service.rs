use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::ConfigError;
use super::errors::Rejected;
use super::errors::TokenError;

/// Issues and verifies signed, time-limited bearer tokens.
///
/// Owns the signing secret and algorithm for the whole process; both are
/// fixed at construction and never mutated, so a single instance is safe to
/// share across request workers without locking.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenService {
    /// Create a token service from startup configuration.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret (should be at least 32 bytes)
    /// * `algorithm` - HMAC variant name: "HS256", "HS384", or "HS512"
    ///
    /// # Returns
    /// Configured TokenService instance
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    /// * `MissingAlgorithm` - Algorithm is empty
    /// * `UnsupportedAlgorithm` - Algorithm is not an HMAC variant
    pub fn new(secret: &str, algorithm: &str) -> Result<Self, ConfigError> {
        if secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }

        let algorithm = match algorithm {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            "" => return Err(ConfigError::MissingAlgorithm),
            other => return Err(ConfigError::UnsupportedAlgorithm(other.to_string())),
        };

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
        })
    }

    /// Issue a signed token for a subject.
    ///
    /// The token embeds the subject, the issuance time, and an absolute
    /// expiry of `now + ttl`. Once issued it is immutable and cannot be
    /// revoked; expiry is the only termination mechanism.
    ///
    /// # Arguments
    /// * `subject` - Identifier to embed in the token (e.g. the user's email)
    /// * `ttl` - Validity window
    ///
    /// # Returns
    /// Opaque signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        let claims = Claims::for_subject(subject, ttl);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and extract its subject.
    ///
    /// Checks signature integrity and expiry with zero leeway, then requires
    /// a subject claim. Any failure collapses to [`Rejected`]; see its
    /// documentation for why no cause is reported.
    ///
    /// # Arguments
    /// * `token` - Token string as presented by the client
    ///
    /// # Returns
    /// The subject claim on success
    pub fn verify(&self, token: &str) -> Result<String, Rejected> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|_| Rejected)?;
        let claims = token_data.claims;

        // A ttl of zero means expiry == issuance; treat it as already expired.
        if claims.exp <= Utc::now().timestamp() {
            return Err(Rejected);
        }

        claims.sub.ok_or(Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test_secret_key_at_least_32_bytes!", "HS256")
            .expect("Failed to build token service")
    }

    #[test]
    fn test_issue_and_verify() {
        let tokens = service();

        let token = tokens
            .issue("a@b.com", Duration::minutes(15))
            .expect("Failed to issue token");

        assert_eq!(tokens.verify(&token), Ok("a@b.com".to_string()));
    }

    #[test]
    fn test_rejects_empty_secret() {
        let result = TokenService::new("", "HS256");
        assert_eq!(result.err(), Some(ConfigError::MissingSecret));
    }

    #[test]
    fn test_rejects_missing_algorithm() {
        let result = TokenService::new("test_secret_key_at_least_32_bytes!", "");
        assert_eq!(result.err(), Some(ConfigError::MissingAlgorithm));
    }

    #[test]
    fn test_rejects_non_hmac_algorithm() {
        let result = TokenService::new("test_secret_key_at_least_32_bytes!", "RS256");
        assert!(matches!(
            result.err(),
            Some(ConfigError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let tokens = service();
        let other = TokenService::new("another_secret_key_32_bytes_long!!", "HS256")
            .expect("Failed to build token service");

        let token = tokens
            .issue("a@b.com", Duration::minutes(15))
            .expect("Failed to issue token");

        assert_eq!(other.verify(&token), Err(Rejected));
    }

    #[test]
    fn test_rejects_truncated_token() {
        let tokens = service();

        let token = tokens
            .issue("a@b.com", Duration::minutes(15))
            .expect("Failed to issue token");
        let truncated = &token[..token.len() - 10];

        assert_eq!(tokens.verify(truncated), Err(Rejected));
    }

    #[test]
    fn test_rejects_garbage_token() {
        let tokens = service();
        assert_eq!(tokens.verify("not.a.token"), Err(Rejected));
        assert_eq!(tokens.verify(""), Err(Rejected));
    }

    #[test]
    fn test_rejects_zero_ttl_token() {
        let tokens = service();

        let token = tokens
            .issue("a@b.com", Duration::zero())
            .expect("Failed to issue token");

        assert_eq!(tokens.verify(&token), Err(Rejected));
    }

    #[test]
    fn test_rejects_already_expired_token() {
        let tokens = service();

        let token = tokens
            .issue("a@b.com", Duration::minutes(-5))
            .expect("Failed to issue token");

        assert_eq!(tokens.verify(&token), Err(Rejected));
    }

    #[test]
    fn test_rejects_token_without_subject() {
        let tokens = service();

        // Well-formed, correctly signed token that simply has no sub claim.
        let claims = Claims {
            sub: None,
            exp: (Utc::now() + Duration::minutes(15)).timestamp(),
            iat: Utc::now().timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test_secret_key_at_least_32_bytes!"),
        )
        .expect("Failed to encode token");

        assert_eq!(tokens.verify(&token), Err(Rejected));
    }
}
