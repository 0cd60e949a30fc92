use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// A token is a value created once at issuance and never updated in place:
/// subject, issued-at, and absolute expiry, nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (the identifier of the user this token authenticates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a subject with an expiry relative to now.
    ///
    /// # Arguments
    /// * `subject` - Identifier embedded in the token (e.g. the user's email)
    /// * `ttl` - Validity window; expiry is `now + ttl`
    ///
    /// # Returns
    /// Claims with sub, iat, and exp set
    pub fn for_subject(subject: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: Some(subject.to_string()),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject("a@b.com", Duration::minutes(15));

        assert_eq!(claims.sub, Some("a@b.com".to_string()));
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_for_subject_zero_ttl() {
        let claims = Claims::for_subject("a@b.com", Duration::zero());
        assert_eq!(claims.exp, claims.iat);
    }
}
