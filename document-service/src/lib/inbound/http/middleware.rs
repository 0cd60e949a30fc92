use auth::Authenticator;
use auth::Rejected;
use auth::SubjectLookup;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::domain::user::models::User;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated user through the request
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
}

/// Authorization guard for the protected routes.
///
/// Extracts the bearer token, resolves it to a user, and stores the result
/// in request extensions before any handler logic runs. Every failure mode
/// produces the same response; the cause is only visible in debug logs.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).ok_or_else(|| {
        tracing::debug!("Missing or malformed Authorization header");
        unauthenticated()
    })?;

    let user = resolve_active_user(&state.authenticator, token, state.user_lookup.as_ref())
        .await
        .map_err(|_| unauthenticated())?;

    req.extensions_mut().insert(CurrentUser { user });

    Ok(next.run(req).await)
}

/// Resolve a token to a user that is allowed in: the token must verify, the
/// subject must exist, and the account must still be active.
async fn resolve_active_user<L>(
    authenticator: &Authenticator,
    token: &str,
    lookup: &L,
) -> Result<User, Rejected>
where
    L: SubjectLookup<Identity = User>,
{
    let user = authenticator.resolve(token, lookup).await.map_err(|_| {
        tracing::debug!("Bearer token rejected");
        Rejected
    })?;

    if !user.is_active {
        tracing::debug!(user_id = %user.id, "Deactivated account rejected");
        return Err(Rejected);
    }

    Ok(user)
}

/// The uniform unauthenticated response. One body for every rejection cause,
/// so responses cannot be used to probe which check failed.
fn unauthenticated() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "Authentication required"
        })),
    )
        .into_response()
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use async_trait::async_trait;
    use auth::TokenService;
    use chrono::Duration;
    use chrono::Utc;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserId;

    fn request_with_header(value: Option<&str>) -> Request {
        let mut builder = http::Request::builder().uri("/api/documents");
        if let Some(value) = value {
            builder = builder.header(http::header::AUTHORIZATION, value);
        }
        builder.body(axum::body::Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_bearer_token() {
        let req = request_with_header(Some("Bearer abc.def.ghi"));
        assert_eq!(extract_bearer_token(&req), Some("abc.def.ghi"));
    }

    #[test]
    fn test_extract_missing_header() {
        let req = request_with_header(None);
        assert_eq!(extract_bearer_token(&req), None);
    }

    #[test]
    fn test_extract_wrong_scheme() {
        let req = request_with_header(Some("Basic dXNlcjpwYXNz"));
        assert_eq!(extract_bearer_token(&req), None);
    }

    struct StaticLookup {
        user: User,
    }

    #[async_trait]
    impl SubjectLookup for StaticLookup {
        type Identity = User;
        type Error = Infallible;

        async fn find_by_subject(&self, subject: &str) -> Result<Option<User>, Infallible> {
            Ok((self.user.email.as_str() == subject).then(|| self.user.clone()))
        }
    }

    fn sample_user(email: &str, is_active: bool) -> User {
        User {
            id: UserId::new(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            is_active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn test_authenticator() -> Authenticator {
        let tokens =
            TokenService::new("middleware_test_secret_32_bytes_long!", "HS256").unwrap();
        Authenticator::new(tokens)
    }

    #[tokio::test]
    async fn test_resolve_active_user_success() {
        let authenticator = test_authenticator();
        let user = sample_user("active@example.com", true);
        let user_id = user.id;
        let lookup = StaticLookup { user };

        let token = authenticator
            .issue_token("active@example.com", Duration::minutes(15))
            .unwrap();

        let resolved = resolve_active_user(&authenticator, &token, &lookup)
            .await
            .unwrap();
        assert_eq!(resolved.id, user_id);
    }

    #[tokio::test]
    async fn test_resolve_deactivated_account_is_rejected() {
        let authenticator = test_authenticator();
        let lookup = StaticLookup {
            user: sample_user("inactive@example.com", false),
        };

        // A perfectly valid token for an existing account: only the active
        // flag stands in the way.
        let token = authenticator
            .issue_token("inactive@example.com", Duration::minutes(15))
            .unwrap();

        let result = resolve_active_user(&authenticator, &token, &lookup).await;
        assert_eq!(result.unwrap_err(), Rejected);
    }

    #[tokio::test]
    async fn test_deactivated_account_rejected_same_as_bad_token() {
        let authenticator = test_authenticator();
        let lookup = StaticLookup {
            user: sample_user("inactive@example.com", false),
        };

        let token = authenticator
            .issue_token("inactive@example.com", Duration::minutes(15))
            .unwrap();

        let deactivated = resolve_active_user(&authenticator, &token, &lookup).await;
        let garbage = resolve_active_user(&authenticator, "not.a.token", &lookup).await;
        assert_eq!(deactivated.unwrap_err(), garbage.unwrap_err());
    }
}
