//! Actor resolution. Every use-case receives an explicit [`Actor`] value;
//! nothing reads ambient session state.

use axum::http::{HeaderMap, header};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use sha2::{Digest, Sha256};
use storage::models::User;
use storage::repository::session::SessionRepository;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::WebError;

/// The identity performing a use-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    Anonymous,
    User {
        user_id: Uuid,
        username: String,
        is_admin: bool,
    },
}

impl Actor {
    pub fn from_user(user: &User) -> Self {
        Actor::User {
            user_id: user.user_id,
            username: user.username.clone(),
            is_admin: user.is_admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Actor::User { is_admin: true, .. })
    }

    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Actor::Anonymous => None,
            Actor::User { user_id, .. } => Some(*user_id),
        }
    }
}

/// Mint an opaque session token: 32 random bytes, hex encoded.
pub fn generate_session_token() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}

/// Tokens are stored and looked up only as digests.
pub fn token_digest(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

async fn resolve(state: &AppState, headers: &HeaderMap) -> Result<Option<Actor>, WebError> {
    let Some(token) = bearer_token(headers) else {
        return Ok(None);
    };

    let repo = SessionRepository::new(state.db.pool());
    let user = repo.find_user_by_token_hash(&token_digest(token)).await?;

    Ok(user.map(|u| Actor::from_user(&u)))
}

/// Extractor for endpoints that require a signed-in user; rejects with 401
/// when the session token is absent, unknown or expired.
#[derive(Debug, Clone)]
pub struct CurrentActor(pub Actor);

#[async_trait]
impl FromRequestParts<AppState> for CurrentActor {
    type Rejection = WebError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match resolve(state, &parts.headers).await? {
            Some(actor) => Ok(CurrentActor(actor)),
            None => Err(WebError::Unauthorized),
        }
    }
}

/// Extractor for endpoints open to anonymous callers; resolves to
/// [`Actor::Anonymous`] instead of rejecting.
#[derive(Debug, Clone)]
pub struct MaybeActor(pub Actor);

#[async_trait]
impl FromRequestParts<AppState> for MaybeActor {
    type Rejection = WebError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match resolve(state, &parts.headers).await {
            Ok(Some(actor)) => Ok(MaybeActor(actor)),
            Ok(None) | Err(_) => Ok(MaybeActor(Actor::Anonymous)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn tokens_are_unique_hex() {
        let a = generate_session_token();
        let b = generate_session_token();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
        assert!(hex::decode(&a).is_ok());
    }

    #[test]
    fn digest_is_stable_and_differs_from_token() {
        let token = "abc123";
        assert_eq!(token_digest(token), token_digest(token));
        assert_ne!(token_digest(token), token);
        assert_eq!(token_digest(token).len(), 64);
    }

    #[test]
    fn parses_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tok"));
        assert_eq!(bearer_token(&headers), Some("tok"));
    }

    #[test]
    fn rejects_non_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic tok"));
        assert_eq!(bearer_token(&headers), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn actor_accessors() {
        let id = Uuid::new_v4();
        let user = Actor::User {
            user_id: id,
            username: "falcon".to_string(),
            is_admin: false,
        };
        assert_eq!(user.user_id(), Some(id));
        assert!(!user.is_admin());
        assert_eq!(Actor::Anonymous.user_id(), None);
        assert!(!Actor::Anonymous.is_admin());
    }
}
