use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;
use uuid::Uuid;

use crate::{auth::jwt::JwtKeys, error::AuthError};

/// Extracts and verifies the session token, yielding the user id.
pub struct AuthUser(pub Uuid);

/// Strip the `Bearer ` scheme if present; a bare token is accepted.
fn bearer_token(value: &str) -> Option<&str> {
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    (!token.is_empty()).then_some(token)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = bearer_token(header).ok_or(AuthError::MissingToken)?;

        let claims = match keys.verify(token) {
            Ok(c) => c,
            Err(e) => {
                warn!("request with invalid token");
                return Err(e);
            }
        };

        Ok(AuthUser(claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_the_bearer_scheme() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn accepts_a_bare_token() {
        assert_eq!(bearer_token("abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn rejects_an_empty_value_after_stripping() {
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("   "), None);
    }
}
