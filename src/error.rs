use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

/// Failures surfaced by the registration, login and favorites workflows.
///
/// Client-facing variants render their own message; infrastructure variants
/// are logged and collapse into an opaque 500 so internals never leak.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("This email address is already in use ({0})")]
    Conflict(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Missing authentication token")]
    MissingToken,
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("User not found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error("crypto failure: {0}")]
    Crypto(String),
    #[error("store failure")]
    Store(#[from] sqlx::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AuthError::Validation(_) | AuthError::Conflict(_) => {
                (StatusCode::CONFLICT, self.to_string())
            }
            AuthError::InvalidCredentials | AuthError::MissingToken | AuthError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AuthError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AuthError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AuthError::Crypto(ref detail) => {
                error!(error = %detail, "key derivation failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
            AuthError::Store(ref e) => {
                error!(error = %e, "store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
        };
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_renders_conflict_with_joined_messages() {
        let err = AuthError::Validation(vec!["first".into(), "second".into()]);
        assert_eq!(err.to_string(), "first, second");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn credential_and_token_failures_are_unauthorized() {
        for err in [
            AuthError::InvalidCredentials,
            AuthError::MissingToken,
            AuthError::InvalidToken,
        ] {
            assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn infrastructure_failures_collapse_to_opaque_500() {
        let response = AuthError::Crypto("rng exhausted".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = AuthError::Store(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn conflict_names_the_email() {
        let err = AuthError::Conflict("ada@example.com".into());
        assert!(err.to_string().contains("ada@example.com"));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }
}
