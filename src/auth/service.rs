use sqlx::PgPool;
use tracing::{info, warn};

use crate::{
    auth::{dto::RegisterRequest, kdf, validate},
    error::AuthError,
    users::User,
};

/// Postgres unique-constraint violation.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

/// Validate the registration input, derive credentials and persist the new
/// user. Email uniqueness is enforced by the store's unique index; a
/// conflicting insert surfaces as a conflict error rather than being
/// pre-checked.
pub async fn register(db: &PgPool, req: RegisterRequest) -> Result<User, AuthError> {
    let errors = validate::validate_registration(&req);
    if !errors.is_empty() {
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        warn!(?fields, "registration rejected by validation");
        return Err(AuthError::Validation(
            errors.into_iter().map(|e| e.message).collect(),
        ));
    }

    // Derivation is CPU-bound, keep it off the async workers.
    let password = req.password.clone();
    let derived = tokio::task::spawn_blocking(move || kdf::derive(&password))
        .await
        .map_err(|e| AuthError::Crypto(e.to_string()))??;

    let email = req.email.trim().to_lowercase();
    match User::create(
        db,
        req.firstname.trim(),
        req.lastname.trim(),
        &email,
        &derived.salt,
        &derived.hash,
    )
    .await
    {
        Ok(user) => {
            info!(user_id = %user.id, email = %user.email, "user registered");
            Ok(user)
        }
        Err(e) if is_unique_violation(&e) => {
            warn!(email = %email, "registration with an email already in use");
            Err(AuthError::Conflict(email))
        }
        Err(e) => Err(AuthError::Store(e)),
    }
}

/// Look up the user and verify the password against the stored credentials.
/// Unknown email and wrong password fail identically so neither factor can
/// be probed.
pub async fn login(db: &PgPool, email: &str, password: &str) -> Result<User, AuthError> {
    let email = email.trim().to_lowercase();
    let Some(user) = User::find_by_email(db, &email).await? else {
        warn!("login with unknown email");
        return Err(AuthError::InvalidCredentials);
    };

    let password = password.to_string();
    let salt = user.password_salt.clone();
    let hash = user.password_hash.clone();
    let ok = tokio::task::spawn_blocking(move || kdf::verify(&password, &salt, &hash))
        .await
        .map_err(|e| AuthError::Crypto(e.to_string()))??;

    if !ok {
        warn!(user_id = %user.id, "login with wrong password");
        return Err(AuthError::InvalidCredentials);
    }

    info!(user_id = %user.id, "login verified");
    Ok(user)
}
