use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use constant_time_eq::constant_time_eq;
use pbkdf2::pbkdf2_hmac;
use rand::{rngs::OsRng, RngCore};
use sha2::Sha256;
use tracing::error;

use crate::error::AuthError;

/// Salt and derived-key size in bytes.
const LEN: usize = 128;

/// PBKDF2 rounds; one derivation costs a few hundred milliseconds.
const ITERATIONS: u32 = 12_000;

/// Credentials produced by a fresh derivation, base64-encoded for storage.
#[derive(Debug, Clone)]
pub struct DerivedPassword {
    pub salt: String,
    pub hash: String,
}

/// Derive storable credentials from a clear-text password with a fresh
/// random salt.
pub fn derive(password: &str) -> Result<DerivedPassword, AuthError> {
    let mut salt = [0u8; LEN];
    OsRng.try_fill_bytes(&mut salt).map_err(|e| {
        error!(error = %e, "salt generation failed");
        AuthError::Crypto(e.to_string())
    })?;
    let hash = derive_with_salt(password, &salt);
    Ok(DerivedPassword {
        salt: BASE64.encode(salt),
        hash: BASE64.encode(hash),
    })
}

/// PBKDF2-HMAC-SHA256 over (password, salt). Deterministic: the same pair
/// always yields the same hash.
pub fn derive_with_salt(password: &str, salt: &[u8]) -> [u8; LEN] {
    let mut hash = [0u8; LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, ITERATIONS, &mut hash);
    hash
}

/// Re-derive with the stored salt and compare against the stored hash in
/// constant time.
pub fn verify(password: &str, stored_salt: &str, stored_hash: &str) -> Result<bool, AuthError> {
    let salt = BASE64.decode(stored_salt).map_err(|e| {
        error!(error = %e, "stored salt is not valid base64");
        AuthError::Crypto(e.to_string())
    })?;
    let expected = BASE64.decode(stored_hash).map_err(|e| {
        error!(error = %e, "stored hash is not valid base64");
        AuthError::Crypto(e.to_string())
    })?;
    let computed = derive_with_salt(password, &salt);
    Ok(constant_time_eq(&computed, &expected))
}
