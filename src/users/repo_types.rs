use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the credential store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_salt: String, // base64, generated once at registration
    #[serde(skip_serializing)]
    pub password_hash: String, // base64, derived from (password, salt)
    pub favorites: Vec<String>, // track ids, append order
    pub created_at: OffsetDateTime,
}
