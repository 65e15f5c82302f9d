use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: String,
    pub token: String,
}

/// Query string for the current-user lookup.
#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

/// Profile of the user resolved from a session token.
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub favorites: Vec<String>,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_user_response_uses_camel_case_avatar_key() {
        let response = CurrentUserResponse {
            id: Uuid::new_v4(),
            firstname: "Ada".into(),
            lastname: "Lovelace".into(),
            email: "ada@example.com".into(),
            favorites: vec![],
            avatar_url: "https://avatars.test/abc".into(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"avatarUrl\""));
        assert!(json.contains("\"favorites\":[]"));
    }
}
