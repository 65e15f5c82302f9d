use axum::{
    extract::{FromRef, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::{
        dto::{CurrentUserResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, TokenQuery},
        jwt::JwtKeys,
        service,
    },
    avatar,
    error::AuthError,
    state::AppState,
    users::User,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/auth", get(current_user))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AuthError> {
    service::register(&state.db, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: "User account created! You can log in!".into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let user = service::login(&state.db, &payload.email, &payload.password).await?;

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(LoginResponse {
        success: "Authentication succeeded!".into(),
        token,
    }))
}

/// Resolve the user behind a session token passed as a query parameter.
/// This surface reports token problems as 400, unlike the Bearer guard.
#[instrument(skip(state, query))]
pub async fn current_user(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<CurrentUserResponse>, AuthError> {
    let token = query
        .token
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AuthError::BadRequest("Missing token".into()))?;

    let keys = JwtKeys::from_ref(&state);
    let claims = keys
        .verify(token)
        .map_err(|_| AuthError::BadRequest("Invalid token".into()))?;

    let user = User::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or(AuthError::NotFound)?;

    let avatar_url = avatar::avatar_url(&state.config.avatar_base_url, &user.email);
    Ok(Json(CurrentUserResponse {
        id: user.id,
        firstname: user.firstname,
        lastname: user.lastname,
        email: user.email,
        favorites: user.favorites,
        avatar_url,
    }))
}
