use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::extractors::AuthUser, error::AuthError, favorites::dto::FavoriteRequest,
    state::AppState, users::User,
};

pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", post(add_favorite))
        .route("/favorites/:track_id", delete(remove_favorite))
}

/// The target user comes exclusively from the verified token; the body only
/// names the track.
#[instrument(skip(state, payload))]
pub async fn add_favorite(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<FavoriteRequest>,
) -> Result<StatusCode, AuthError> {
    let track = payload.track.trim();
    if track.is_empty() {
        return Err(AuthError::BadRequest("track is required".into()));
    }

    let updated = User::add_favorite(&state.db, user_id, track).await?;
    if !updated {
        return Err(AuthError::BadRequest("favorites update failed".into()));
    }

    info!(user_id = %user_id, track = %track, "favorite added");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state))]
pub async fn remove_favorite(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(track_id): Path<String>,
) -> Result<StatusCode, AuthError> {
    let updated = User::remove_favorite(&state.db, user_id, &track_id).await?;
    if !updated {
        return Err(AuthError::BadRequest("favorites update failed".into()));
    }

    info!(user_id = %user_id, track = %track_id, "favorite removed");
    Ok(StatusCode::NO_CONTENT)
}
