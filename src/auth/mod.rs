use crate::state::AppState;
use axum::Router;

mod dto;
pub(crate) mod extractors;
pub mod handlers;
pub mod jwt;
pub mod kdf;
pub mod service;
pub mod validate;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}
