use serde::Deserialize;

/// Request body for adding a favorite track.
#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub track: String,
}
