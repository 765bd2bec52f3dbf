use std::sync::Arc;

use axum::{extract::State, response::Json};

use super::{ApiError, BearerToken};
use crate::{server::AppState, types::RecentTrack};

/// Always asks Spotify for the last 50 tracks; a `limit` sent by the caller is ignored.
pub async fn recently_played(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
) -> Result<Json<Vec<RecentTrack>>, ApiError> {
    let history = state
        .spotify
        .recently_played(&token)
        .await
        .map_err(ApiError::upstream("Error fetching recent tracks."))?;

    Ok(Json(history.into_iter().map(RecentTrack::from).collect()))
}
