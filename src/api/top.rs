use std::sync::Arc;

use axum::{extract::State, response::Json};

use super::{ApiError, BearerToken};
use crate::{
    server::AppState,
    types::{ArtistSummary, TrackSummary},
};

pub async fn top_artists(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
) -> Result<Json<Vec<ArtistSummary>>, ApiError> {
    let artists = state
        .spotify
        .top_artists(&token)
        .await
        .map_err(ApiError::upstream("Error fetching top artists."))?;

    Ok(Json(artists.into_iter().map(ArtistSummary::from).collect()))
}

pub async fn top_tracks(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
) -> Result<Json<Vec<TrackSummary>>, ApiError> {
    let tracks = state
        .spotify
        .top_tracks(&token)
        .await
        .map_err(ApiError::upstream("Error fetching top tracks."))?;

    Ok(Json(tracks.into_iter().map(TrackSummary::from).collect()))
}
