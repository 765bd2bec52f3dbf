use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use super::{ApiError, BearerToken};
use crate::{server::AppState, spotify::PlayerCommand, types::NowPlaying};

pub async fn currently_playing(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
) -> Result<Json<NowPlaying>, ApiError> {
    let current = state
        .spotify
        .currently_playing(&token)
        .await
        .map_err(ApiError::upstream("Error fetching currently playing track."))?;

    Ok(Json(current.map(NowPlaying::from).unwrap_or_else(NowPlaying::idle)))
}

pub async fn play(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
) -> Result<StatusCode, ApiError> {
    command(&state, &token, PlayerCommand::Play, "Error playing track.").await
}

pub async fn pause(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
) -> Result<StatusCode, ApiError> {
    command(&state, &token, PlayerCommand::Pause, "Error pausing track").await
}

pub async fn next(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
) -> Result<StatusCode, ApiError> {
    command(&state, &token, PlayerCommand::Next, "Error skipping track.").await
}

pub async fn previous(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
) -> Result<StatusCode, ApiError> {
    command(
        &state,
        &token,
        PlayerCommand::Previous,
        "Error skipping to previous track.",
    )
    .await
}

// 204 is returned for any successful upstream status.
async fn command(
    state: &AppState,
    token: &str,
    command: PlayerCommand,
    failure: &'static str,
) -> Result<StatusCode, ApiError> {
    state
        .spotify
        .send_command(token, command)
        .await
        .map_err(ApiError::upstream(failure))?;

    Ok(StatusCode::NO_CONTENT)
}
