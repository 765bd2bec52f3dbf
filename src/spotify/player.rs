use reqwest::{Method, StatusCode};
use serde_json::json;

use super::{SpotifyClient, check_status};
use crate::{errors::Error, types::CurrentlyPlaying};

/// Playback commands forwarded to the user's active device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Play,
    Pause,
    Next,
    Previous,
}

impl PlayerCommand {
    pub fn method(self) -> Method {
        match self {
            PlayerCommand::Play | PlayerCommand::Pause => Method::PUT,
            PlayerCommand::Next | PlayerCommand::Previous => Method::POST,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            PlayerCommand::Play => "/me/player/play",
            PlayerCommand::Pause => "/me/player/pause",
            PlayerCommand::Next => "/me/player/next",
            PlayerCommand::Previous => "/me/player/previous",
        }
    }
}

impl SpotifyClient {
    /// Fetches the track the user is currently listening to.
    ///
    /// Returns `Ok(None)` when Spotify answers `204 No Content`, which it does
    /// when there is no active playback.
    pub async fn currently_playing(&self, token: &str) -> Result<Option<CurrentlyPlaying>, Error> {
        let response = self
            .http
            .get(self.endpoint("/me/player/currently-playing"))
            .bearer_auth(token)
            .send()
            .await?;

        let response = check_status(response).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        Ok(Some(response.json::<CurrentlyPlaying>().await?))
    }

    /// Sends a playback command with an empty JSON body.
    ///
    /// Any 2xx status counts as success; the response body is ignored.
    pub async fn send_command(&self, token: &str, command: PlayerCommand) -> Result<(), Error> {
        let response = self
            .http
            .request(command.method(), self.endpoint(command.path()))
            .bearer_auth(token)
            .json(&json!({}))
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }
}
