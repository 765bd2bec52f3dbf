//! # Spotify Integration Module
//!
//! Client for the handful of Spotify Web API endpoints the backend forwards to.
//! Every method issues exactly one request and returns the decoded upstream
//! payload; reshaping for the frontend happens in [`crate::types`].
//!
//! ## Layout
//!
//! - [`auth`] - authorize URL and authorization code exchange (client credentials)
//! - [`player`] - currently playing track and playback commands
//! - [`top`] - the user's top artists and tracks
//! - [`history`] - recently played tracks
//!
//! ## Error Handling
//!
//! Nothing is retried. Transport failures surface as [`Error::Request`]; any
//! non-2xx status surfaces as [`Error::Upstream`] together with the response
//! body so the caller can log what Spotify said.
//!
//! ## Tokens
//!
//! Access tokens are passed in by the caller for every call and never kept.

pub mod auth;
pub mod history;
pub mod player;
pub mod top;

use reqwest::{Client, Response};

use crate::{config::Config, errors::Error};

pub use player::PlayerCommand;

#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    scope: String,
    auth_url: String,
    token_url: String,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Self {
        SpotifyClient {
            http: Client::new(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            scope: config.scope.clone(),
            auth_url: config.auth_url.clone(),
            token_url: config.token_url.clone(),
            api_url: config.api_url.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

/// Turns a non-2xx response into [`Error::Upstream`] carrying the body text.
async fn check_status(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::Upstream { status, body })
}
