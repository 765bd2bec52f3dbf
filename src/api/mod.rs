//! # API Module
//!
//! HTTP route handlers of the Spotify Tracker backend.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - redirects to Spotify's consent page
//! - [`callback`] - exchanges the authorization code and hands the tokens to the
//!   frontend through a redirect to `/`
//!
//! ### Listening data
//!
//! - [`currently_playing`] - `{playing, artist, song, album, albumImage}`
//! - [`top_artists`] - `[{name, genres, image}]`
//! - [`top_tracks`] - `[{name, artists, albumImage, previewUrl}]`
//! - [`recently_played`] - `[{name, artists, albumImage, playedAt}]`
//!
//! ### Playback
//!
//! - [`play`], [`pause`], [`next`], [`previous`] - empty `204` on success
//!
//! ### Misc
//!
//! - [`welcome`] - plain text greeting at `/` when no frontend is installed
//! - [`health`] - status and version for monitoring
//!
//! ## Authentication of callers
//!
//! Listening data and playback routes take the caller's access token from the
//! `Authorization: Bearer <token>` header through the [`BearerToken`] extractor
//! and answer `401` without it. Tokens are forwarded as-is, never stored.
//!
//! ## Errors
//!
//! Every failure is a plain text [`ApiError`]: `400` for a missing authorization
//! code, `401` for a missing token and `500` when Spotify fails or rejects the
//! request. The upstream payload is logged, not returned.

mod callback;
mod error;
mod extract;
mod health;
mod history;
mod player;
mod top;

use axum::{
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

pub use callback::{callback, login};
pub use error::ApiError;
pub use extract::BearerToken;
pub use health::{health, welcome};
pub use history::recently_played;
pub use player::{currently_playing, next, pause, play, previous};
pub use top::{top_artists, top_tracks};

/// `302 Found` redirect to `location`.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}
