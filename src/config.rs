//! Configuration management for the Spotify Tracker backend.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file. The lookup order is:
//! 1. Environment variables (highest priority, never overwritten by `.env`)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory (`<data_local_dir>/spotrack/.env`)
//! 4. Application defaults (where applicable)
//!
//! The values are read once into a [`Config`] which the server shares with
//! every request handler.

use std::{
    env,
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use crate::errors::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const SPOTIFY_API_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Permissions requested from the user on login.
pub const SPOTIFY_SCOPES: [&str; 7] = [
    "user-read-currently-playing",
    "user-read-playback-state",
    "user-top-read",
    "user-read-recently-played",
    "user-modify-playback-state",
    "playlist-modify-public",
    "playlist-modify-private",
];

/// Loads environment variables from a `.env` file.
///
/// Looks for `.env` in the working directory first and falls back to the
/// platform-specific local data directory:
/// - Linux: `~/.local/share/spotrack/.env`
/// - macOS: `~/Library/Application Support/spotrack/.env`
/// - Windows: `%LOCALAPPDATA%/spotrack/.env`
///
/// Variables that are already set in the process environment are kept.
///
/// # Returns
///
/// - `Ok(Some(path))` - the file that was loaded
/// - `Ok(None)` - no `.env` file exists in either location
/// - `Err(String)` - a file exists but could not be read or parsed
pub fn load_env() -> Result<Option<PathBuf>, String> {
    let mut data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.push("spotrack/.env");

    for path in [PathBuf::from(".env"), data_dir] {
        if path.is_file() {
            dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
            return Ok(Some(path));
        }
    }

    Ok(None)
}

/// Runtime configuration shared by the router and the Spotify client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Client ID of the application registered with Spotify.
    pub client_id: String,
    /// Client secret, only ever sent to the token endpoint.
    pub client_secret: String,
    /// Callback URL registered with Spotify, e.g. `http://localhost:3000/callback`.
    pub redirect_uri: String,
    /// Space separated list of requested permissions.
    pub scope: String,
    pub port: u16,
    /// Directory served as static files at the root path.
    pub static_dir: PathBuf,
    pub auth_url: String,
    pub token_url: String,
    /// Base URL of the Web API, without trailing slash.
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: String::new(),
            scope: SPOTIFY_SCOPES.join(" "),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            auth_url: SPOTIFY_API_AUTH_URL.to_string(),
            token_url: SPOTIFY_API_TOKEN_URL.to_string(),
            api_url: SPOTIFY_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingConfig`] if `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`
    ///   or `SPOTIFY_REDIRECT_URI` is unset or empty
    /// - [`Error::InvalidConfig`] if `PORT` is not a valid port number
    pub fn from_env() -> Result<Self, Error> {
        let defaults = Config::default();

        let port = match optional("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| Error::InvalidConfig(format!("PORT={}: {}", port, e)))?,
            None => defaults.port,
        };

        Ok(Config {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            redirect_uri: required("SPOTIFY_REDIRECT_URI")?,
            scope: optional("SPOTIFY_API_AUTH_SCOPE").unwrap_or(defaults.scope),
            port,
            static_dir: optional("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            auth_url: optional("SPOTIFY_API_AUTH_URL").unwrap_or(defaults.auth_url),
            token_url: optional("SPOTIFY_API_TOKEN_URL").unwrap_or(defaults.token_url),
            api_url: optional("SPOTIFY_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
        })
    }

    /// Address the server binds to: all interfaces on the configured port.
    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn required(name: &'static str) -> Result<String, Error> {
    optional(name).ok_or(Error::MissingConfig(name))
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
