use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} must be set")]
    MissingConfig(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Request to Spotify failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Spotify responded with {status}: {body}")]
    Upstream { status: StatusCode, body: String },
}

