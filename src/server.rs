use std::sync::Arc;

use axum::{
    Router,
    extract::Request,
    handler::HandlerWithoutStateExt,
    middleware::{self, Next},
    response::Response,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{Res, api, config::Config, info, spotify::SpotifyClient, success};

/// Read-only state shared by all handlers.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub spotify: SpotifyClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let spotify = SpotifyClient::new(&config);
        AppState { config, spotify }
    }
}

/// Builds the application router.
///
/// `/` serves `index.html` from the static directory and falls back to a plain
/// greeting when there is none. Paths that match no route are looked up in the
/// static directory.
pub fn router(config: Config) -> Router {
    let static_dir = config.static_dir.clone();
    let state = Arc::new(AppState::new(config));

    let index = ServeDir::new(&static_dir).fallback(api::welcome.into_service());

    Router::new()
        .route_service("/", index)
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/currently-playing", get(api::currently_playing))
        .route("/top-artists", get(api::top_artists))
        .route("/top/tracks", get(api::top_tracks))
        .route("/recently-played", get(api::recently_played))
        .route("/play", put(api::play))
        .route("/pause", put(api::pause))
        .route("/next", post(api::next))
        .route("/previous", post(api::previous))
        .fallback_service(ServeDir::new(&static_dir))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    info!("Request to: {}", request.uri().path());
    next.run(request).await
}

/// Binds the configured port and serves until the process is stopped.
pub async fn start_api_server(config: Config) -> Res<()> {
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    success!("Server is running on port {}", addr.port());
    axum::serve(listener, router(config)).await?;
    Ok(())
}
