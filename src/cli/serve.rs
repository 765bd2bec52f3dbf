use std::path::PathBuf;

use crate::{config::Config, error, info, server, warning};

/// Command-line overrides for the environment configuration.
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub port: Option<u16>,
    pub static_dir: Option<PathBuf>,
    pub open: bool,
}

/// Starts the backend and serves until the process is stopped.
///
/// Terminates the process when the configuration is incomplete or the port
/// cannot be bound.
pub async fn serve(overrides: ServeOverrides) {
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    if let Some(port) = overrides.port {
        config.port = port;
    }
    if let Some(static_dir) = overrides.static_dir {
        config.static_dir = static_dir;
    }

    if !config.static_dir.is_dir() {
        warning!(
            "Static directory {} not found, only the API is served.",
            config.static_dir.display()
        );
    }

    if overrides.open {
        let login_url = format!("http://localhost:{}/login", config.port);
        info!("Opening {}", login_url);
        if webbrowser::open(&login_url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                login_url
            );
        }
    }

    if let Err(e) = server::start_api_server(config).await {
        error!("Server stopped. Err: {}", e);
    }
}
