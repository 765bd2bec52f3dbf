//! Spotify Tracker backend library
//!
//! This library provides a small HTTP backend for a browser frontend that shows
//! what a Spotify user is listening to. It performs the OAuth 2.0 authorization
//! code exchange and forwards a fixed set of playback and listening-history
//! queries to the Spotify Web API, using the bearer token supplied by the caller.
//!
//! No state survives a request: tokens are neither stored nor refreshed.
//!
//! # Modules
//!
//! - `api` - HTTP route handlers, request extractors and error responses
//! - `cli` - Command-line operations (serving)
//! - `config` - Configuration from environment variables and `.env` files
//! - `errors` - Crate-wide error type
//! - `server` - Router assembly and the listening loop
//! - `spotify` - Spotify Web API client
//! - `types` - Upstream payloads and the reshaped response bodies
//! - `utils` - Small reshaping and encoding helpers
//!
//! # Example
//!
//! ```
//! use spotrack::{config::Config, server};
//!
//! #[tokio::main]
//! async fn main() -> spotrack::Res<()> {
//!     let config = Config::from_env()?;
//!     server::start_api_server(config).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it can
/// cross await points in async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Request to: {}", path);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// success!("Server is running on port {}", port);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Only meant for
/// failures during start-up; request handlers never call it.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems, such as a failed upstream call that turns
/// into a 500 response for a single request.
///
/// # Example
///
/// ```
/// warning!("Error fetching top artists: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
