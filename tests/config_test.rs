use std::env;

use spotrack::config::{Config, DEFAULT_PORT, SPOTIFY_API_URL};
use spotrack::errors::Error;

const OPTIONAL_VARS: [&str; 6] = [
    "PORT",
    "STATIC_DIR",
    "SPOTIFY_API_AUTH_URL",
    "SPOTIFY_API_TOKEN_URL",
    "SPOTIFY_API_URL",
    "SPOTIFY_API_AUTH_SCOPE",
];

fn set(name: &str, value: &str) {
    // SAFETY: this test binary runs a single test, so nothing reads the
    // environment concurrently.
    unsafe { env::set_var(name, value) }
}

fn unset(name: &str) {
    // SAFETY: see `set`.
    unsafe { env::remove_var(name) }
}

// Environment variables are process-global, so the whole contract is checked
// in one test.
#[test]
fn test_config_from_env() {
    for name in OPTIONAL_VARS {
        unset(name);
    }
    set("SPOTIFY_CLIENT_ID", "my-client");
    set("SPOTIFY_CLIENT_SECRET", "my-secret");
    set("SPOTIFY_REDIRECT_URI", "http://localhost:3000/callback");

    // Defaults apply when only the credentials are set
    let config = Config::from_env().unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.port, 3000);
    assert_eq!(config.api_url, SPOTIFY_API_URL);
    assert_eq!(config.static_dir.to_str(), Some("public"));
    assert_eq!(config.server_addr().port(), 3000);
    assert!(config.scope.contains("user-read-recently-played"));

    // A blank required variable counts as unset
    set("SPOTIFY_CLIENT_SECRET", "  ");
    assert!(matches!(
        Config::from_env(),
        Err(Error::MissingConfig("SPOTIFY_CLIENT_SECRET"))
    ));
    unset("SPOTIFY_CLIENT_SECRET");
    let err = Config::from_env().unwrap_err();
    assert_eq!(err.to_string(), "SPOTIFY_CLIENT_SECRET must be set");
    set("SPOTIFY_CLIENT_SECRET", "my-secret");

    // A non-numeric port is rejected
    set("PORT", "abc");
    match Config::from_env() {
        Err(Error::InvalidConfig(message)) => assert!(message.starts_with("PORT=abc")),
        other => panic!("expected invalid PORT, got {:?}", other),
    }

    // Overrides are taken as given, the API URL without its trailing slash
    set("PORT", "8080");
    set("SPOTIFY_API_URL", "http://127.0.0.1:9000/v1/");
    set("STATIC_DIR", "dist");
    let config = Config::from_env().unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.api_url, "http://127.0.0.1:9000/v1");
    assert_eq!(config.static_dir.to_str(), Some("dist"));
}
