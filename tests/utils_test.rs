use serde_json::json;
use spotrack::config::Config;
use spotrack::spotify::SpotifyClient;
use spotrack::types::*;
use spotrack::utils::*;

// Helper function to create a test track in Spotify's wire format
fn create_test_track(name: &str, artists: &[&str], album_artist: &str, image: Option<&str>) -> Track {
    let images: Vec<_> = image
        .map(|url| vec![json!({ "url": url, "height": 640, "width": 640 })])
        .unwrap_or_default();

    serde_json::from_value(json!({
        "name": name,
        "artists": artists.iter().map(|a| json!({ "name": a })).collect::<Vec<_>>(),
        "album": {
            "name": format!("{} (Album)", name),
            "artists": [{ "name": album_artist }],
            "images": images,
        },
        "preview_url": null,
    }))
    .unwrap()
}

#[test]
fn test_non_empty() {
    assert_eq!(non_empty("abc"), Some("abc"));
    assert_eq!(non_empty(""), None);
}

#[test]
fn test_first_image_url() {
    let images: Vec<Image> = serde_json::from_value(json!([
        { "url": "https://i.scdn.co/image/large", "height": 640, "width": 640 },
        { "url": "https://i.scdn.co/image/small", "height": 64, "width": 64 },
    ]))
    .unwrap();

    assert_eq!(
        first_image_url(&images),
        Some("https://i.scdn.co/image/large".to_string())
    );
    assert_eq!(first_image_url(&[]), None);
}

#[test]
fn test_join_artist_names() {
    let track = create_test_track("Song", &["Daft Punk", "Pharrell Williams"], "Daft Punk", None);
    assert_eq!(join_artist_names(&track.artists), "Daft Punk, Pharrell Williams");
    assert_eq!(join_artist_names(&[]), "");
}

#[test]
fn test_basic_auth() {
    assert_eq!(
        basic_auth("my-client", "my-secret"),
        "Basic bXktY2xpZW50Om15LXNlY3JldA=="
    );
}

#[test]
fn test_encode_query() {
    let query = encode_query(&[
        ("scope", "user-top-read user-read-recently-played"),
        ("redirect_uri", "http://localhost:3000/callback"),
    ]);

    assert_eq!(
        query,
        "scope=user-top-read%20user-read-recently-played&redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fcallback"
    );
}

#[test]
fn test_token_redirect_location() {
    let token = Token {
        access_token: "access".to_string(),
        refresh_token: Some("refresh".to_string()),
        expires_in: 3600,
        scope: None,
        token_type: Some("Bearer".to_string()),
    };
    assert_eq!(
        token_redirect_location(&token),
        "/?access_token=access&refresh_token=refresh&expires_in=3600"
    );

    // refresh token is left out when Spotify does not send one
    let token = Token {
        refresh_token: None,
        ..token
    };
    assert_eq!(
        token_redirect_location(&token),
        "/?access_token=access&expires_in=3600"
    );
}

#[test]
fn test_bearer_token() {
    assert_eq!(bearer_token("Bearer BQC123"), Some("BQC123"));
    assert_eq!(bearer_token("Bearer  BQC123 "), Some("BQC123"));
    assert_eq!(bearer_token("Bearer"), None);
    assert_eq!(bearer_token(""), None);
}

#[test]
fn test_authorize_url() {
    let config = Config {
        client_id: "my-client".to_string(),
        client_secret: "my-secret".to_string(),
        redirect_uri: "http://localhost:3000/callback".to_string(),
        ..Config::default()
    };
    let url = SpotifyClient::new(&config).authorize_url();

    assert!(url.starts_with("https://accounts.spotify.com/authorize?response_type=code&"));
    assert!(url.contains("&client_id=my-client&"));
    assert!(url.contains("&redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fcallback"));
    assert!(url.contains(
        "scope=user-read-currently-playing%20user-read-playback-state%20user-top-read"
    ));
    // the secret never leaves the server through the browser
    assert!(!url.contains("my-secret"));
}

#[test]
fn test_now_playing_from_track() {
    let track = create_test_track(
        "Get Lucky",
        &["Daft Punk", "Pharrell Williams"],
        "Daft Punk",
        Some("https://i.scdn.co/image/cover"),
    );

    let body = serde_json::to_value(NowPlaying::from(track)).unwrap();
    assert_eq!(
        body,
        json!({
            "playing": true,
            "artist": "Daft Punk",
            "song": "Get Lucky",
            "album": "Get Lucky (Album)",
            "albumImage": "https://i.scdn.co/image/cover",
        })
    );
}

#[test]
fn test_now_playing_fallbacks() {
    let track: Track = serde_json::from_value(json!({
        "name": "",
        "artists": [],
        "album": { "name": "", "artists": [], "images": [] },
    }))
    .unwrap();

    let body = serde_json::to_value(NowPlaying::from(track)).unwrap();
    assert_eq!(
        body,
        json!({
            "playing": true,
            "artist": "Unknown Artist",
            "song": "Unknown Song",
            "album": "Unknown Album",
            "albumImage": null,
        })
    );
}

#[test]
fn test_now_playing_idle() {
    assert_eq!(
        serde_json::to_value(NowPlaying::idle()).unwrap(),
        json!({ "playing": false })
    );

    // an ad or an episode comes without a track item
    let current: CurrentlyPlaying =
        serde_json::from_value(json!({ "is_playing": true, "item": null })).unwrap();
    assert_eq!(NowPlaying::from(current), NowPlaying::idle());
}

#[test]
fn test_artist_summary() {
    let artist: Artist = serde_json::from_value(json!({
        "name": "Röyksopp",
        "genres": ["electronica", "nu jazz"],
        "images": [{ "url": "https://i.scdn.co/image/artist", "height": 640, "width": 640 }],
        "popularity": 60,
    }))
    .unwrap();
    assert_eq!(
        ArtistSummary::from(artist),
        ArtistSummary {
            name: "Röyksopp".to_string(),
            genres: vec!["electronica".to_string(), "nu jazz".to_string()],
            image: Some("https://i.scdn.co/image/artist".to_string()),
        }
    );

    let artist: Artist = serde_json::from_value(json!({ "name": "Nobody" })).unwrap();
    assert_eq!(
        serde_json::to_value(ArtistSummary::from(artist)).unwrap(),
        json!({ "name": "Nobody", "genres": [], "image": null })
    );
}

#[test]
fn test_track_summary() {
    let mut track = create_test_track("Harder", &["Daft Punk"], "Daft Punk", None);
    track.preview_url = Some("https://p.scdn.co/mp3-preview/abc".to_string());

    assert_eq!(
        serde_json::to_value(TrackSummary::from(track)).unwrap(),
        json!({
            "name": "Harder",
            "artists": "Daft Punk",
            "albumImage": null,
            "previewUrl": "https://p.scdn.co/mp3-preview/abc",
        })
    );

    let mut track = create_test_track("Better", &["Daft Punk"], "Daft Punk", None);
    track.preview_url = Some(String::new());
    assert_eq!(TrackSummary::from(track).preview_url, None);
}

#[test]
fn test_recent_track() {
    let entry: PlayHistory = serde_json::from_value(json!({
        "track": {
            "name": "Faster",
            "artists": [{ "name": "Daft Punk" }, { "name": "Guest" }],
            "album": { "name": "Discovery", "images": [{ "url": "https://i.scdn.co/image/d" }] },
            "preview_url": null,
        },
        "played_at": "2024-05-01T10:15:30.123Z",
        "context": null,
    }))
    .unwrap();

    assert_eq!(
        RecentTrack::from(entry),
        RecentTrack {
            name: "Faster".to_string(),
            artists: "Daft Punk, Guest".to_string(),
            album_image: Some("https://i.scdn.co/image/d".to_string()),
            played_at: "2024-05-01T10:15:30.123Z".to_string(),
        }
    );
}
