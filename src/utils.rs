use base64::{Engine, engine::general_purpose::STANDARD};

use crate::types::{Image, SimplifiedArtist, Token};

/// Returns `value` unless it is empty.
pub fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

/// URL of the first (largest) image, if any.
pub fn first_image_url(images: &[Image]) -> Option<String> {
    images
        .first()
        .and_then(|image| non_empty(&image.url))
        .map(str::to_string)
}

pub fn join_artist_names(artists: &[SimplifiedArtist]) -> String {
    artists
        .iter()
        .map(|artist| artist.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Value of an `Authorization` header carrying client credentials.
pub fn basic_auth(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", client_id, client_secret))
    )
}

/// Percent-encodes `params` into a query string, keeping their order.
pub fn encode_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Location the browser is sent to after a successful code exchange.
///
/// The frontend served at `/` picks the tokens up from the query string.
pub fn token_redirect_location(token: &Token) -> String {
    let expires_in = token.expires_in.to_string();
    let mut params = vec![("access_token", token.access_token.as_str())];
    if let Some(refresh_token) = &token.refresh_token {
        params.push(("refresh_token", refresh_token.as_str()));
    }
    params.push(("expires_in", expires_in.as_str()));

    format!("/?{}", encode_query(&params))
}

/// Second whitespace separated part of an `Authorization` header value.
///
/// `"Bearer abc"` yields `abc`; a value without a second part yields `None`.
pub fn bearer_token(header: &str) -> Option<&str> {
    header.split_whitespace().nth(1)
}
