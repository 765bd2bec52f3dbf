use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    response::Response,
};

use super::{ApiError, found};
use crate::{server::AppState, utils};

/// Sends the browser to Spotify's consent page.
pub async fn login(State(state): State<Arc<AppState>>) -> Response {
    found(&state.spotify.authorize_url())
}

/// Completes the authorization code flow.
///
/// Exchanges the `code` query parameter for tokens and redirects to the root
/// page with `access_token`, `refresh_token` and `expires_in` in the query
/// string. Nothing is kept on the server.
pub async fn callback(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let Some(code) = params.get("code").filter(|code| !code.is_empty()) else {
        return Err(ApiError::MissingCode);
    };

    let token = state
        .spotify
        .exchange_code(code)
        .await
        .map_err(ApiError::upstream("Error getting tokens."))?;

    Ok(found(&utils::token_redirect_location(&token)))
}
