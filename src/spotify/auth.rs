use reqwest::header::AUTHORIZATION;

use super::{SpotifyClient, check_status};
use crate::{errors::Error, types::Token, utils};

impl SpotifyClient {
    /// URL of Spotify's consent page for the authorization code flow.
    ///
    /// Carries `response_type=code`, the client ID, the requested scopes and the
    /// registered redirect URI.
    pub fn authorize_url(&self) -> String {
        format!(
            "{}?{}",
            self.auth_url,
            utils::encode_query(&[
                ("response_type", "code"),
                ("client_id", &self.client_id),
                ("scope", &self.scope),
                ("redirect_uri", &self.redirect_uri),
            ])
        )
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// Authenticates with the client credentials as HTTP basic auth and posts the
    /// code form-encoded together with the redirect URI used for the consent page.
    /// The code is single-use; a second exchange is rejected by Spotify.
    pub async fn exchange_code(&self, code: &str) -> Result<Token, Error> {
        let response = self
            .http
            .post(&self.token_url)
            .header(
                AUTHORIZATION,
                utils::basic_auth(&self.client_id, &self.client_secret),
            )
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", &self.redirect_uri),
            ])
            .send()
            .await?;

        let token = check_status(response).await?.json::<Token>().await?;
        Ok(token)
    }
}
