use super::{SpotifyClient, check_status};
use crate::{
    errors::Error,
    types::{Artist, Paging, Track},
};

impl SpotifyClient {
    /// The user's top artists, with Spotify's default time range and page size.
    pub async fn top_artists(&self, token: &str) -> Result<Vec<Artist>, Error> {
        let response = self
            .http
            .get(self.endpoint("/me/top/artists"))
            .bearer_auth(token)
            .send()
            .await?;

        let page = check_status(response).await?.json::<Paging<Artist>>().await?;
        Ok(page.items)
    }

    /// The user's top tracks, with Spotify's default time range and page size.
    pub async fn top_tracks(&self, token: &str) -> Result<Vec<Track>, Error> {
        let response = self
            .http
            .get(self.endpoint("/me/top/tracks"))
            .bearer_auth(token)
            .send()
            .await?;

        let page = check_status(response).await?.json::<Paging<Track>>().await?;
        Ok(page.items)
    }
}
