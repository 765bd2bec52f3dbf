use super::{SpotifyClient, check_status};
use crate::{
    errors::Error,
    types::{Paging, PlayHistory},
};

/// Page size requested from the recently played endpoint (Spotify's maximum).
pub const RECENTLY_PLAYED_LIMIT: u32 = 50;

impl SpotifyClient {
    /// The user's most recently played tracks, newest first.
    pub async fn recently_played(&self, token: &str) -> Result<Vec<PlayHistory>, Error> {
        let response = self
            .http
            .get(self.endpoint("/me/player/recently-played"))
            .query(&[("limit", RECENTLY_PLAYED_LIMIT)])
            .bearer_auth(token)
            .send()
            .await?;

        let page = check_status(response)
            .await?
            .json::<Paging<PlayHistory>>()
            .await?;
        Ok(page.items)
    }
}
