use serde::{Deserialize, Serialize};

use crate::utils::{first_image_url, join_artist_names, non_empty};

#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: u64,
    pub scope: Option<String>,
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedArtist {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    pub album: Album,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentlyPlaying {
    pub item: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayHistory {
    pub track: Track,
    pub played_at: String,
}

/// Body of `/currently-playing`.
///
/// Serializes to `{"playing": false}` when nothing is playing and to the full
/// track summary otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NowPlaying {
    pub playing: bool,
    #[serde(flatten)]
    pub track: Option<NowPlayingTrack>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlayingTrack {
    pub artist: String,
    pub song: String,
    pub album: String,
    pub album_image: Option<String>,
}

impl NowPlaying {
    pub fn idle() -> Self {
        NowPlaying {
            playing: false,
            track: None,
        }
    }
}

impl From<Track> for NowPlaying {
    fn from(track: Track) -> Self {
        // the album artist is reported, not the track artists
        let artist = track
            .album
            .artists
            .first()
            .and_then(|a| non_empty(&a.name))
            .unwrap_or("Unknown Artist");

        NowPlaying {
            playing: true,
            track: Some(NowPlayingTrack {
                artist: artist.to_string(),
                song: non_empty(&track.name).unwrap_or("Unknown Song").to_string(),
                album: non_empty(&track.album.name)
                    .unwrap_or("Unknown Album")
                    .to_string(),
                album_image: first_image_url(&track.album.images),
            }),
        }
    }
}

impl From<CurrentlyPlaying> for NowPlaying {
    fn from(current: CurrentlyPlaying) -> Self {
        match current.item {
            Some(track) => NowPlaying::from(track),
            None => NowPlaying::idle(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistSummary {
    pub name: String,
    pub genres: Vec<String>,
    pub image: Option<String>,
}

impl From<Artist> for ArtistSummary {
    fn from(artist: Artist) -> Self {
        ArtistSummary {
            image: first_image_url(&artist.images),
            name: artist.name,
            genres: artist.genres,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSummary {
    pub name: String,
    pub artists: String,
    pub album_image: Option<String>,
    pub preview_url: Option<String>,
}

impl From<Track> for TrackSummary {
    fn from(track: Track) -> Self {
        TrackSummary {
            artists: join_artist_names(&track.artists),
            album_image: first_image_url(&track.album.images),
            preview_url: track
                .preview_url
                .as_deref()
                .and_then(non_empty)
                .map(str::to_string),
            name: track.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentTrack {
    pub name: String,
    pub artists: String,
    pub album_image: Option<String>,
    pub played_at: String,
}

impl From<PlayHistory> for RecentTrack {
    fn from(entry: PlayHistory) -> Self {
        RecentTrack {
            artists: join_artist_names(&entry.track.artists),
            album_image: first_image_url(&entry.track.album.images),
            name: entry.track.name,
            played_at: entry.played_at,
        }
    }
}
