use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::models::{RawPlaylist, Thumbnails};
use crate::utils::playlist_url;
use crate::videos::Video;
use crate::{Client, ResourceKind, YouTubeError};

/// A YouTube playlist.
///
/// The collection entity: [`Playlist::fetch_videos`] expands the playlist's
/// items into partial [`Video`] entities and caches them on the playlist.
#[derive(Clone)]
pub struct Playlist {
    client: Arc<dyn Client>,
    /// The raw payload this entity was last built from.
    pub data: RawPlaylist,
    pub full: bool,
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnails: Option<Thumbnails>,
    pub published_at: Option<DateTime<Utc>>,
    pub channel_id: Option<String>,
    pub url: String,
    /// Number of items in the playlist. Only the complete variant carries it.
    pub item_count: Option<u32>,
    /// The playlist's videos, cached by [`Playlist::fetch_videos`].
    pub videos: Option<Vec<Video>>,
}

impl Playlist {
    pub fn new(client: Arc<dyn Client>, data: RawPlaylist) -> Result<Self, YouTubeError> {
        let (id, full, item_count) = match &data {
            RawPlaylist::Playlist(playlist) => (
                playlist.id.clone(),
                true,
                playlist.content_details.as_ref().and_then(|d| d.item_count),
            ),
            RawPlaylist::SearchResult(result) => {
                let id = result.id.playlist_id.clone().ok_or_else(|| {
                    YouTubeError::ParseError("Search result missing id.playlistId".to_string())
                })?;
                (id, false, None)
            }
        };

        let snippet = data.snippet();
        Ok(Playlist {
            title: snippet.title.clone(),
            description: snippet.description.clone(),
            thumbnails: snippet.thumbnails.clone(),
            published_at: snippet.published_at,
            channel_id: snippet.channel_id.clone(),
            url: playlist_url(&id),
            client,
            data,
            full,
            id,
            item_count,
            videos: None,
        })
    }

    /// Constructs a playlist straight from a raw JSON payload, failing on an
    /// unrecognized `kind` discriminator.
    pub fn from_value(client: Arc<dyn Client>, value: Value) -> Result<Self, YouTubeError> {
        Playlist::new(client, RawPlaylist::from_value(value)?)
    }

    /// Refetches this playlist by id and overwrites every field in place, so
    /// existing references observe the upgrade. The video cache resets along
    /// with everything else.
    pub async fn fetch(&mut self) -> Result<&mut Self, YouTubeError> {
        debug!(id = %self.id, "fetching full playlist");
        let value = self
            .client
            .get_full(ResourceKind::Playlist, &self.id)
            .await?;
        *self = Playlist::from_value(Arc::clone(&self.client), value)?;
        Ok(self)
    }

    /// Fetches the playlist's items as partial videos and caches them on
    /// `self.videos`. Every call refetches and replaces the cache; the order
    /// is the order the backend served.
    pub async fn fetch_videos(&mut self) -> Result<&[Video], YouTubeError> {
        debug!(id = %self.id, "fetching playlist items");
        let items = self.client.get_collection(&self.id).await?;
        let videos = items
            .into_iter()
            .map(|item| Video::from_value(Arc::clone(&self.client), item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.videos.insert(videos).as_slice())
    }
}
