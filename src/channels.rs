use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::models::{RawChannel, Thumbnails};
use crate::utils::channel_url;
use crate::videos::Video;
use crate::{Client, ResourceKind, YouTubeError};

/// A YouTube channel.
///
/// The complete `youtube#channel` resource yields a full entity; a
/// `youtube#searchResult` reference yields a partial one with statistics
/// unset. [`Channel::fetch_videos`] lazily expands the channel's uploads
/// playlist, upgrading the channel first when the uploads playlist id is
/// not yet known.
#[derive(Clone)]
pub struct Channel {
    client: Arc<dyn Client>,
    /// The raw payload this entity was last built from.
    pub data: RawChannel,
    pub full: bool,
    pub id: String,
    /// The channel's name.
    pub name: Option<String>,
    /// The channel's description.
    pub about: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub profile_pictures: Option<Thumbnails>,
    pub published_at: Option<DateTime<Utc>>,
    pub url: String,
    pub views: Option<u64>,
    pub comments: Option<u64>,
    /// Subscriber count, `-1` when the channel hides it. Unset on partial
    /// entities.
    pub sub_count: Option<i64>,
    /// Id of the channel's uploads playlist. Only the complete variant
    /// carries it.
    pub uploads_playlist_id: Option<String>,
    /// The channel's uploads, cached by [`Channel::fetch_videos`].
    pub videos: Option<Vec<Video>>,
}

impl Channel {
    pub fn new(client: Arc<dyn Client>, data: RawChannel) -> Result<Self, YouTubeError> {
        let (id, full, country, language, views, comments, sub_count, uploads_playlist_id) =
            match &data {
                RawChannel::Channel(channel) => {
                    let stats = &channel.statistics;
                    let sub_count = if stats.hidden_subscriber_count {
                        Some(-1)
                    } else {
                        stats.subscriber_count.as_ref().and_then(|c| c.parse().ok())
                    };
                    let uploads = channel
                        .content_details
                        .as_ref()
                        .and_then(|d| d.related_playlists.uploads.clone());
                    (
                        channel.id.clone(),
                        true,
                        channel.snippet.country.clone(),
                        channel.snippet.default_language.clone(),
                        stats.view_count.as_ref().and_then(|c| c.parse().ok()),
                        stats.comment_count.as_ref().and_then(|c| c.parse().ok()),
                        sub_count,
                        uploads,
                    )
                }
                RawChannel::SearchResult(result) => {
                    let id = result.id.channel_id.clone().ok_or_else(|| {
                        YouTubeError::ParseError("Search result missing id.channelId".to_string())
                    })?;
                    (id, false, None, None, None, None, None, None)
                }
            };

        let snippet = data.snippet();
        Ok(Channel {
            name: snippet.title.clone(),
            about: snippet.description.clone(),
            profile_pictures: snippet.thumbnails.clone(),
            published_at: snippet.published_at,
            url: channel_url(&id),
            client,
            data,
            full,
            id,
            country,
            language,
            views,
            comments,
            sub_count,
            uploads_playlist_id,
            videos: None,
        })
    }

    /// Constructs a channel straight from a raw JSON payload, failing on an
    /// unrecognized `kind` discriminator.
    pub fn from_value(client: Arc<dyn Client>, value: Value) -> Result<Self, YouTubeError> {
        Channel::new(client, RawChannel::from_value(value)?)
    }

    /// Refetches this channel by id and overwrites every field in place, so
    /// existing references observe the upgrade.
    pub async fn fetch(&mut self) -> Result<&mut Self, YouTubeError> {
        debug!(id = %self.id, "fetching full channel");
        let value = self.client.get_full(ResourceKind::Channel, &self.id).await?;
        *self = Channel::from_value(Arc::clone(&self.client), value)?;
        Ok(self)
    }

    /// Fetches the channel's uploads and caches them on `self.videos`.
    ///
    /// A partial channel does not know its uploads playlist id yet, so this
    /// upgrades the channel first. Every call refetches the collection and
    /// replaces the cache; the order is the order the backend served.
    pub async fn fetch_videos(&mut self) -> Result<&[Video], YouTubeError> {
        if self.uploads_playlist_id.is_none() {
            self.fetch().await?;
        }
        let uploads = self
            .uploads_playlist_id
            .clone()
            .ok_or(YouTubeError::NotFound)?;

        debug!(id = %self.id, uploads = %uploads, "fetching channel uploads");
        let items = self.client.get_collection(&uploads).await?;
        let videos = items
            .into_iter()
            .map(|item| Video::from_value(Arc::clone(&self.client), item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.videos.insert(videos).as_slice())
    }
}
