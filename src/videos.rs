use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::models::{RawVideo, Thumbnails};
use crate::utils::{parse_duration, video_short_url, video_url};
use crate::{Client, ResourceKind, YouTubeError};

/// A YouTube video.
///
/// Built from whichever raw shape the backend handed back: the complete
/// `youtube#video` resource, a `youtube#playlistItem` reference, or a
/// `youtube#searchResult` reference. The reference shapes produce a partial
/// entity (`full == false`) whose statistics and duration stay unset until
/// [`Video::fetch`] upgrades it in place.
#[derive(Clone)]
pub struct Video {
    client: Arc<dyn Client>,
    /// The raw payload this entity was last built from.
    pub data: RawVideo,
    pub full: bool,
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnails: Option<Thumbnails>,
    pub published_at: Option<DateTime<Utc>>,
    pub channel_id: Option<String>,
    /// Minutes component of the duration. Set only on full entities.
    pub minutes: Option<u64>,
    /// Seconds component of the duration. Set only on full entities.
    pub seconds: Option<u64>,
    pub url: String,
    pub short_url: String,
    pub likes: Option<u64>,
    pub dislikes: Option<u64>,
    pub views: Option<u64>,
    /// Whether this video COULD be private. Playlist items cannot reveal
    /// visibility, so a playlist-item reference titled "Private video" is the
    /// only available signal; fetch the video and catch `NotFound` to know
    /// for sure.
    pub maybe_private: bool,
}

fn parse_count(count: Option<&String>) -> Option<u64> {
    count.and_then(|c| c.parse().ok())
}

impl Video {
    pub fn new(client: Arc<dyn Client>, data: RawVideo) -> Result<Self, YouTubeError> {
        let (id, full, minutes, seconds, likes, dislikes, views, maybe_private) = match &data {
            RawVideo::Video(video) => {
                let (minutes, seconds) = parse_duration(&video.content_details.duration)?;
                (
                    video.id.clone(),
                    true,
                    Some(minutes),
                    Some(seconds),
                    parse_count(video.statistics.like_count.as_ref()),
                    parse_count(video.statistics.dislike_count.as_ref()),
                    parse_count(video.statistics.view_count.as_ref()),
                    false,
                )
            }
            RawVideo::PlaylistItem(item) => {
                let id = item
                    .snippet
                    .resource_id
                    .as_ref()
                    .and_then(|r| r.video_id.clone())
                    .ok_or_else(|| {
                        YouTubeError::ParseError(
                            "Playlist item missing snippet.resourceId.videoId".to_string(),
                        )
                    })?;
                let maybe_private = item.snippet.title.as_deref() == Some("Private video");
                (id, false, None, None, None, None, None, maybe_private)
            }
            RawVideo::SearchResult(result) => {
                let id = result.id.video_id.clone().ok_or_else(|| {
                    YouTubeError::ParseError("Search result missing id.videoId".to_string())
                })?;
                (id, false, None, None, None, None, None, false)
            }
        };

        let snippet = data.snippet();
        Ok(Video {
            title: snippet.title.clone(),
            description: snippet.description.clone(),
            thumbnails: snippet.thumbnails.clone(),
            published_at: snippet.published_at,
            channel_id: snippet.channel_id.clone(),
            url: video_url(&id),
            short_url: video_short_url(&id),
            client,
            data,
            full,
            id,
            minutes,
            seconds,
            likes,
            dislikes,
            views,
            maybe_private,
        })
    }

    /// Constructs a video straight from a raw JSON payload, failing on an
    /// unrecognized `kind` discriminator.
    pub fn from_value(client: Arc<dyn Client>, value: Value) -> Result<Self, YouTubeError> {
        Video::new(client, RawVideo::from_value(value)?)
    }

    /// Refetches this video by id and overwrites every field in place, so
    /// existing references observe the upgrade. Useful when `full` is false
    /// or when you want current statistics; callers check `full` themselves
    /// to skip redundant round trips.
    pub async fn fetch(&mut self) -> Result<&mut Self, YouTubeError> {
        debug!(id = %self.id, "fetching full video");
        let value = self.client.get_full(ResourceKind::Video, &self.id).await?;
        *self = Video::from_value(Arc::clone(&self.client), value)?;
        Ok(self)
    }
}
