//! Raw payload shapes as the backend serves them.
//!
//! Each entity kind recognizes a closed set of `kind` discriminators,
//! modeled as an internally tagged enum. Construction from loose JSON goes
//! through the `from_value` helpers so that an unknown discriminator is an
//! [`UnrecognizedVariant`](crate::YouTubeError::UnrecognizedVariant) error
//! rather than a generic deserialize failure.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::{ResourceKind, YouTubeError};

fn kind_of(value: &Value) -> String {
    value
        .get("kind")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub standard: Option<Thumbnail>,
    pub maxres: Option<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// The nested resource pointer reference variants carry in place of a plain
/// string id.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
    #[serde(rename = "channelId")]
    pub channel_id: Option<String>,
    #[serde(rename = "playlistId")]
    pub playlist_id: Option<String>,
}

/// Envelope fields shared by every variant of every entity kind. Fields a
/// given variant does not serve simply stay `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct Snippet {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnails: Option<Thumbnails>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(rename = "channelId")]
    pub channel_id: Option<String>,
    #[serde(rename = "resourceId")]
    pub resource_id: Option<ResourceId>,
    pub country: Option<String>,
    #[serde(rename = "defaultLanguage")]
    pub default_language: Option<String>,
}

// ---------------------------------------------------------------------------
// Video

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum RawVideo {
    #[serde(rename = "youtube#video")]
    Video(VideoResource),
    #[serde(rename = "youtube#playlistItem")]
    PlaylistItem(PlaylistItemResource),
    #[serde(rename = "youtube#searchResult")]
    SearchResult(SearchResultResource),
}

impl RawVideo {
    pub fn from_value(value: Value) -> Result<Self, YouTubeError> {
        match kind_of(&value).as_str() {
            "youtube#video" | "youtube#playlistItem" | "youtube#searchResult" => {
                Ok(serde_json::from_value(value)?)
            }
            kind => Err(YouTubeError::UnrecognizedVariant {
                entity: ResourceKind::Video,
                kind: kind.to_string(),
            }),
        }
    }

    pub fn snippet(&self) -> &Snippet {
        match self {
            RawVideo::Video(v) => &v.snippet,
            RawVideo::PlaylistItem(p) => &p.snippet,
            RawVideo::SearchResult(s) => &s.snippet,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoResource {
    pub id: String,
    pub snippet: Snippet,
    #[serde(rename = "contentDetails")]
    pub content_details: VideoContentDetails,
    pub statistics: VideoStatistics,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoContentDetails {
    pub duration: String,
}

// Counters arrive as decimal strings, same as the raw API.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoStatistics {
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<String>,
    #[serde(rename = "dislikeCount")]
    pub dislike_count: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItemResource {
    pub id: String,
    pub snippet: Snippet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResultResource {
    pub id: ResourceId,
    pub snippet: Snippet,
}

// ---------------------------------------------------------------------------
// Channel

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum RawChannel {
    #[serde(rename = "youtube#channel")]
    Channel(ChannelResource),
    #[serde(rename = "youtube#searchResult")]
    SearchResult(SearchResultResource),
}

impl RawChannel {
    pub fn from_value(value: Value) -> Result<Self, YouTubeError> {
        match kind_of(&value).as_str() {
            "youtube#channel" | "youtube#searchResult" => Ok(serde_json::from_value(value)?),
            kind => Err(YouTubeError::UnrecognizedVariant {
                entity: ResourceKind::Channel,
                kind: kind.to_string(),
            }),
        }
    }

    pub fn snippet(&self) -> &Snippet {
        match self {
            RawChannel::Channel(c) => &c.snippet,
            RawChannel::SearchResult(s) => &s.snippet,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelResource {
    pub id: String,
    pub snippet: Snippet,
    pub statistics: ChannelStatistics,
    #[serde(rename = "contentDetails")]
    pub content_details: Option<ChannelContentDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelStatistics {
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    #[serde(rename = "commentCount")]
    pub comment_count: Option<String>,
    #[serde(rename = "subscriberCount")]
    pub subscriber_count: Option<String>,
    #[serde(rename = "hiddenSubscriberCount", default)]
    pub hidden_subscriber_count: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelContentDetails {
    #[serde(rename = "relatedPlaylists")]
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelatedPlaylists {
    pub uploads: Option<String>,
}

// ---------------------------------------------------------------------------
// Playlist

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum RawPlaylist {
    #[serde(rename = "youtube#playlist")]
    Playlist(PlaylistResource),
    #[serde(rename = "youtube#searchResult")]
    SearchResult(SearchResultResource),
}

impl RawPlaylist {
    pub fn from_value(value: Value) -> Result<Self, YouTubeError> {
        match kind_of(&value).as_str() {
            "youtube#playlist" | "youtube#searchResult" => Ok(serde_json::from_value(value)?),
            kind => Err(YouTubeError::UnrecognizedVariant {
                entity: ResourceKind::Playlist,
                kind: kind.to_string(),
            }),
        }
    }

    pub fn snippet(&self) -> &Snippet {
        match self {
            RawPlaylist::Playlist(p) => &p.snippet,
            RawPlaylist::SearchResult(s) => &s.snippet,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistResource {
    pub id: String,
    pub snippet: Snippet,
    #[serde(rename = "contentDetails")]
    pub content_details: Option<PlaylistContentDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistContentDetails {
    #[serde(rename = "itemCount")]
    pub item_count: Option<u32>,
}

// ---------------------------------------------------------------------------
// Comment

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum RawComment {
    #[serde(rename = "youtube#comment")]
    Comment(CommentResource),
    #[serde(rename = "youtube#commentThread")]
    CommentThread(CommentThreadResource),
}

impl RawComment {
    pub fn from_value(value: Value) -> Result<Self, YouTubeError> {
        match kind_of(&value).as_str() {
            "youtube#comment" | "youtube#commentThread" => Ok(serde_json::from_value(value)?),
            kind => Err(YouTubeError::UnrecognizedVariant {
                entity: ResourceKind::Comment,
                kind: kind.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentResource {
    pub id: String,
    pub snippet: CommentSnippet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentSnippet {
    #[serde(rename = "authorDisplayName")]
    pub author_display_name: Option<String>,
    #[serde(rename = "textDisplay")]
    pub text_display: Option<String>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<u64>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentThreadResource {
    pub id: String,
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentThreadSnippet {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
    #[serde(rename = "topLevelComment")]
    pub top_level_comment: CommentResource,
    #[serde(rename = "totalReplyCount")]
    pub total_reply_count: Option<u32>,
}

// ---------------------------------------------------------------------------
// Subscription

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum RawSubscription {
    #[serde(rename = "youtube#subscription")]
    Subscription(SubscriptionResource),
}

impl RawSubscription {
    pub fn from_value(value: Value) -> Result<Self, YouTubeError> {
        match kind_of(&value).as_str() {
            "youtube#subscription" => Ok(serde_json::from_value(value)?),
            kind => Err(YouTubeError::UnrecognizedVariant {
                entity: ResourceKind::Subscription,
                kind: kind.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionResource {
    pub id: String,
    pub snippet: Snippet,
}
