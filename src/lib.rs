use std::error::Error;
use std::fmt;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;


pub mod models;
pub mod utils;
pub mod videos;
pub use videos::Video;
pub mod channels;
pub use channels::Channel;
pub mod playlists;
pub use playlists::Playlist;
pub mod comments;
pub use comments::Comment;
pub mod subscriptions;
pub use subscriptions::Subscription;

/// The entity kinds this crate models. Passed to [`Fetcher::get_full`] so a
/// single client implementation can route to the right endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Video,
    Channel,
    Playlist,
    Comment,
    Subscription,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Video => "video",
            ResourceKind::Channel => "channel",
            ResourceKind::Playlist => "playlist",
            ResourceKind::Comment => "comment",
            ResourceKind::Subscription => "subscription",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("Invalid {entity} type: {kind}")]
    UnrecognizedVariant { entity: ResourceKind, kind: String },
    #[error("Not found")]
    NotFound,
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Transport error: {0}")]
    Transport(Box<dyn Error + Send + Sync>),
}

/// Retrieves the complete raw payload for one entity by id.
///
/// Implementations own everything this crate deliberately leaves out:
/// transport, auth, retries, rate limiting. A missing resource must be
/// reported as [`YouTubeError::NotFound`]; any other failure surfaces
/// through [`YouTubeError::Transport`] unchanged.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get_full(&self, kind: ResourceKind, id: &str) -> Result<Value, YouTubeError>;
}

/// Retrieves every item of a related collection (a playlist's videos, a
/// comment's replies), already materialized across pages. Page-token
/// mechanics never cross this boundary; the returned order is the order the
/// backend served.
#[async_trait]
pub trait PaginatedFetcher: Send + Sync {
    async fn get_collection(&self, collection_id: &str) -> Result<Vec<Value>, YouTubeError>;
}

/// The capability each entity keeps a shared handle to. Entities never own
/// the client; they hold it through an `Arc` only to upgrade themselves or
/// expand related collections.
pub trait Client: Fetcher + PaginatedFetcher {}

impl<T: Fetcher + PaginatedFetcher> Client for T {}
