use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::models::{CommentResource, RawComment};
use crate::{Client, ResourceKind, YouTubeError};

/// A YouTube comment.
///
/// Recognizes both the bare `youtube#comment` resource and a
/// `youtube#commentThread`, which contributes its top-level comment plus the
/// thread's reply count. Both shapes carry the comment's complete field set,
/// so either way the entity is full.
#[derive(Clone)]
pub struct Comment {
    client: Arc<dyn Client>,
    /// The raw payload this entity was last built from.
    pub data: RawComment,
    pub full: bool,
    pub id: String,
    pub author: Option<String>,
    pub text: Option<String>,
    pub likes: Option<u64>,
    pub published_at: Option<DateTime<Utc>>,
    /// Video the comment was left on, when the payload carries it.
    pub video_id: Option<String>,
    /// Parent comment id, set only for replies.
    pub parent_id: Option<String>,
    /// Number of replies, known only when built from a comment thread.
    pub reply_count: Option<u32>,
    /// The comment's replies, cached by [`Comment::fetch_replies`].
    pub replies: Option<Vec<Comment>>,
}

impl Comment {
    pub fn new(client: Arc<dyn Client>, data: RawComment) -> Result<Self, YouTubeError> {
        let (resource, video_id, reply_count): (&CommentResource, _, _) = match &data {
            RawComment::Comment(comment) => (comment, comment.snippet.video_id.clone(), None),
            RawComment::CommentThread(thread) => {
                let comment = &thread.snippet.top_level_comment;
                // The thread knows the video even when the nested comment
                // snippet omits it.
                let video_id = comment
                    .snippet
                    .video_id
                    .clone()
                    .or_else(|| thread.snippet.video_id.clone());
                (comment, video_id, thread.snippet.total_reply_count)
            }
        };
        let id = resource.id.clone();
        let snippet = &resource.snippet;

        Ok(Comment {
            author: snippet.author_display_name.clone(),
            text: snippet.text_display.clone(),
            likes: snippet.like_count,
            published_at: snippet.published_at,
            parent_id: snippet.parent_id.clone(),
            client,
            full: true,
            id,
            video_id,
            reply_count,
            replies: None,
            data,
        })
    }

    /// Constructs a comment straight from a raw JSON payload, failing on an
    /// unrecognized `kind` discriminator.
    pub fn from_value(client: Arc<dyn Client>, value: Value) -> Result<Self, YouTubeError> {
        Comment::new(client, RawComment::from_value(value)?)
    }

    /// Refetches this comment by id and overwrites every field in place, so
    /// existing references observe the update.
    pub async fn fetch(&mut self) -> Result<&mut Self, YouTubeError> {
        debug!(id = %self.id, "fetching full comment");
        let value = self.client.get_full(ResourceKind::Comment, &self.id).await?;
        *self = Comment::from_value(Arc::clone(&self.client), value)?;
        Ok(self)
    }

    /// Fetches the comment's replies and caches them on `self.replies`.
    /// Every call refetches and replaces the cache; the order is the order
    /// the backend served.
    pub async fn fetch_replies(&mut self) -> Result<&[Comment], YouTubeError> {
        debug!(id = %self.id, "fetching comment replies");
        let items = self.client.get_collection(&self.id).await?;
        let replies = items
            .into_iter()
            .map(|item| Comment::from_value(Arc::clone(&self.client), item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.replies.insert(replies).as_slice())
    }
}
