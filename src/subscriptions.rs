use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::models::RawSubscription;
use crate::{Client, ResourceKind, YouTubeError};

/// A subscription of one channel to another. Only the complete
/// `youtube#subscription` shape exists, so the entity is always full; the
/// subscribed-to channel sits behind `snippet.resourceId.channelId`.
#[derive(Clone)]
pub struct Subscription {
    client: Arc<dyn Client>,
    /// The raw payload this entity was last built from.
    pub data: RawSubscription,
    pub full: bool,
    pub id: String,
    /// Id of the channel being subscribed to.
    pub channel_id: String,
    /// Title of the channel being subscribed to.
    pub title: Option<String>,
    pub description: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Subscription {
    pub fn new(client: Arc<dyn Client>, data: RawSubscription) -> Result<Self, YouTubeError> {
        let RawSubscription::Subscription(subscription) = &data;
        let channel_id = subscription
            .snippet
            .resource_id
            .as_ref()
            .and_then(|r| r.channel_id.clone())
            .ok_or_else(|| {
                YouTubeError::ParseError(
                    "Subscription missing snippet.resourceId.channelId".to_string(),
                )
            })?;

        Ok(Subscription {
            id: subscription.id.clone(),
            title: subscription.snippet.title.clone(),
            description: subscription.snippet.description.clone(),
            published_at: subscription.snippet.published_at,
            client,
            full: true,
            channel_id,
            data,
        })
    }

    /// Constructs a subscription straight from a raw JSON payload, failing on
    /// an unrecognized `kind` discriminator.
    pub fn from_value(client: Arc<dyn Client>, value: Value) -> Result<Self, YouTubeError> {
        Subscription::new(client, RawSubscription::from_value(value)?)
    }

    /// Refetches this subscription by id and overwrites every field in place.
    pub async fn fetch(&mut self) -> Result<&mut Self, YouTubeError> {
        debug!(id = %self.id, "fetching full subscription");
        let value = self
            .client
            .get_full(ResourceKind::Subscription, &self.id)
            .await?;
        *self = Subscription::from_value(Arc::clone(&self.client), value)?;
        Ok(self)
    }
}
