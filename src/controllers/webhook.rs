use axum::{
    body::Bytes,
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::Instrument;

use crate::{
    domain::{
        miniflux::{NewEntriesEvent, EVENT_TYPE_HEADER, NEW_ENTRIES_EVENT},
        notification::NotificationServiceApi,
    },
    error::{AppError, AppResult},
};

/// Query string of POST /webhook/miniflux
#[derive(Debug, Deserialize)]
pub struct WebhookQuery {
    pub webhook_url: Option<String>,
}

/// Acknowledgement returned to Miniflux
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub message: String,
}

impl WebhookAck {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// Outcome of relaying one batch of entries
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeliverySummary {
    pub delivered: usize,
    pub failed: usize,
}

pub struct WebhookController {
    notification_service: Arc<dyn NotificationServiceApi>,
}

impl WebhookController {
    pub fn new(notification_service: Arc<dyn NotificationServiceApi>) -> Self {
        Self {
            notification_service,
        }
    }

    /// POST /webhook/miniflux - Relay new entries to the Feishu webhook in `webhook_url`
    ///
    /// Once the payload decodes the answer is always 200: per-entry delivery
    /// failures are logged, never reported back to Miniflux.
    pub async fn handle_miniflux(
        State(controller): State<Arc<WebhookController>>,
        headers: HeaderMap,
        query: Option<Query<WebhookQuery>>,
        body: Bytes,
    ) -> AppResult<Json<WebhookAck>> {
        let event_type = headers
            .get(EVENT_TYPE_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if event_type != NEW_ENTRIES_EVENT {
            tracing::info!(event_type, "Ignoring event type");
            return Ok(WebhookAck::new("Event ignored"));
        }

        let webhook_url = query
            .and_then(|Query(q)| q.webhook_url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                AppError::BadRequest("webhook_url parameter is required".to_string())
            })?;

        let event: NewEntriesEvent =
            serde_json::from_slice::<Option<NewEntriesEvent>>(&body)?.unwrap_or_default();

        tracing::info!(
            feed_id = event.feed.id,
            feed_title = %event.feed.title,
            entries = event.entries.len(),
            "Received new entries"
        );

        // Detached so an inbound disconnect does not cancel sends already in flight.
        let delivery = tokio::spawn(
            async move { controller.deliver_entries(&event, &webhook_url).await }
                .instrument(tracing::Span::current()),
        );

        match delivery.await {
            Ok(summary) => tracing::info!(
                delivered = summary.delivered,
                failed = summary.failed,
                "Finished relaying entries"
            ),
            Err(e) => tracing::error!(error = %e, "Entry delivery task aborted"),
        }

        Ok(WebhookAck::new("Webhook processed successfully"))
    }

    /// Send every entry in order, one at a time, isolating failures per entry
    pub async fn deliver_entries(
        &self,
        event: &NewEntriesEvent,
        webhook_url: &str,
    ) -> DeliverySummary {
        let mut summary = DeliverySummary::default();

        for entry in &event.entries {
            match self
                .notification_service
                .send_entry(entry, &event.feed, webhook_url)
                .await
            {
                Ok(()) => {
                    summary.delivered += 1;
                    tracing::info!(entry_id = entry.id, "Successfully sent entry to Feishu");
                }
                Err(e) => {
                    summary.failed += 1;
                    tracing::warn!(
                        entry_id = entry.id,
                        error = %e,
                        "Failed to send entry to Feishu"
                    );
                }
            }
        }

        summary
    }
}
