//! Best-effort analytics
//!
//! Submissions emit a fire-and-forget event. The sink is optional; when
//! none is configured the event is dropped silently, and a sink failure is
//! never surfaced to the workflow.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Analytics event sink
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    /// Record an event; implementations must swallow their own failures
    async fn event(&self, category: &str, action: &str);
}

/// Sink that drops every event
pub struct NoopAnalytics;

#[async_trait]
impl AnalyticsSink for NoopAnalytics {
    async fn event(&self, _category: &str, _action: &str) {}
}

/// HTTP beacon sink
pub struct BeaconAnalytics {
    client: Client,
    url: String,
}

impl BeaconAnalytics {
    /// Create a beacon posting to the given URL
    pub fn new(url: String) -> Option<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .ok()?;
        Some(Self { client, url })
    }
}

#[async_trait]
impl AnalyticsSink for BeaconAnalytics {
    async fn event(&self, category: &str, action: &str) {
        let result = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({ "category": category, "action": action }))
            .send()
            .await;

        if let Err(e) = result {
            debug!(category, action, error = %e, "analytics beacon dropped");
        }
    }
}
