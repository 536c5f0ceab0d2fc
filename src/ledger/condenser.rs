//! HTTP implementations of the ledger services
//!
//! The broadcaster talks to a SteemConnect-style broadcast service with a
//! bearer token; content lookups go to a condenser-API node over JSON-RPC.

use crate::error::{Error, Result};
use crate::ledger::{Broadcaster, ContentReader};
use crate::types::{BroadcastReceipt, OperationPair, PublishedPost};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Deserialize)]
struct BroadcastResponse {
    #[serde(default)]
    result: Option<BroadcastReceipt>,
    #[serde(default)]
    error: Option<BroadcastError>,
}

#[derive(Deserialize)]
struct BroadcastError {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Broadcast service client
pub struct CondenserBroadcaster {
    client: Client,
    base_url: String,
    token: String,
}

impl CondenserBroadcaster {
    /// Create a new broadcaster against the given service URL
    pub fn new(base_url: &str, token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Broadcast(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }
}

#[async_trait]
impl Broadcaster for CondenserBroadcaster {
    async fn broadcast(&self, operations: &OperationPair) -> Result<BroadcastReceipt> {
        debug!(permlink = operations[0].permlink(), "broadcasting operation pair");

        let url = format!("{}/api/broadcast", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "operations": operations }))
            .send()
            .await
            .map_err(|e| Error::Broadcast(e.to_string()))?;

        let status = response.status();
        let body: BroadcastResponse = response
            .json()
            .await
            .map_err(|e| Error::Broadcast(format!("malformed broadcast response: {e}")))?;

        if let Some(err) = body.error {
            let message = err
                .error_description
                .or(err.error)
                .unwrap_or_else(|| "unknown service error".to_string());
            return Err(Error::Broadcast(message));
        }
        if !status.is_success() {
            return Err(Error::Broadcast(format!("service returned {status}")));
        }

        let receipt = body.result.unwrap_or_default();
        debug!(tx_id = receipt.id.as_deref(), "broadcast accepted");
        Ok(receipt)
    }
}

/// Condenser-API node client for content lookups
pub struct CondenserApi {
    client: Client,
    node_url: String,
}

impl CondenserApi {
    /// Create a new node client
    pub fn new(node_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            node_url: node_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ContentReader for CondenserApi {
    async fn get_content(&self, author: &str, permlink: &str) -> Result<Option<PublishedPost>> {
        debug!(author, permlink, "looking up content");

        let response: serde_json::Value = self
            .client
            .post(&self.node_url)
            .json(&serde_json::json!({
                "jsonrpc": "2.0",
                "method": "condenser_api.get_content",
                "params": [author, permlink],
                "id": 1,
            }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(err) = response.get("error") {
            return Err(Error::Parse(format!("node error: {err}")));
        }

        let Some(result) = response.get("result") else {
            return Ok(None);
        };

        // The node answers an empty shell (id 0, empty author) for unknown
        // addresses rather than an error.
        let exists = result
            .get("author")
            .and_then(|a| a.as_str())
            .is_some_and(|a| !a.is_empty());
        if !exists {
            debug!(author, permlink, "no content at address");
            return Ok(None);
        }

        let post: PublishedPost = serde_json::from_value(result.clone())?;
        debug!(author, permlink, "found content");
        Ok(Some(post))
    }
}
