//! Contribution API synchronization
//!
//! The contribution API mirrors successfully broadcast posts into a
//! secondary index keyed by `(author, permlink)`. Sync runs after the
//! broadcast confirmed; a failure here never rolls the ledger back.

use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Contribution record synchronization trait
#[async_trait]
pub trait ContributionSync: Send + Sync {
    /// Create the record for a freshly published post
    async fn create(&self, author: &str, permlink: &str) -> Result<()>;

    /// Update the record for an edited post
    async fn update(&self, author: &str, permlink: &str) -> Result<()>;
}

/// HTTP client for the contribution API
pub struct HttpContributionSync {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpContributionSync {
    /// Create a new client against the given API URL
    pub fn new(base_url: &str, token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::ContributionApi(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }
}

#[async_trait]
impl ContributionSync for HttpContributionSync {
    async fn create(&self, author: &str, permlink: &str) -> Result<()> {
        debug!(author, permlink, "creating contribution record");
        let url = format!("{}/api/posts", self.base_url);
        self.client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "author": author, "permlink": permlink }))
            .send()
            .await
            .map_err(|e| Error::ContributionApi(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::ContributionApi(e.to_string()))?;

        debug!(author, permlink, "created contribution record");
        Ok(())
    }

    async fn update(&self, author: &str, permlink: &str) -> Result<()> {
        debug!(author, permlink, "updating contribution record");
        let url = format!("{}/api/posts/{author}/{permlink}", self.base_url);
        self.client
            .put(&url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "author": author, "permlink": permlink }))
            .send()
            .await
            .map_err(|e| Error::ContributionApi(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::ContributionApi(e.to_string()))?;

        debug!(author, permlink, "updated contribution record");
        Ok(())
    }
}
