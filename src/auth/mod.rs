//! Authentication for the broadcast service
//!
//! Supports environment variables and the config file.

use crate::config;
use crate::error::{Error, Result};
use reqwest::Client;
use std::env;
use std::time::Duration;
use tracing::debug;

/// Source of the access token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from an environment variable
    EnvVar,
    /// Token from the config file
    ConfigFile,
}

/// Broadcast-service authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Bearer token presented to the broadcast service
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

/// Get broadcast-service authentication
///
/// Priority:
/// 1. `QUILL_TOKEN` environment variable (recommended)
/// 2. `token` entry in the config file
pub fn get_auth() -> Result<AuthConfig> {
    debug!("checking QUILL_TOKEN env var");
    if let Ok(token) = env::var("QUILL_TOKEN")
        && !token.trim().is_empty()
    {
        debug!("obtained token from QUILL_TOKEN env var");
        return Ok(AuthConfig {
            token: token.trim().to_string(),
            source: AuthSource::EnvVar,
        });
    }

    debug!("checking config file for token");
    if let Some(token) = config::file_token()? {
        debug!("obtained token from config file");
        return Ok(AuthConfig {
            token: token.trim().to_string(),
            source: AuthSource::ConfigFile,
        });
    }

    Err(Error::Auth(
        "No access token found. Generate one for your posting authority and set QUILL_TOKEN, \
         or add `token = \"...\"` to the config file."
            .to_string(),
    ))
}

/// Test authentication against the broadcast service
///
/// Returns the account name the token is scoped to.
pub async fn test_auth(broadcast_url: &str, auth: &AuthConfig) -> Result<String> {
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| Error::Auth(format!("failed to create HTTP client: {e}")))?;

    let url = format!("{}/api/me", broadcast_url.trim_end_matches('/'));
    let response: serde_json::Value = client
        .post(&url)
        .bearer_auth(&auth.token)
        .send()
        .await?
        .error_for_status()
        .map_err(|e| Error::Auth(format!("invalid token: {e}")))?
        .json()
        .await?;

    let account = response
        .get("name")
        .or_else(|| response.get("user"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown account")
        .to_string();

    Ok(account)
}
