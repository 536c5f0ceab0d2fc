//! Configuration loading
//!
//! Settings come from `~/.config/quill/config.toml` with environment
//! variables taking priority, mirroring how authentication is resolved.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use tracing::debug;
use url::Url;

/// Default category new posts are filed under
pub const DEFAULT_CATEGORY: &str = "utopian-io";

const DEFAULT_FRONTEND_URL: &str = "https://utopian.io";
const DEFAULT_BROADCAST_URL: &str = "https://v2.steemconnect.com";
const DEFAULT_NODE_URL: &str = "https://api.steemit.com";
const DEFAULT_CONTRIBUTION_API_URL: &str = "https://api.utopian.io";

/// Resolved application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Category (parent permlink) for new top-level posts
    pub category: String,
    /// Web frontend base URL, used for navigation links and the footer
    pub frontend_url: String,
    /// Broadcast service base URL
    pub broadcast_url: String,
    /// Ledger node URL for content lookups
    pub node_url: String,
    /// Contribution API base URL
    pub contribution_api_url: String,
    /// Optional analytics beacon URL; absent means analytics is a no-op
    pub analytics_url: Option<String>,
}

/// On-disk configuration file shape; every field optional
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    category: Option<String>,
    frontend_url: Option<String>,
    broadcast_url: Option<String>,
    node_url: Option<String>,
    contribution_api_url: Option<String>,
    analytics_url: Option<String>,
    token: Option<String>,
}

impl Config {
    /// Load configuration from the config file and environment
    ///
    /// Priority per setting: `QUILL_*` environment variable, then the
    /// config file, then the built-in default.
    pub fn load() -> Result<Self> {
        let file = read_config_file()?;

        let config = Self {
            category: setting("QUILL_CATEGORY", file.category, DEFAULT_CATEGORY),
            frontend_url: setting("QUILL_FRONTEND_URL", file.frontend_url, DEFAULT_FRONTEND_URL),
            broadcast_url: setting(
                "QUILL_BROADCAST_URL",
                file.broadcast_url,
                DEFAULT_BROADCAST_URL,
            ),
            node_url: setting("QUILL_NODE_URL", file.node_url, DEFAULT_NODE_URL),
            contribution_api_url: setting(
                "QUILL_CONTRIBUTION_API_URL",
                file.contribution_api_url,
                DEFAULT_CONTRIBUTION_API_URL,
            ),
            analytics_url: env::var("QUILL_ANALYTICS_URL")
                .ok()
                .or(file.analytics_url),
        };

        for (name, value) in [
            ("frontend_url", &config.frontend_url),
            ("broadcast_url", &config.broadcast_url),
            ("node_url", &config.node_url),
            ("contribution_api_url", &config.contribution_api_url),
        ] {
            Url::parse(value)
                .map_err(|e| Error::Config(format!("invalid {name} `{value}`: {e}")))?;
        }

        Ok(config)
    }
}

/// Path of the config file, if a config directory exists on this platform
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quill").join("config.toml"))
}

/// Access token stored in the config file, if any
pub fn file_token() -> Result<Option<String>> {
    Ok(read_config_file()?.token)
}

fn read_config_file() -> Result<ConfigFile> {
    let Some(path) = config_file_path() else {
        return Ok(ConfigFile::default());
    };
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    debug!(path = %path.display(), "reading config file");
    let raw = std::fs::read_to_string(&path)?;
    toml::from_str(&raw).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
}

fn setting(env_var: &str, file_value: Option<String>, default: &str) -> String {
    env::var(env_var)
        .ok()
        .or(file_value)
        .unwrap_or_else(|| default.to_string())
}
