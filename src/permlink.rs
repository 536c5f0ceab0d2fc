//! Permlink resolution
//!
//! Derives a ledger-valid permlink for a new post, or answers a reply-style
//! permlink when there is no title to slugify. Updates never resolve; they
//! reuse the permlink stored on the draft.

use crate::error::{Error, Result};
use crate::ledger::ContentReader;
use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Ledger-imposed permlink length bound
const MAX_PERMLINK_LEN: usize = 255;

/// Characters that never survive slugification
static RE_INVALID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9-]+").unwrap());

/// Runs of separators collapsed into one
static RE_DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

/// Permlink resolution trait
///
/// Called at most once per submission attempt, and never for updates.
#[async_trait]
pub trait PermlinkResolver: Send + Sync {
    /// Derive a unique permlink for a new post
    async fn resolve(
        &self,
        title: &str,
        author: &str,
        parent_author: &str,
        parent_permlink: &str,
    ) -> Result<String>;
}

/// Resolver that probes the content API for collisions
pub struct ApiPermlinkResolver<C> {
    content: C,
}

impl<C: ContentReader> ApiPermlinkResolver<C> {
    /// Create a resolver over the given content reader
    pub const fn new(content: C) -> Self {
        Self { content }
    }
}

#[async_trait]
impl<C: ContentReader> PermlinkResolver for ApiPermlinkResolver<C> {
    async fn resolve(
        &self,
        title: &str,
        author: &str,
        _parent_author: &str,
        parent_permlink: &str,
    ) -> Result<String> {
        let slug = slugify(title);

        // Replies and titleless posts get a reply-style permlink derived
        // from the parent; those are unique by construction of the suffix.
        if slug.is_empty() {
            let permlink = truncate(&format!("re-{parent_permlink}-{}", time_suffix()));
            debug!(permlink, "derived reply permlink");
            return Ok(permlink);
        }

        let exists = self
            .content
            .get_content(author, &slug)
            .await
            .map_err(|e| Error::PermlinkResolution(e.to_string()))?
            .is_some();

        let permlink = if exists {
            truncate(&format!("{slug}-{}", time_suffix()))
        } else {
            truncate(&slug)
        };

        debug!(author, permlink, collision = exists, "resolved permlink");
        Ok(permlink)
    }
}

/// Lowercase, URL-safe slug of a title
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase().replace(' ', "-");
    let cleaned = RE_INVALID.replace_all(&lowered, "-");
    let collapsed = RE_DASHES.replace_all(&cleaned, "-");
    collapsed.trim_matches('-').to_string()
}

fn time_suffix() -> String {
    Utc::now().format("%Y%m%dt%H%M%S%3fz").to_string()
}

fn truncate(permlink: &str) -> String {
    let mut out = permlink.to_string();
    out.truncate(MAX_PERMLINK_LEN);
    out.trim_end_matches('-').to_string()
}
