//! Draft persistence
//!
//! Drafts are the pre-submission representation of a post, keyed by an
//! opaque stable id. The store seam lets tests observe exactly which
//! deletions a submission issued.

mod fs;

pub use fs::FsDraftStore;

use crate::error::Result;
use crate::types::{Draft, DraftRecord};
use async_trait::async_trait;

/// Draft storage trait
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Persist a draft, overwriting any previous save under the same id
    async fn save(&self, draft: &Draft) -> Result<DraftRecord>;

    /// Delete a draft by id
    ///
    /// Deleting an id that does not exist is not an error.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Load a draft by id
    async fn load(&self, id: &str) -> Result<DraftRecord>;

    /// List all saved drafts, most recently saved first
    async fn list(&self) -> Result<Vec<DraftRecord>>;
}
