//! Ledger services: broadcast transport and content lookups
//!
//! Provides the seam between the submission workflow and the distributed
//! ledger. The broadcast service signs and relays operation pairs; the node
//! API answers content lookups.

mod condenser;

pub use condenser::{CondenserApi, CondenserBroadcaster};

use crate::error::Result;
use crate::types::{BroadcastReceipt, OperationPair, PublishedPost};
use async_trait::async_trait;

/// Broadcast transport trait
///
/// Abstracts the signing/relay service so the submission logic can run
/// against a fake in tests. A single configured transport serves the whole
/// process; implementations hold their own client state.
#[async_trait]
pub trait Broadcaster: Send + Sync {
    /// Submit an operation pair for signing and relay
    ///
    /// Resolves once the ledger accepted the transaction. A rejection means
    /// no ledger state changed.
    async fn broadcast(&self, operations: &OperationPair) -> Result<BroadcastReceipt>;
}

/// Content lookup trait
///
/// Used by the permlink resolver to probe for collisions and by the edit
/// workflow to fetch the post being edited.
#[async_trait]
pub trait ContentReader: Send + Sync {
    /// Fetch a published post, or `None` if nothing exists at that address
    async fn get_content(&self, author: &str, permlink: &str) -> Result<Option<PublishedPost>>;
}
