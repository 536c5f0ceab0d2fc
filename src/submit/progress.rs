//! Workflow observer trait for interface-agnostic state reporting
//!
//! Each logical action runs through an explicit state machine; observers
//! receive every transition plus a few domain hooks, so a CLI can print
//! and a test can assert without touching the workflow internals.

use crate::types::OperationPair;
use async_trait::async_trait;

/// Which logical action a state transition belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    /// Persisting a draft
    SaveDraft,
    /// Deleting a draft
    DeleteDraft,
    /// Creating or updating a post on the ledger
    SubmitPost,
}

impl std::fmt::Display for Workflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SaveDraft => write!(f, "save-draft"),
            Self::DeleteDraft => write!(f, "delete-draft"),
            Self::SubmitPost => write!(f, "submit-post"),
        }
    }
}

/// Lifecycle state of one workflow instance
///
/// Every dispatch enters `Pending`; exactly one terminal state follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowState {
    /// Work dispatched, awaiting the outcome
    Pending,
    /// Terminal: the workflow completed
    Success,
    /// Terminal: the workflow failed with a message
    Error(String),
}

impl std::fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Success => write!(f, "success"),
            Self::Error(msg) => write!(f, "error: {msg}"),
        }
    }
}

/// One observable state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowUpdate {
    /// The workflow the transition belongs to
    pub workflow: Workflow,
    /// Correlates transitions of one instance (draft id or permlink)
    pub correlation: String,
    /// The new state
    pub state: WorkflowState,
}

/// Workflow observer trait
///
/// Implement this to receive workflow updates.
/// - CLI implementations can print to terminal
/// - Tests can record transitions and assert on them
#[async_trait]
pub trait WorkflowObserver: Send + Sync {
    /// Called on every state transition
    async fn on_update(&self, update: &WorkflowUpdate);

    /// Called with the built operation pair before it is broadcast
    async fn on_operations(&self, operations: &OperationPair);

    /// Called when a successful submission replaced cached content
    ///
    /// Consumers use the permlink to reconcile stale UI caches.
    async fn on_recently_edited(&self, permlink: &str);
}

/// No-op observer for tests or when reporting isn't needed
pub struct NoopObserver;

#[async_trait]
impl WorkflowObserver for NoopObserver {
    async fn on_update(&self, _update: &WorkflowUpdate) {}
    async fn on_operations(&self, _operations: &OperationPair) {}
    async fn on_recently_edited(&self, _permlink: &str) {}
}
