//! Recording mock services
//!
//! Every mock records its calls and can be primed to fail; a shared
//! journal string per call site lets tests assert on cross-service
//! ordering.

use async_trait::async_trait;
use quill::analytics::AnalyticsSink;
use quill::contribution::ContributionSync;
use quill::drafts::DraftStore;
use quill::error::{Error, Result};
use quill::ledger::Broadcaster;
use quill::permlink::PermlinkResolver;
use quill::routes::{Destination, Navigator};
use quill::submit::{WorkflowObserver, WorkflowUpdate};
use quill::types::{BroadcastReceipt, Draft, DraftRecord, OperationPair};
use std::sync::{Arc, Mutex};

/// Cross-service call journal
pub type Journal = Arc<Mutex<Vec<String>>>;

/// Create a fresh shared journal
pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

fn record(journal: &Journal, entry: impl Into<String>) {
    journal.lock().unwrap().push(entry.into());
}

/// Broadcaster that records operation pairs
pub struct MockBroadcaster {
    journal: Journal,
    /// Operation pairs received, in order
    pub operations: Mutex<Vec<OperationPair>>,
    /// When set, every broadcast rejects
    pub fail: bool,
}

impl MockBroadcaster {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: Arc::clone(journal),
            operations: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing(journal: &Journal) -> Self {
        Self {
            fail: true,
            ..Self::new(journal)
        }
    }
}

#[async_trait]
impl Broadcaster for MockBroadcaster {
    async fn broadcast(&self, operations: &OperationPair) -> Result<BroadcastReceipt> {
        record(&self.journal, "broadcast");
        if self.fail {
            return Err(Error::Broadcast("relay unavailable".to_string()));
        }
        self.operations.lock().unwrap().push(operations.clone());
        Ok(BroadcastReceipt {
            id: Some("tx-1".to_string()),
            block_num: Some(42),
        })
    }
}

/// In-memory draft store that records deletions
pub struct MockDraftStore {
    journal: Journal,
    /// Drafts saved, in order
    pub saved: Mutex<Vec<Draft>>,
    /// Ids deleted, in order
    pub deleted: Mutex<Vec<String>>,
    /// When set, saves fail
    pub fail_save: bool,
    /// When set, deletions fail
    pub fail_delete: bool,
}

impl MockDraftStore {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: Arc::clone(journal),
            saved: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            fail_save: false,
            fail_delete: false,
        }
    }
}

#[async_trait]
impl DraftStore for MockDraftStore {
    async fn save(&self, draft: &Draft) -> Result<DraftRecord> {
        record(&self.journal, format!("save:{}", draft.id));
        if self.fail_save {
            return Err(Error::DraftStore("disk full".to_string()));
        }
        self.saved.lock().unwrap().push(draft.clone());
        Ok(DraftRecord {
            draft: draft.clone(),
            saved_at: chrono::Utc::now(),
        })
    }

    async fn delete(&self, id: &str) -> Result<()> {
        record(&self.journal, format!("delete:{id}"));
        if self.fail_delete {
            return Err(Error::DraftStore("disk full".to_string()));
        }
        // Deleting an unknown id still succeeds, per the store contract.
        self.deleted.lock().unwrap().push(id.to_string());
        Ok(())
    }

    async fn load(&self, id: &str) -> Result<DraftRecord> {
        let found = self
            .saved
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|d| d.id == id)
            .cloned();
        found
            .map(|draft| DraftRecord {
                draft,
                saved_at: chrono::Utc::now(),
            })
            .ok_or_else(|| Error::DraftNotFound(id.to_string()))
    }

    async fn list(&self) -> Result<Vec<DraftRecord>> {
        Ok(self
            .saved
            .lock()
            .unwrap()
            .iter()
            .map(|draft| DraftRecord {
                draft: draft.clone(),
                saved_at: chrono::Utc::now(),
            })
            .collect())
    }
}

/// Contribution sync that records create/update calls
pub struct MockContributionSync {
    journal: Journal,
    /// `(author, permlink)` pairs created
    pub created: Mutex<Vec<(String, String)>>,
    /// `(author, permlink)` pairs updated
    pub updated: Mutex<Vec<(String, String)>>,
    /// When set, every call fails
    pub fail: bool,
}

impl MockContributionSync {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: Arc::clone(journal),
            created: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing(journal: &Journal) -> Self {
        Self {
            fail: true,
            ..Self::new(journal)
        }
    }
}

#[async_trait]
impl ContributionSync for MockContributionSync {
    async fn create(&self, author: &str, permlink: &str) -> Result<()> {
        record(&self.journal, format!("contribution-create:{author}/{permlink}"));
        if self.fail {
            return Err(Error::ContributionApi("api down".to_string()));
        }
        self.created
            .lock()
            .unwrap()
            .push((author.to_string(), permlink.to_string()));
        Ok(())
    }

    async fn update(&self, author: &str, permlink: &str) -> Result<()> {
        record(&self.journal, format!("contribution-update:{author}/{permlink}"));
        if self.fail {
            return Err(Error::ContributionApi("api down".to_string()));
        }
        self.updated
            .lock()
            .unwrap()
            .push((author.to_string(), permlink.to_string()));
        Ok(())
    }
}

/// Resolver that counts calls and answers a fixed permlink
pub struct MockResolver {
    /// Number of resolve calls issued
    pub calls: Mutex<u32>,
    /// Permlink answered on every call
    pub permlink: String,
    /// When set, resolution fails
    pub fail: bool,
}

impl MockResolver {
    pub fn answering(permlink: &str) -> Self {
        Self {
            calls: Mutex::new(0),
            permlink: permlink.to_string(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::answering("unused")
        }
    }
}

#[async_trait]
impl PermlinkResolver for MockResolver {
    async fn resolve(
        &self,
        _title: &str,
        _author: &str,
        _parent_author: &str,
        _parent_permlink: &str,
    ) -> Result<String> {
        *self.calls.lock().unwrap() += 1;
        if self.fail {
            return Err(Error::PermlinkResolution("node unreachable".to_string()));
        }
        Ok(self.permlink.clone())
    }
}

/// Analytics sink that records events
#[derive(Default)]
pub struct MockAnalytics {
    /// `(category, action)` pairs received
    pub events: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl AnalyticsSink for MockAnalytics {
    async fn event(&self, category: &str, action: &str) {
        self.events
            .lock()
            .unwrap()
            .push((category.to_string(), action.to_string()));
    }
}

/// Navigator that records every destination
#[derive(Default)]
pub struct RecordingNavigator {
    /// Destinations visited, in order
    pub visited: Mutex<Vec<Destination>>,
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate(&self, destination: &Destination) {
        self.visited.lock().unwrap().push(destination.clone());
    }
}

/// Observer that records transitions, operations, and edit hooks
#[derive(Default)]
pub struct RecordingObserver {
    /// Every state transition observed
    pub updates: Mutex<Vec<WorkflowUpdate>>,
    /// Operation pairs previewed before broadcast
    pub operations: Mutex<Vec<OperationPair>>,
    /// Permlinks flagged as recently edited
    pub recently_edited: Mutex<Vec<String>>,
}

#[async_trait]
impl WorkflowObserver for RecordingObserver {
    async fn on_update(&self, update: &WorkflowUpdate) {
        self.updates.lock().unwrap().push(update.clone());
    }

    async fn on_operations(&self, operations: &OperationPair) {
        self.operations.lock().unwrap().push(operations.clone());
    }

    async fn on_recently_edited(&self, permlink: &str) {
        self.recently_edited
            .lock()
            .unwrap()
            .push(permlink.to_string());
    }
}
