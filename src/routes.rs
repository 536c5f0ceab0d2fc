//! Navigation destinations
//!
//! Where to send the user next is a pure decision; actually going there is
//! a capability. Workflows compute a [`Destination`] and hand it to a
//! [`Navigator`], so the core logic is testable without a real frontend.

use crate::types::Draft;
use async_trait::async_trait;

/// A place the user can be sent after a workflow completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The post editor with a draft loaded
    Editor {
        /// Draft to load
        draft_id: String,
    },
    /// The announcement editor for a project, with a draft loaded
    AnnouncementEditor {
        /// Project the announcement belongs to
        project_id: String,
        /// Draft to load
        draft_id: String,
    },
    /// The canonical page of a published post
    Content {
        /// Parent permlink (category)
        parent_permlink: String,
        /// Author account name
        author: String,
        /// Post permlink
        permlink: String,
    },
}

impl Destination {
    /// Frontend path for this destination
    pub fn to_path(&self) -> String {
        match self {
            Self::Editor { draft_id } => format!("/write?draft={draft_id}"),
            Self::AnnouncementEditor {
                project_id,
                draft_id,
            } => format!("/write-announcement/{project_id}/?draft={draft_id}"),
            Self::Content {
                parent_permlink,
                author,
                permlink,
            } => format!("/{parent_permlink}/@{author}/{permlink}"),
        }
    }
}

/// Editor destination for a freshly saved draft
pub fn after_draft_save(draft: &Draft) -> Destination {
    if draft.is_announcement() {
        Destination::AnnouncementEditor {
            // is_announcement() guarantees the project id
            project_id: draft.project_id.clone().unwrap_or_default(),
            draft_id: draft.id.clone(),
        }
    } else {
        Destination::Editor {
            draft_id: draft.id.clone(),
        }
    }
}

/// Editor destination when re-entering an already-published post
///
/// Announcement posts route via the repository recorded in their metadata;
/// everything else loads the draft snapshot in the plain editor.
pub fn for_edit(draft_id: &str, json_metadata: &serde_json::Value) -> Destination {
    let kind = json_metadata.get("type").and_then(|t| t.as_str());
    let repository_id = json_metadata
        .get("repository")
        .and_then(|r| r.get("id"))
        .map(|id| match id.as_str() {
            Some(s) => s.to_string(),
            None => id.to_string(),
        });

    if let Some(kind) = kind
        && kind.contains("announcement")
        && let Some(project_id) = repository_id
    {
        return Destination::AnnouncementEditor {
            project_id,
            draft_id: draft_id.to_string(),
        };
    }

    Destination::Editor {
        draft_id: draft_id.to_string(),
    }
}

/// Canonical content destination after a successful submission
pub fn after_submit(parent_permlink: &str, author: &str, permlink: &str) -> Destination {
    Destination::Content {
        parent_permlink: parent_permlink.to_string(),
        author: author.to_string(),
        permlink: permlink.to_string(),
    }
}

/// Navigation capability
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Take the user to a destination
    async fn navigate(&self, destination: &Destination);
}

/// Navigator that goes nowhere
pub struct NoopNavigator;

#[async_trait]
impl Navigator for NoopNavigator {
    async fn navigate(&self, _destination: &Destination) {}
}
