//! Shared types for drafts, submissions, and ledger operations

use chrono::{DateTime, Utc};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};

/// Maximum accepted payout declared on every options operation.
///
/// Posts are always submitted fully powered up; the reward-split knob the
/// ledger offers is not exposed.
pub const MAX_ACCEPTED_PAYOUT: &str = "1000000.000 SBD";

/// A locally persisted, pre-submission post
///
/// Drafts keep their `id` stable across save cycles and are deleted once a
/// submission reaches the ledger. A draft with `is_updating` set always
/// carries the `permlink` and `original_body` of the published revision it
/// edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    /// Stable draft identifier
    pub id: String,
    /// Posting account name
    pub author: String,
    /// Post title
    pub title: String,
    /// Post body (markdown/html)
    pub body: String,
    /// Body of the published revision, present when editing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_body: Option<String>,
    /// Arbitrary JSON metadata attached to the post (tags, type, ...)
    pub json_metadata: serde_json::Value,
    /// Parent author, empty for top-level posts
    pub parent_author: String,
    /// Parent permlink (the category for top-level posts)
    pub parent_permlink: String,
    /// Permlink of the published revision, present when editing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permlink: Option<String>,
    /// Associated project id, present for announcement drafts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Draft kind (e.g. "announcement")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// True when this draft edits an already-published post
    #[serde(default)]
    pub is_updating: bool,
}

impl Draft {
    /// Whether this draft routes through the announcement editor
    pub fn is_announcement(&self) -> bool {
        self.project_id.is_some() && self.kind.as_deref() == Some("announcement")
    }
}

/// A saved draft as returned by the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftRecord {
    /// The persisted draft
    pub draft: Draft,
    /// When the draft was last saved
    pub saved_at: DateTime<Utc>,
}

/// An already-published post, as read back from the content API
///
/// Input to the edit-entry workflow, which snapshots it into a draft.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishedPost {
    /// Author account name
    pub author: String,
    /// Permlink of the post
    pub permlink: String,
    /// Parent author, empty for top-level posts
    pub parent_author: String,
    /// Parent permlink
    pub parent_permlink: String,
    /// Post title
    pub title: String,
    /// Post body
    pub body: String,
    /// Raw metadata string as stored on the ledger
    pub json_metadata: String,
}

/// Everything needed to submit one post to the ledger
///
/// Ephemeral value derived from a draft (or CLI flags) at submission time.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    /// Parent author, empty for top-level posts
    pub parent_author: String,
    /// Parent permlink (the category for top-level posts)
    pub parent_permlink: String,
    /// Posting account name
    pub author: String,
    /// Post title
    pub title: String,
    /// Post body
    pub body: String,
    /// JSON metadata object
    pub json_metadata: serde_json::Value,
    /// Draft the submission originated from, if any
    pub draft_id: Option<String>,
    /// True when editing an existing post
    pub is_updating: bool,
    /// Permlink of the existing post, required when updating
    pub permlink: Option<String>,
    /// Body of the published revision, required when updating
    pub original_body: Option<String>,
    /// Beneficiary allocations, only honored for brand-new posts
    pub beneficiaries: Vec<Beneficiary>,
}

impl From<Draft> for SubmitRequest {
    fn from(draft: Draft) -> Self {
        Self {
            parent_author: draft.parent_author,
            parent_permlink: draft.parent_permlink,
            author: draft.author,
            title: draft.title,
            body: draft.body,
            json_metadata: draft.json_metadata,
            draft_id: Some(draft.id),
            is_updating: draft.is_updating,
            permlink: draft.permlink,
            original_body: draft.original_body,
            beneficiaries: Vec::new(),
        }
    }
}

/// A reward beneficiary attached to a new post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    /// Receiving account name
    pub account: String,
    /// Share in basis points (10000 = 100%)
    pub weight: u16,
}

/// The content half of the operation pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentOperation {
    /// Parent author, empty for top-level posts
    pub parent_author: String,
    /// Parent permlink
    pub parent_permlink: String,
    /// Author account name
    pub author: String,
    /// Permlink of this post
    pub permlink: String,
    /// Post title
    pub title: String,
    /// Post body (full text or patch)
    pub body: String,
    /// Metadata in its canonical string form
    pub json_metadata: String,
}

/// The payout-configuration half of the operation pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentOptionsOperation {
    /// Author account name, matches the content operation
    pub author: String,
    /// Permlink, matches the content operation
    pub permlink: String,
    /// Whether votes are accepted
    pub allow_votes: bool,
    /// Whether curators share in rewards
    pub allow_curation_rewards: bool,
    /// Payout ceiling, always [`MAX_ACCEPTED_PAYOUT`]
    pub max_accepted_payout: String,
    /// Liquid reward share, always 0 (fully powered up)
    pub percent_steem_dollars: u16,
    /// Beneficiary extensions, only present for brand-new posts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

/// A single ledger operation, serialized as a `[tag, payload]` tuple
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// `["comment", {...}]`
    Comment(CommentOperation),
    /// `["comment_options", {...}]`
    CommentOptions(CommentOptionsOperation),
}

impl Operation {
    /// Wire tag of this operation
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Comment(_) => "comment",
            Self::CommentOptions(_) => "comment_options",
        }
    }

    /// Permlink carried by this operation
    pub fn permlink(&self) -> &str {
        match self {
            Self::Comment(op) => &op.permlink,
            Self::CommentOptions(op) => &op.permlink,
        }
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(self.tag())?;
        match self {
            Self::Comment(op) => tuple.serialize_element(op)?,
            Self::CommentOptions(op) => tuple.serialize_element(op)?,
        }
        tuple.end()
    }
}

/// The ordered two-operation transaction submitted for one post
///
/// The content operation always precedes the options operation.
pub type OperationPair = [Operation; 2];

/// What the broadcast service reports back on success
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BroadcastReceipt {
    /// Transaction id assigned by the ledger, when reported
    #[serde(default)]
    pub id: Option<String>,
    /// Block the transaction was included in, when reported
    #[serde(default)]
    pub block_num: Option<u64>,
}

/// Parse a metadata string leniently, yielding an empty object on garbage
///
/// Ledger metadata is author-controlled and frequently malformed; readers
/// must not fail on it.
pub fn parse_metadata(raw: &str) -> serde_json::Value {
    match serde_json::from_str(raw) {
        Ok(value @ serde_json::Value::Object(_)) => value,
        _ => serde_json::Value::Object(serde_json::Map::new()),
    }
}
