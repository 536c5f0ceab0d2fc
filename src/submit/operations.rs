//! Operation pair construction
//!
//! Pure constructor for the two-operation ledger transaction. Validation
//! happened upstream; economics are fixed to full payout with no liquid
//! reward split.

use crate::types::{
    Beneficiary, CommentOperation, CommentOptionsOperation, Operation, OperationPair,
    MAX_ACCEPTED_PAYOUT,
};

/// Encode beneficiary allocations as comment-options extensions
///
/// Returns `None` for an empty list; extensions are only ever attached to
/// brand-new posts, since the ledger rejects re-declaring beneficiaries on
/// an edit.
pub fn beneficiary_extensions(beneficiaries: &[Beneficiary]) -> Option<serde_json::Value> {
    if beneficiaries.is_empty() {
        return None;
    }
    Some(serde_json::json!([[0, { "beneficiaries": beneficiaries }]]))
}

/// Build the ordered comment + comment-options operation pair
#[allow(clippy::too_many_arguments)]
pub fn build_operations(
    parent_author: &str,
    parent_permlink: &str,
    author: &str,
    title: &str,
    body: &str,
    json_metadata: &serde_json::Value,
    permlink: &str,
    extensions: Option<serde_json::Value>,
) -> OperationPair {
    let comment = CommentOperation {
        parent_author: parent_author.to_string(),
        parent_permlink: parent_permlink.to_string(),
        author: author.to_string(),
        permlink: permlink.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        json_metadata: json_metadata.to_string(),
    };

    let options = CommentOptionsOperation {
        author: author.to_string(),
        permlink: permlink.to_string(),
        allow_votes: true,
        allow_curation_rewards: true,
        max_accepted_payout: MAX_ACCEPTED_PAYOUT.to_string(),
        percent_steem_dollars: 0,
        extensions,
    };

    [Operation::Comment(comment), Operation::CommentOptions(options)]
}
