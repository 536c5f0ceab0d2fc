//! Canned configs, drafts, and requests

use quill::config::Config;
use quill::types::{Draft, PublishedPost, SubmitRequest};

/// Config pointing at nothing; workflows under test never dial out
pub fn test_config() -> Config {
    Config {
        category: "utopian-io".to_string(),
        frontend_url: "https://utopian.io".to_string(),
        broadcast_url: "https://broadcast.invalid".to_string(),
        node_url: "https://node.invalid".to_string(),
        contribution_api_url: "https://api.invalid".to_string(),
        analytics_url: None,
    }
}

/// A brand-new post request originating from draft `d1`
pub fn new_post_request() -> SubmitRequest {
    SubmitRequest {
        parent_author: "steem".to_string(),
        parent_permlink: "re-topic".to_string(),
        author: "alice".to_string(),
        title: "Fix bug".to_string(),
        body: "Description".to_string(),
        json_metadata: serde_json::json!({ "tags": ["utopian-io"] }),
        draft_id: Some("d1".to_string()),
        is_updating: false,
        permlink: None,
        original_body: None,
        beneficiaries: Vec::new(),
    }
}

/// An update request editing an already-published post
pub fn update_request() -> SubmitRequest {
    SubmitRequest {
        is_updating: true,
        permlink: Some("fix-bug".to_string()),
        original_body: Some("Description".to_string()),
        body: "Description fixed".to_string(),
        ..new_post_request()
    }
}

/// A plain draft keyed by the given id
pub fn draft(id: &str) -> Draft {
    Draft {
        id: id.to_string(),
        author: "alice".to_string(),
        title: "Fix bug".to_string(),
        body: "Description".to_string(),
        original_body: None,
        json_metadata: serde_json::json!({ "tags": ["utopian-io"] }),
        parent_author: String::new(),
        parent_permlink: "utopian-io".to_string(),
        permlink: None,
        project_id: None,
        kind: None,
        is_updating: false,
    }
}

/// An announcement draft carrying a project id
pub fn announcement_draft(id: &str, project_id: &str) -> Draft {
    Draft {
        project_id: Some(project_id.to_string()),
        kind: Some("announcement".to_string()),
        ..draft(id)
    }
}

/// A published post as the content API would answer it
pub fn published_post() -> PublishedPost {
    PublishedPost {
        author: "alice".to_string(),
        permlink: "fix-bug".to_string(),
        parent_author: String::new(),
        parent_permlink: "utopian-io".to_string(),
        title: "Fix bug".to_string(),
        body: "Description".to_string(),
        json_metadata: r#"{"tags":["utopian-io"],"type":"bug-fix"}"#.to_string(),
    }
}
