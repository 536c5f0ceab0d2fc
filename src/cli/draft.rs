//! Draft commands - save, list, and delete drafts

use crate::cli::{CliNavigator, CliObserver};
use anstream::println;
use owo_colors::OwoColorize;
use quill::config::Config;
use quill::drafts::{DraftStore, FsDraftStore};
use quill::error::{Error, Result};
use quill::submit::{delete_draft, save_draft};
use quill::types::Draft;
use std::path::PathBuf;
use uuid::Uuid;

/// Options for `draft save`
#[derive(Debug, Clone, Default)]
pub struct DraftSaveOptions {
    /// File holding the post body
    pub file: PathBuf,
    /// Post title
    pub title: String,
    /// Posting account
    pub author: String,
    /// Tags recorded in the draft metadata
    pub tags: Vec<String>,
    /// Existing draft id to overwrite; a fresh id is generated otherwise
    pub id: Option<String>,
    /// Project id, marks the draft as an announcement
    pub project: Option<String>,
    /// Print the editor destination after saving
    pub redirect: bool,
}

/// Run `draft save`
pub async fn run_draft_save(options: DraftSaveOptions) -> Result<()> {
    let config = Config::load()?;
    let body = std::fs::read_to_string(&options.file)?;

    let mut tags = options.tags;
    if tags.is_empty() {
        tags.push(config.category.clone());
    }

    let kind = options.project.is_some().then(|| "announcement".to_string());
    let draft = Draft {
        id: options.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        author: options.author,
        title: options.title,
        body,
        original_body: None,
        json_metadata: serde_json::json!({ "tags": tags, "app": "quill" }),
        parent_author: String::new(),
        parent_permlink: config.category.clone(),
        permlink: None,
        project_id: options.project,
        kind,
        is_updating: false,
    };

    let drafts = FsDraftStore::open_default()?;
    let navigator = CliNavigator::new(&config.frontend_url);
    let observer = CliObserver::compact();

    let (record, _) = save_draft(&draft, options.redirect, &drafts, &navigator, &observer).await?;
    println!("Saved draft {}", record.draft.id.bold());

    Ok(())
}

/// Run `draft list`
pub async fn run_draft_list() -> Result<()> {
    let drafts = FsDraftStore::open_default()?;
    let records = drafts.list().await?;

    if records.is_empty() {
        println!("No drafts saved");
        return Ok(());
    }

    for record in records {
        let marker = if record.draft.is_updating {
            " (editing)"
        } else {
            ""
        };
        println!(
            "{}  {}  @{}{}",
            record.draft.id.bold(),
            record.saved_at.format("%Y-%m-%d %H:%M"),
            record.draft.author,
            marker.dimmed()
        );
        println!("    {}", record.draft.title);
    }

    Ok(())
}

/// Run `draft delete`
pub async fn run_draft_delete(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::InvalidArgument("draft id must not be empty".to_string()));
    }

    let drafts = FsDraftStore::open_default()?;
    let observer = CliObserver::compact();
    delete_draft(id, &drafts, &observer).await
}
