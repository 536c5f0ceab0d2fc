//! Edit command - snapshot a published post into a draft for editing

use crate::cli::{CliNavigator, CliObserver};
use anstream::println;
use owo_colors::OwoColorize;
use quill::config::Config;
use quill::drafts::FsDraftStore;
use quill::error::{Error, Result};
use quill::ledger::{CondenserApi, ContentReader};
use quill::submit::edit_post;

/// Run the edit command
pub async fn run_edit(author: &str, permlink: &str) -> Result<()> {
    let config = Config::load()?;

    let api = CondenserApi::new(&config.node_url)?;
    let post = api
        .get_content(author, permlink)
        .await?
        .ok_or_else(|| Error::Parse(format!("no post at @{author}/{permlink}")))?;

    let drafts = FsDraftStore::open_default()?;
    let navigator = CliNavigator::new(&config.frontend_url);
    let observer = CliObserver::compact();

    let (record, _) = edit_post(&post, &drafts, &navigator, &observer).await?;

    println!(
        "Editing @{author}/{permlink} as draft {}",
        record.draft.id.bold()
    );
    println!("Submit your changes with `quill submit --draft {}`", record.draft.id);

    Ok(())
}
