//! Submit command - send a draft or a file to the ledger

use crate::cli::{CliNavigator, CliObserver};
use anstream::{eprintln, println};
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use quill::analytics::{AnalyticsSink, BeaconAnalytics};
use quill::auth;
use quill::config::Config;
use quill::contribution::HttpContributionSync;
use quill::drafts::{DraftStore, FsDraftStore};
use quill::error::{Error, Result};
use quill::ledger::{CondenserApi, CondenserBroadcaster};
use quill::permlink::ApiPermlinkResolver;
use quill::submit::{submit_post, Services};
use quill::types::{Beneficiary, SubmitRequest};
use std::path::{Path, PathBuf};

/// Options for the submit command
#[derive(Debug, Clone, Default)]
pub struct SubmitOptions {
    /// Submit a saved draft by id
    pub draft: Option<String>,
    /// Submit a body read from a file
    pub file: Option<PathBuf>,
    /// Post title (file submissions)
    pub title: Option<String>,
    /// Posting account (file submissions)
    pub author: Option<String>,
    /// Tags recorded in the post metadata (file submissions)
    pub tags: Vec<String>,
    /// Beneficiary allocations as `account:weight` in basis points
    pub beneficiaries: Vec<String>,
    /// Preview and prompt for confirmation before broadcasting
    pub confirm: bool,
    /// Resolve, compose, and print the operations without broadcasting
    pub dry_run: bool,
}

/// Run the submit command
pub async fn run_submit(options: SubmitOptions) -> Result<()> {
    if options.draft.is_some() == options.file.is_some() {
        return Err(Error::InvalidArgument(
            "Specify exactly one of --draft or --file".to_string(),
        ));
    }

    let config = Config::load()?;
    let drafts = FsDraftStore::open_default()?;

    let mut request = match (&options.draft, &options.file) {
        (Some(draft_id), _) => SubmitRequest::from(drafts.load(draft_id).await?.draft),
        (None, Some(path)) => request_from_file(path, &options, &config)?,
        (None, None) => unreachable!("validated above"),
    };
    request.beneficiaries = parse_beneficiaries(&options.beneficiaries)?;

    if options.confirm && !options.dry_run {
        print_preview(&request, &config);
        if !Confirm::new()
            .with_prompt("Broadcast this post?")
            .default(true)
            .interact()
            .map_err(|e| Error::Internal(format!("Failed to read confirmation: {e}")))?
        {
            println!("Aborted");
            return Ok(());
        }
        println!();
    }

    let auth = auth::get_auth()?;
    let broadcaster = CondenserBroadcaster::new(&config.broadcast_url, auth.token.clone())?;
    let contributions = HttpContributionSync::new(&config.contribution_api_url, auth.token)?;
    let resolver = ApiPermlinkResolver::new(CondenserApi::new(&config.node_url)?);
    let navigator = CliNavigator::new(&config.frontend_url);
    let analytics = config.analytics_url.clone().and_then(BeaconAnalytics::new);

    let services = Services {
        broadcaster: &broadcaster,
        drafts: &drafts,
        contributions: &contributions,
        resolver: &resolver,
        navigator: &navigator,
        analytics: analytics.as_ref().map(|a| a as &dyn AnalyticsSink),
    };

    let observer = CliObserver::verbose();
    let outcome = match submit_post(&request, &config, &services, &observer, options.dry_run).await
    {
        Ok(outcome) => outcome,
        Err(e @ Error::Broadcast(_)) => {
            // The draft was not deleted; make sure the user knows their
            // content survived before the error propagates.
            eprintln!(
                "{} Could not reach the ledger. Your post is safe in your drafts: \
                 run `quill draft list` to find it and retry.",
                "!".yellow().bold()
            );
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    if options.dry_run {
        println!();
        println!("Dry run - nothing was broadcast");
        return Ok(());
    }

    println!();
    println!(
        "Published {} as @{}/{}",
        request.title.bold(),
        request.author,
        outcome.permlink
    );
    if let Some(receipt) = &outcome.receipt
        && let Some(tx_id) = &receipt.id
    {
        println!("  transaction {tx_id}");
    }
    for err in &outcome.sync_errors {
        eprintln!(
            "  {} post is live, but bookkeeping lagged: {err}",
            "!".yellow()
        );
    }

    Ok(())
}

fn request_from_file(path: &Path, options: &SubmitOptions, config: &Config) -> Result<SubmitRequest> {
    let body = std::fs::read_to_string(path)?;
    let title = options
        .title
        .clone()
        .ok_or_else(|| Error::InvalidArgument("--title is required with --file".to_string()))?;
    let author = options
        .author
        .clone()
        .ok_or_else(|| Error::InvalidArgument("--author is required with --file".to_string()))?;

    let mut tags = options.tags.clone();
    if tags.is_empty() {
        tags.push(config.category.clone());
    }

    Ok(SubmitRequest {
        parent_author: String::new(),
        parent_permlink: config.category.clone(),
        author,
        title,
        body,
        json_metadata: serde_json::json!({ "tags": tags, "app": "quill" }),
        draft_id: None,
        is_updating: false,
        permlink: None,
        original_body: None,
        beneficiaries: Vec::new(),
    })
}

fn parse_beneficiaries(raw: &[String]) -> Result<Vec<Beneficiary>> {
    raw.iter()
        .map(|entry| {
            let (account, weight) = entry.split_once(':').ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "invalid beneficiary `{entry}`, expected account:weight"
                ))
            })?;
            let weight: u16 = weight.parse().map_err(|_| {
                Error::InvalidArgument(format!(
                    "invalid beneficiary weight in `{entry}`, expected basis points (0-10000)"
                ))
            })?;
            if weight > 10_000 {
                return Err(Error::InvalidArgument(format!(
                    "beneficiary weight in `{entry}` exceeds 10000 basis points"
                )));
            }
            Ok(Beneficiary {
                account: account.to_string(),
                weight,
            })
        })
        .collect()
}

fn print_preview(request: &SubmitRequest, config: &Config) {
    println!("About to submit:");
    println!("  title:    {}", request.title);
    println!("  author:   @{}", request.author);
    println!("  category: {}", config.category);
    if request.is_updating {
        println!(
            "  updating: {}",
            request.permlink.as_deref().unwrap_or_default()
        );
    }
    if !request.beneficiaries.is_empty() {
        println!("  beneficiaries:");
        for b in &request.beneficiaries {
            println!("    - {} ({} bps)", b.account, b.weight);
        }
    }
    println!();
}
