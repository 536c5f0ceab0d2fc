//! Workflow execution
//!
//! Sequences each workflow against the external services. Within one
//! submission every step depends on the previous one, so the calls run
//! strictly in order with a single outstanding request at a time. The
//! broadcast is the point of no return: failures before it leave no state
//! behind, failures after it are reported but never compensated.

use crate::analytics::AnalyticsSink;
use crate::config::Config;
use crate::contribution::ContributionSync;
use crate::drafts::DraftStore;
use crate::error::{Error, Result};
use crate::ledger::Broadcaster;
use crate::permlink::PermlinkResolver;
use crate::routes::{self, Destination, Navigator};
use crate::submit::compose;
use crate::submit::operations::{beneficiary_extensions, build_operations};
use crate::submit::progress::{Workflow, WorkflowObserver, WorkflowState, WorkflowUpdate};
use crate::types::{
    parse_metadata, BroadcastReceipt, Draft, DraftRecord, PublishedPost, SubmitRequest,
};
use tracing::{debug, warn};

/// External capabilities the submission critical path runs against
pub struct Services<'a> {
    /// Signing/relay transport to the ledger
    pub broadcaster: &'a dyn Broadcaster,
    /// Draft persistence
    pub drafts: &'a dyn DraftStore,
    /// Contribution record mirror
    pub contributions: &'a dyn ContributionSync,
    /// Permlink derivation for new posts
    pub resolver: &'a dyn PermlinkResolver,
    /// Navigation executor
    pub navigator: &'a dyn Navigator,
    /// Optional analytics sink; `None` means events are dropped
    pub analytics: Option<&'a dyn AnalyticsSink>,
}

/// What a completed submission produced
#[derive(Debug)]
pub struct SubmissionOutcome {
    /// Permlink the post lives under
    pub permlink: String,
    /// Ledger receipt; `None` on a dry run
    pub receipt: Option<BroadcastReceipt>,
    /// Where the user was sent, when navigation happened
    pub destination: Option<Destination>,
    /// Post-broadcast bookkeeping failures (draft cleanup, contribution
    /// sync); the broadcast itself already succeeded
    pub sync_errors: Vec<Error>,
}

/// Persist a draft, optionally navigating back into the editor
pub async fn save_draft(
    draft: &Draft,
    redirect: bool,
    drafts: &dyn DraftStore,
    navigator: &dyn Navigator,
    observer: &dyn WorkflowObserver,
) -> Result<(DraftRecord, Option<Destination>)> {
    let correlation = draft.id.clone();
    emit(observer, Workflow::SaveDraft, &correlation, WorkflowState::Pending).await;

    let record = match drafts.save(draft).await {
        Ok(record) => record,
        Err(e) => {
            // Nothing was deleted; the in-memory draft is intact.
            emit(
                observer,
                Workflow::SaveDraft,
                &correlation,
                WorkflowState::Error(e.to_string()),
            )
            .await;
            return Err(e);
        }
    };

    let destination = if redirect {
        let destination = routes::after_draft_save(draft);
        navigator.navigate(&destination).await;
        Some(destination)
    } else {
        None
    };

    emit(observer, Workflow::SaveDraft, &correlation, WorkflowState::Success).await;
    Ok((record, destination))
}

/// Delete a draft by id
pub async fn delete_draft(
    id: &str,
    drafts: &dyn DraftStore,
    observer: &dyn WorkflowObserver,
) -> Result<()> {
    emit(observer, Workflow::DeleteDraft, id, WorkflowState::Pending).await;

    match drafts.delete(id).await {
        Ok(()) => {
            emit(observer, Workflow::DeleteDraft, id, WorkflowState::Success).await;
            Ok(())
        }
        Err(e) => {
            emit(
                observer,
                Workflow::DeleteDraft,
                id,
                WorkflowState::Error(e.to_string()),
            )
            .await;
            Err(e)
        }
    }
}

/// Snapshot a published post into a draft and route to its editor
///
/// The snapshot carries the published body as `original_body` and the
/// existing permlink, so the eventual submission runs as an update.
pub async fn edit_post(
    post: &PublishedPost,
    drafts: &dyn DraftStore,
    navigator: &dyn Navigator,
    observer: &dyn WorkflowObserver,
) -> Result<(DraftRecord, Destination)> {
    let metadata = parse_metadata(&post.json_metadata);

    let draft = Draft {
        id: format!("{}-{}", post.author, post.permlink),
        author: post.author.clone(),
        title: post.title.clone(),
        body: post.body.clone(),
        original_body: Some(post.body.clone()),
        json_metadata: metadata.clone(),
        parent_author: post.parent_author.clone(),
        parent_permlink: post.parent_permlink.clone(),
        permlink: Some(post.permlink.clone()),
        project_id: metadata
            .get("repository")
            .and_then(|r| r.get("id"))
            .map(|id| match id.as_str() {
                Some(s) => s.to_string(),
                None => id.to_string(),
            }),
        kind: metadata
            .get("type")
            .and_then(|t| t.as_str())
            .map(ToString::to_string),
        is_updating: true,
    };

    let (record, _) = save_draft(&draft, false, drafts, navigator, observer).await?;

    let destination = routes::for_edit(&draft.id, &metadata);
    navigator.navigate(&destination).await;

    Ok((record, destination))
}

/// Submit a post to the ledger
///
/// The critical path: validate, resolve the permlink, compose the body,
/// build the operation pair, broadcast, then clean up the draft and sync
/// the contribution record. A broadcast failure leaves the draft in place
/// for retry; nothing the user wrote is lost.
pub async fn submit_post(
    request: &SubmitRequest,
    config: &Config,
    services: &Services<'_>,
    observer: &dyn WorkflowObserver,
    dry_run: bool,
) -> Result<SubmissionOutcome> {
    // Contract check before any side effect; a violation is a bug in the
    // caller, not a user-facing failure.
    validate(request)?;

    let correlation = request
        .draft_id
        .clone()
        .or_else(|| request.permlink.clone())
        .unwrap_or_else(|| crate::permlink::slugify(&request.title));
    emit(observer, Workflow::SubmitPost, &correlation, WorkflowState::Pending).await;

    let result = run_submission(request, config, services, observer, dry_run).await;

    let state = match &result {
        Ok(_) => WorkflowState::Success,
        Err(e) => WorkflowState::Error(e.to_string()),
    };
    emit(observer, Workflow::SubmitPost, &correlation, state).await;

    result
}

async fn run_submission(
    request: &SubmitRequest,
    config: &Config,
    services: &Services<'_>,
    observer: &dyn WorkflowObserver,
    dry_run: bool,
) -> Result<SubmissionOutcome> {
    // Updates reuse the stored permlink; only brand-new posts resolve one,
    // and at most once per attempt.
    let permlink = if request.is_updating {
        request
            .permlink
            .clone()
            .ok_or(Error::MissingField("permlink"))?
    } else {
        services
            .resolver
            .resolve(
                &request.title,
                &request.author,
                &request.parent_author,
                &request.parent_permlink,
            )
            .await?
    };

    let body = if request.is_updating {
        let original = request
            .original_body
            .as_deref()
            .ok_or(Error::MissingField("original_body"))?;
        let candidate = compose::patch_candidate(original, &request.body);
        if candidate.smaller {
            candidate.patch
        } else {
            request.body.clone()
        }
    } else {
        compose::attributed_body(
            &request.body,
            &config.frontend_url,
            &config.category,
            &request.author,
            &permlink,
        )
    };

    // Beneficiaries may only be declared when the post is created.
    let extensions = if request.is_updating {
        None
    } else {
        beneficiary_extensions(&request.beneficiaries)
    };

    let operations = build_operations(
        &request.parent_author,
        &request.parent_permlink,
        &request.author,
        &request.title,
        &body,
        &request.json_metadata,
        &permlink,
        extensions,
    );
    observer.on_operations(&operations).await;

    if dry_run {
        debug!(permlink = %permlink, "dry run, skipping broadcast");
        return Ok(SubmissionOutcome {
            permlink,
            receipt: None,
            destination: None,
            sync_errors: Vec::new(),
        });
    }

    // Point of no return. A rejection here means no ledger state changed
    // and the draft must survive for retry.
    let receipt = services.broadcaster.broadcast(&operations).await?;
    debug!(permlink = %permlink, tx_id = receipt.id.as_deref(), "broadcast confirmed");

    let mut sync_errors = Vec::new();

    if let Some(draft_id) = &request.draft_id {
        if let Err(e) = services.drafts.delete(draft_id).await {
            warn!(draft_id = %draft_id, error = %e, "draft cleanup failed after broadcast");
            sync_errors.push(e);
        }
        observer.on_recently_edited(&permlink).await;
    }

    let contribution = if request.is_updating {
        services
            .contributions
            .update(&request.author, &permlink)
            .await
    } else {
        services
            .contributions
            .create(&request.author, &permlink)
            .await
    };

    let destination = match contribution {
        Ok(()) => {
            let destination =
                routes::after_submit(&request.parent_permlink, &request.author, &permlink);
            services.navigator.navigate(&destination).await;
            Some(destination)
        }
        Err(e) => {
            // The post is already live; bookkeeping lags and is reported,
            // never rolled back.
            warn!(permlink = %permlink, error = %e, "contribution sync failed after broadcast");
            sync_errors.push(e);
            None
        }
    };

    if let Some(analytics) = services.analytics {
        analytics.event("post", "submit").await;
    }

    Ok(SubmissionOutcome {
        permlink,
        receipt: Some(receipt),
        destination,
        sync_errors,
    })
}

fn validate(request: &SubmitRequest) -> Result<()> {
    if request.author.is_empty() {
        return Err(Error::MissingField("author"));
    }
    if request.parent_permlink.is_empty() {
        return Err(Error::MissingField("parent_permlink"));
    }
    if request.title.is_empty() {
        return Err(Error::MissingField("title"));
    }
    if request.body.is_empty() {
        return Err(Error::MissingField("body"));
    }
    if !request.json_metadata.is_object() {
        return Err(Error::MissingField("json_metadata"));
    }
    if request.is_updating {
        if request.permlink.is_none() {
            return Err(Error::MissingField("permlink"));
        }
        if request.original_body.is_none() {
            return Err(Error::MissingField("original_body"));
        }
    }
    Ok(())
}

async fn emit(
    observer: &dyn WorkflowObserver,
    workflow: Workflow,
    correlation: &str,
    state: WorkflowState,
) {
    observer
        .on_update(&WorkflowUpdate {
            workflow,
            correlation: correlation.to_string(),
            state,
        })
        .await;
}
