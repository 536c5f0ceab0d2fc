//! Shared CLI workflow observer and navigator

use anstream::{eprintln, println};
use async_trait::async_trait;
use owo_colors::OwoColorize;
use quill::routes::{Destination, Navigator};
use quill::submit::{WorkflowObserver, WorkflowState, WorkflowUpdate};
use quill::types::OperationPair;
use terminal_link::Link;

/// CLI observer that prints workflow progress to the terminal
///
/// Two modes:
/// - verbose (submit): shows every transition and the operation pair
/// - compact (draft commands): terminal states only
pub struct CliObserver {
    /// Verbose mode shows all transitions and the built operations
    pub verbose: bool,
}

impl CliObserver {
    /// Create verbose progress (for the submit command)
    pub const fn verbose() -> Self {
        Self { verbose: true }
    }

    /// Create compact progress (for draft commands)
    pub const fn compact() -> Self {
        Self { verbose: false }
    }
}

#[async_trait]
impl WorkflowObserver for CliObserver {
    async fn on_update(&self, update: &WorkflowUpdate) {
        match &update.state {
            WorkflowState::Pending => {
                if self.verbose {
                    println!("{} {}...", update.workflow, update.correlation.dimmed());
                }
            }
            WorkflowState::Success => {
                println!(
                    "  {} {} {}",
                    "✓".green(),
                    update.workflow,
                    update.correlation.dimmed()
                );
            }
            WorkflowState::Error(msg) => {
                eprintln!("  {} {} failed: {msg}", "✗".red(), update.workflow);
            }
        }
    }

    async fn on_operations(&self, operations: &OperationPair) {
        if !self.verbose {
            return;
        }
        match serde_json::to_string_pretty(operations) {
            Ok(rendered) => println!("{rendered}"),
            Err(_) => println!("{operations:?}"),
        }
    }

    async fn on_recently_edited(&self, permlink: &str) {
        if self.verbose {
            println!("  {} cached content refreshed for {permlink}", "-".dimmed());
        }
    }
}

/// Navigator that renders destinations as frontend hyperlinks
pub struct CliNavigator {
    frontend_url: String,
}

impl CliNavigator {
    /// Create a navigator against the given frontend base URL
    pub fn new(frontend_url: &str) -> Self {
        Self {
            frontend_url: frontend_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Navigator for CliNavigator {
    async fn navigate(&self, destination: &Destination) {
        let url = format!("{}{}", self.frontend_url, destination.to_path());
        if supports_hyperlinks::supports_hyperlinks() {
            println!("  → {}", Link::new(&url, &url));
        } else {
            println!("  → {url}");
        }
    }
}
