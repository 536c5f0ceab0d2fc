//! quill - publishing client for Steem-compatible ledgers
//!
//! CLI binary for drafting, submitting, and editing posts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Draft, submit, and sync posts on Steem-compatible ledgers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a draft or a file to the ledger
    Submit {
        /// Saved draft id to submit
        #[arg(long, group = "source")]
        draft: Option<String>,

        /// File holding the post body
        #[arg(long, group = "source")]
        file: Option<PathBuf>,

        /// Post title (required with --file)
        #[arg(long)]
        title: Option<String>,

        /// Posting account (required with --file)
        #[arg(long)]
        author: Option<String>,

        /// Tag recorded in the post metadata (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Beneficiary as account:weight in basis points (repeatable)
        #[arg(long = "beneficiary")]
        beneficiaries: Vec<String>,

        /// Preview and prompt for confirmation before broadcasting
        #[arg(long, short = 'c')]
        confirm: bool,

        /// Resolve and print the operations without broadcasting
        #[arg(long)]
        dry_run: bool,
    },

    /// Manage local drafts
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },

    /// Snapshot a published post into a draft for editing
    Edit {
        /// Author of the published post
        author: String,

        /// Permlink of the published post
        permlink: String,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum DraftAction {
    /// Save a draft from a file
    Save {
        /// File holding the post body
        #[arg(long)]
        file: PathBuf,

        /// Post title
        #[arg(long)]
        title: String,

        /// Posting account
        #[arg(long)]
        author: String,

        /// Tag recorded in the draft metadata (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Existing draft id to overwrite
        #[arg(long)]
        id: Option<String>,

        /// Project id, marks the draft as an announcement
        #[arg(long)]
        project: Option<String>,

        /// Print the editor destination after saving
        #[arg(long)]
        redirect: bool,
    },

    /// List saved drafts
    List,

    /// Delete a draft
    Delete {
        /// Draft id to delete
        id: String,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test,
    /// Show authentication setup instructions
    Setup,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Submit {
            draft,
            file,
            title,
            author,
            tags,
            beneficiaries,
            confirm,
            dry_run,
        } => {
            cli::run_submit(cli::SubmitOptions {
                draft,
                file,
                title,
                author,
                tags,
                beneficiaries,
                confirm,
                dry_run,
            })
            .await?;
        }
        Commands::Draft { action } => match action {
            DraftAction::Save {
                file,
                title,
                author,
                tags,
                id,
                project,
                redirect,
            } => {
                cli::run_draft_save(cli::DraftSaveOptions {
                    file,
                    title,
                    author,
                    tags,
                    id,
                    project,
                    redirect,
                })
                .await?;
            }
            DraftAction::List => cli::run_draft_list().await?,
            DraftAction::Delete { id } => cli::run_draft_delete(&id).await?,
        },
        Commands::Edit { author, permlink } => {
            cli::run_edit(&author, &permlink).await?;
        }
        Commands::Auth { action } => {
            let action_str = match action {
                AuthAction::Test => "test",
                AuthAction::Setup => "setup",
            };
            cli::run_auth(action_str).await?;
        }
    }

    Ok(())
}
