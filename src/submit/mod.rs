//! Post submission engine
//!
//! Handles the workflow of turning an in-progress edit into a ledger
//! transaction:
//! 1. Compose - resolve the permlink and produce the final body
//! 2. Build - construct the comment + comment-options operation pair
//! 3. Execute - broadcast, then clean up the draft and sync bookkeeping

mod compose;
mod execute;
mod operations;
mod progress;

pub use compose::{attributed_body, patch_candidate, BodyPatch};
pub use execute::{
    delete_draft, edit_post, save_draft, submit_post, Services, SubmissionOutcome,
};
pub use operations::{beneficiary_extensions, build_operations};
pub use progress::{NoopObserver, Workflow, WorkflowObserver, WorkflowState, WorkflowUpdate};
