//! CLI command implementations

mod auth;
mod draft;
mod edit;
mod progress;
mod submit;

pub use auth::run_auth;
pub use draft::{run_draft_delete, run_draft_list, run_draft_save, DraftSaveOptions};
pub use edit::run_edit;
pub use progress::{CliNavigator, CliObserver};
pub use submit::{run_submit, SubmitOptions};
