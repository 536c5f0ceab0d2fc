//! quill - publishing client for Steem-compatible ledgers
//!
//! Compose posts locally as drafts, submit them as signed `comment` +
//! `comment_options` operation pairs through a broadcast service, and
//! mirror successful submissions into a companion contribution API.
//!
//! The core is the submission workflow in [`submit`]; everything it talks
//! to (broadcast transport, draft storage, contribution API, permlink
//! resolution, navigation, analytics) sits behind a trait so the workflow
//! runs unchanged against fakes in tests.

pub mod analytics;
pub mod auth;
pub mod config;
pub mod contribution;
pub mod drafts;
pub mod error;
pub mod ledger;
pub mod permlink;
pub mod routes;
pub mod submit;
pub mod types;
