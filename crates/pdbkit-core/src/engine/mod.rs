//! # Engine Module
//!
//! Shared plumbing for the pdbkit workflows.
//!
//! - **Configuration** ([`config`]) - typed settings for each workflow and the builders validating them
//! - **Error Handling** ([`error`]) - the [`error::EngineError`] returned by every workflow
//! - **Progress Monitoring** ([`progress`]) - progress events delivered through an optional callback

pub mod config;
pub mod error;
pub mod progress;
