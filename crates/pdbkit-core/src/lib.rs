//! # pdbkit Core Library
//!
//! Utilities for managing multi-model PDB files produced by RNA structure
//! prediction runs and for summarising a molecule test set as a LaTeX table.
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless pieces: the `MODEL`/`ENDMDL`
//!   state machine, CSV loaders, output naming rules and LaTeX rendering.
//!
//! - **[`engine`]: Shared Plumbing.** Typed configuration with builders, the
//!   library error type and the progress reporting callback.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures (single-file
//!   split, recursive split, folder renaming, table generation) that return
//!   typed reports and leave console output to the caller.

pub mod core;
pub mod engine;
pub mod workflows;
