//! # Workflows Module
//!
//! High-level procedures tying the [`core`](crate::core) building blocks
//! together. Every workflow returns a typed report and leaves console output
//! to the caller; per-file feedback is delivered through a
//! [`ProgressReporter`](crate::engine::progress::ProgressReporter) where it
//! applies.
//!
//! - **Single-file split** ([`split`]) - one output file per `MODEL`/`ENDMDL` block
//! - **Recursive split** ([`split_all`]) - best-effort split of every PDB file under a root
//! - **Folder renaming** ([`rename`]) - names RNAComposer result folders after their PDB id
//! - **Test-set table** ([`table`]) - joins CSV metadata into a LaTeX table

pub mod rename;
pub mod split;
pub mod split_all;
pub mod table;
