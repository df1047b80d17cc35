//! # Core Module
//!
//! Stateless building blocks shared by the pdbkit workflows.
//!
//! - **File I/O** ([`io`]) - the `MODEL`/`ENDMDL` splitter and the CSV loaders
//!   feeding the test-set table
//! - **Naming** ([`naming`]) - split output file names and PDB identifier extraction
//! - **LaTeX** ([`latex`]) - rendering of the molecule test-set table

pub mod io;
pub mod latex;
pub mod naming;
