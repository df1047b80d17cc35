//! Provides input/output functionality for the text formats handled by pdbkit.
//!
//! PDB files are consumed line by line and only their `MODEL`/`ENDMDL`
//! markers are interpreted; the tabular inputs of the test-set table are
//! loaded through `csv` with `serde` row types.

pub mod pdb;
pub mod tables;
