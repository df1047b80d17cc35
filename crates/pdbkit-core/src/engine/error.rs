use std::path::PathBuf;
use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::pdb::PdbError;
use crate::core::io::tables::TableLoadError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error for '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to split '{}': {source}", path.display())]
    Pdb {
        path: PathBuf,
        #[source]
        source: PdbError,
    },

    #[error("Table input error: {0}")]
    TableLoad(#[from] TableLoadError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
