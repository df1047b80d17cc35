use pdbkit::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

const EXIT_FAILURE: i32 = 1;
const EXIT_NOT_FOUND: i32 = 2;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Pdbkit(#[from] EngineError),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error: `2` when the target path is missing.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound(_) | CliError::Pdbkit(EngineError::NotFound(_)) => EXIT_NOT_FOUND,
            _ => EXIT_FAILURE,
        }
    }
}
