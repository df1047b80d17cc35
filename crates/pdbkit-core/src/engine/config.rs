use crate::core::naming::MODEL_FILE_MARKER;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{parameter}': {reason}")]
    Invalid {
        parameter: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitAllConfig {
    /// Extension (without the dot) of the files to split.
    pub extension: String,
    /// Stem infix identifying files that are already split outputs.
    pub split_marker: String,
}

impl Default for SplitAllConfig {
    fn default() -> Self {
        Self {
            extension: "pdb".to_string(),
            split_marker: MODEL_FILE_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameConfig {
    pub folder_prefix: String,
    /// File name suffixes searched, in order, for a PDB identifier.
    pub candidate_suffixes: Vec<String>,
    pub dry_run: bool,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            folder_prefix: "rnacomposer-".to_string(),
            candidate_suffixes: vec![
                ".pdb".to_string(),
                "-log.txt".to_string(),
                ".pdb-blocks.txt".to_string(),
            ],
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub descriptions_path: PathBuf,
    pub sizes_path: PathBuf,
    /// Directory holding one `<mol>/<mol>_GARN.csv` file per molecule.
    pub reference_dir: PathBuf,
    pub output_path: PathBuf,
}

#[derive(Default)]
pub struct SplitAllConfigBuilder {
    extension: Option<String>,
    split_marker: Option<String>,
}

impl SplitAllConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }
    pub fn split_marker(mut self, marker: impl Into<String>) -> Self {
        self.split_marker = Some(marker.into());
        self
    }

    pub fn build(self) -> Result<SplitAllConfig, ConfigError> {
        let extension = self
            .extension
            .ok_or(ConfigError::MissingParameter("extension"))?;
        let extension = extension.trim_start_matches('.').to_string();
        if extension.is_empty() {
            return Err(ConfigError::Invalid {
                parameter: "extension",
                reason: "must not be empty".to_string(),
            });
        }
        let split_marker = self
            .split_marker
            .ok_or(ConfigError::MissingParameter("split_marker"))?;
        if split_marker.is_empty() {
            return Err(ConfigError::Invalid {
                parameter: "split_marker",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(SplitAllConfig {
            extension,
            split_marker,
        })
    }
}

#[derive(Default)]
pub struct RenameConfigBuilder {
    folder_prefix: Option<String>,
    candidate_suffixes: Option<Vec<String>>,
    dry_run: bool,
}

impl RenameConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folder_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.folder_prefix = Some(prefix.into());
        self
    }
    pub fn candidate_suffixes(mut self, suffixes: Vec<String>) -> Self {
        self.candidate_suffixes = Some(suffixes);
        self
    }
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn build(self) -> Result<RenameConfig, ConfigError> {
        let folder_prefix = self
            .folder_prefix
            .ok_or(ConfigError::MissingParameter("folder_prefix"))?;
        if folder_prefix.is_empty() {
            return Err(ConfigError::Invalid {
                parameter: "folder_prefix",
                reason: "must not be empty".to_string(),
            });
        }
        let candidate_suffixes = self
            .candidate_suffixes
            .ok_or(ConfigError::MissingParameter("candidate_suffixes"))?;
        if candidate_suffixes.is_empty() || candidate_suffixes.iter().any(|s| s.is_empty()) {
            return Err(ConfigError::Invalid {
                parameter: "candidate_suffixes",
                reason: "expected at least one non-empty suffix".to_string(),
            });
        }
        Ok(RenameConfig {
            folder_prefix,
            candidate_suffixes,
            dry_run: self.dry_run,
        })
    }
}

#[derive(Default)]
pub struct TableConfigBuilder {
    descriptions_path: Option<PathBuf>,
    sizes_path: Option<PathBuf>,
    reference_dir: Option<PathBuf>,
    output_path: Option<PathBuf>,
}

impl TableConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn descriptions_path(mut self, path: PathBuf) -> Self {
        self.descriptions_path = Some(path);
        self
    }
    pub fn sizes_path(mut self, path: PathBuf) -> Self {
        self.sizes_path = Some(path);
        self
    }
    pub fn reference_dir(mut self, path: PathBuf) -> Self {
        self.reference_dir = Some(path);
        self
    }
    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }

    pub fn build(self) -> Result<TableConfig, ConfigError> {
        Ok(TableConfig {
            descriptions_path: self
                .descriptions_path
                .ok_or(ConfigError::MissingParameter("descriptions_path"))?,
            sizes_path: self
                .sizes_path
                .ok_or(ConfigError::MissingParameter("sizes_path"))?,
            reference_dir: self
                .reference_dir
                .ok_or(ConfigError::MissingParameter("reference_dir"))?,
            output_path: self
                .output_path
                .ok_or(ConfigError::MissingParameter("output_path"))?,
        })
    }
}
