use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileSplitConfig {
    pub default_input: Option<String>,
    pub extension: Option<String>,
    pub split_marker: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileRenameConfig {
    pub folder_prefix: Option<String>,
    pub candidate_suffixes: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileTableConfig {
    pub base_dir: Option<String>,
    pub descriptions: Option<String>,
    pub sizes: Option<String>,
    pub reference_dir: Option<String>,
    pub output: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub split: Option<FileSplitConfig>,
    pub rename: Option<FileRenameConfig>,
    pub table: Option<FileTableConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        if !path.exists() {
            return Err(CliError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn from_file_reads_all_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pdbkit.toml");
        fs::write(
            &path,
            r#"
            [split]
            default-input = "runs/7QR4.pdb"
            extension = "ent"
            split-marker = "_m_"

            [rename]
            folder-prefix = "job-"
            candidate-suffixes = [".pdb"]

            [table]
            base-dir = "paper"
            output = "table.tex"
            "#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        let split = config.split.unwrap();
        assert_eq!(split.default_input.as_deref(), Some("runs/7QR4.pdb"));
        assert_eq!(split.extension.as_deref(), Some("ent"));
        assert_eq!(split.split_marker.as_deref(), Some("_m_"));
        let rename = config.rename.unwrap();
        assert_eq!(rename.folder_prefix.as_deref(), Some("job-"));
        assert_eq!(rename.candidate_suffixes, Some(vec![".pdb".to_string()]));
        let table = config.table.unwrap();
        assert_eq!(table.base_dir.as_deref(), Some("paper"));
        assert!(table.descriptions.is_none());
    }

    #[test]
    fn from_file_rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pdbkit.toml");
        fs::write(&path, "[split]\nthreads = 4\n").unwrap();

        let result = FileConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn from_file_reports_missing_file() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::NotFound(_))));
    }
}
