use crate::core::naming::extract_pdb_id;
use crate::engine::config::RenameConfig;
use crate::engine::error::EngineError;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoIdFound,
    AlreadyNamed(String),
    Error(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoIdFound => write!(f, "no id found"),
            SkipReason::AlreadyNamed(id) => write!(f, "already named {}", id),
            SkipReason::Error(msg) => write!(f, "error: {}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedFolder {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFolder {
    pub name: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    pub renamed: Vec<RenamedFolder>,
    pub skipped: Vec<SkippedFolder>,
}

/// Renames every `<prefix>*` folder directly under `root` after the PDB
/// identifier found in its files.
///
/// Folders are visited in name order. When the target name is taken by
/// another folder, `_2`, `_3`, ... are appended until a free name is found.
/// With `dry_run` set, the report describes the renames without touching the
/// filesystem.
#[instrument(skip_all, name = "rename_workflow", fields(root = %root.display()))]
pub fn run(root: &Path, config: &RenameConfig) -> Result<RenameReport, EngineError> {
    if !root.is_dir() {
        return Err(EngineError::NotFound(root.to_path_buf()));
    }

    let mut folders: Vec<(String, PathBuf)> = fs::read_dir(root)
        .map_err(|e| EngineError::io(root, e))?
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            name.starts_with(&config.folder_prefix)
                .then(|| (name, entry.path()))
        })
        .collect();
    folders.sort();
    info!("Found {} folder(s) to inspect.", folders.len());

    let mut report = RenameReport::default();
    let mut claimed: HashSet<PathBuf> = HashSet::new();

    for (name, dir) in folders {
        let Some(pdb_id) = find_pdb_id(&dir, &config.candidate_suffixes) else {
            debug!("No PDB id found in {:?}.", &dir);
            report.skipped.push(SkippedFolder {
                name,
                reason: SkipReason::NoIdFound,
            });
            continue;
        };

        let mut target = root.join(&pdb_id);
        if is_taken(&target, &claimed) {
            if is_same_dir(&target, &dir) {
                report.skipped.push(SkippedFolder {
                    name,
                    reason: SkipReason::AlreadyNamed(pdb_id),
                });
                continue;
            }
            target = next_free_target(root, &pdb_id, &claimed);
        }

        let target_name = target
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if config.dry_run {
            info!("Would rename {:?} -> {:?}.", &dir, &target);
        } else if let Err(e) = fs::rename(&dir, &target) {
            warn!("Failed to rename {:?} -> {:?}: {}", &dir, &target, e);
            report.skipped.push(SkippedFolder {
                name,
                reason: SkipReason::Error(e.to_string()),
            });
            continue;
        } else {
            info!("Renamed {:?} -> {:?}.", &dir, &target);
        }

        claimed.insert(target);
        report.renamed.push(RenamedFolder {
            from: name,
            to: target_name,
        });
    }

    Ok(report)
}

/// Searches `dir` for the first file, suffix by suffix, whose name starts
/// with a PDB identifier.
pub fn find_pdb_id(dir: &Path, suffixes: &[String]) -> Option<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot read directory {:?}: {}", dir, e);
            return None;
        }
    };
    let mut names: Vec<String> = entries
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();

    suffixes.iter().find_map(|suffix| {
        names
            .iter()
            .filter(|name| name.ends_with(suffix.as_str()))
            .find_map(|name| extract_pdb_id(name))
            .map(str::to_string)
    })
}

fn is_taken(target: &Path, claimed: &HashSet<PathBuf>) -> bool {
    target.exists() || claimed.contains(target)
}

fn is_same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn next_free_target(root: &Path, pdb_id: &str, claimed: &HashSet<PathBuf>) -> PathBuf {
    (2..)
        .map(|n| root.join(format!("{}_{}", pdb_id, n)))
        .find(|candidate| !is_taken(candidate, claimed))
        .unwrap_or_else(|| root.join(pdb_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make_folder(root: &Path, name: &str, files: &[&str]) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        for file in files {
            fs::write(dir.join(file), "").unwrap();
        }
    }

    #[test]
    fn find_pdb_id_respects_suffix_priority() {
        let dir = tempdir().unwrap();
        make_folder(dir.path(), "f", &["AAAA-log.txt", "BBBB.pdb"]);

        let suffixes = RenameConfig::default().candidate_suffixes;
        assert_eq!(
            find_pdb_id(&dir.path().join("f"), &suffixes),
            Some("BBBB".to_string())
        );
    }

    #[test]
    fn find_pdb_id_falls_back_to_later_suffixes() {
        let dir = tempdir().unwrap();
        make_folder(dir.path(), "f", &["x.pdb", "7QR4.pdb-blocks.txt"]);

        let suffixes = RenameConfig::default().candidate_suffixes;
        assert_eq!(
            find_pdb_id(&dir.path().join("f"), &suffixes),
            Some("7QR4".to_string())
        );
    }

    #[test]
    fn renames_matching_folders_and_skips_unidentified() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        make_folder(root, "rnacomposer-001", &["7QR4.pdb"]);
        make_folder(root, "rnacomposer-002", &["readme.md"]);
        make_folder(root, "other", &["8TJX.pdb"]);

        let report = run(root, &RenameConfig::default()).unwrap();

        assert_eq!(
            report.renamed,
            vec![RenamedFolder {
                from: "rnacomposer-001".into(),
                to: "7QR4".into()
            }]
        );
        assert_eq!(
            report.skipped,
            vec![SkippedFolder {
                name: "rnacomposer-002".into(),
                reason: SkipReason::NoIdFound
            }]
        );
        assert!(root.join("7QR4/7QR4.pdb").exists());
        assert!(root.join("other").exists());
    }

    #[test]
    fn collisions_get_numeric_suffixes() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("7QR4")).unwrap();
        make_folder(root, "rnacomposer-a", &["7QR4.pdb"]);
        make_folder(root, "rnacomposer-b", &["7QR4-log.txt"]);

        let report = run(root, &RenameConfig::default()).unwrap();

        let targets: Vec<_> = report.renamed.iter().map(|r| r.to.as_str()).collect();
        assert_eq!(targets, vec!["7QR4_2", "7QR4_3"]);
        assert!(root.join("7QR4_2").is_dir());
        assert!(root.join("7QR4_3").is_dir());
    }

    #[test]
    fn dry_run_leaves_folders_untouched_but_plans_unique_targets() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        make_folder(root, "rnacomposer-a", &["7QR4.pdb"]);
        make_folder(root, "rnacomposer-b", &["7QR4.pdb"]);

        let config = RenameConfig {
            dry_run: true,
            ..RenameConfig::default()
        };
        let report = run(root, &config).unwrap();

        let targets: Vec<_> = report.renamed.iter().map(|r| r.to.as_str()).collect();
        assert_eq!(targets, vec!["7QR4", "7QR4_2"]);
        assert!(root.join("rnacomposer-a").exists());
        assert!(!root.join("7QR4").exists());
    }

    #[test]
    fn folder_already_named_after_its_id_is_skipped() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        make_folder(root, "7QR4", &["7QR4.pdb"]);

        let config = RenameConfig {
            folder_prefix: "7Q".to_string(),
            ..RenameConfig::default()
        };
        let report = run(root, &config).unwrap();

        assert!(report.renamed.is_empty());
        assert_eq!(
            report.skipped,
            vec![SkippedFolder {
                name: "7QR4".into(),
                reason: SkipReason::AlreadyNamed("7QR4".into())
            }]
        );
        assert!(root.join("7QR4/7QR4.pdb").exists());
        assert!(!root.join("7QR4_2").exists());
    }

    #[cfg(unix)]
    #[test]
    fn failed_rename_is_reported_and_batch_continues() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        make_folder(root, "rnacomposer-a", &["7QR4.pdb"]);
        make_folder(root, "rnacomposer-b", &["8TJX.pdb"]);
        // A dangling link is not an existing target, but a directory cannot
        // be renamed over it.
        std::os::unix::fs::symlink(root.join("nowhere"), root.join("7QR4")).unwrap();

        let report = run(root, &RenameConfig::default()).unwrap();

        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].name, "rnacomposer-a");
        assert!(matches!(report.skipped[0].reason, SkipReason::Error(_)));
        assert!(report.skipped[0].reason.to_string().starts_with("error: "));
        assert!(root.join("rnacomposer-a").is_dir());
        assert_eq!(
            report.renamed,
            vec![RenamedFolder {
                from: "rnacomposer-b".into(),
                to: "8TJX".into()
            }]
        );
    }

    #[test]
    fn skip_reasons_render_like_console_output() {
        assert_eq!(SkipReason::NoIdFound.to_string(), "no id found");
        assert_eq!(
            SkipReason::AlreadyNamed("7QR4".into()).to_string(),
            "already named 7QR4"
        );
        assert_eq!(SkipReason::Error("boom".into()).to_string(), "error: boom");
    }

    #[test]
    fn missing_root_returns_not_found() {
        let dir = tempdir().unwrap();
        let result = run(&dir.path().join("absent"), &RenameConfig::default());
        assert!(matches!(result, Err(EngineError::NotFound(_))));
    }
}
