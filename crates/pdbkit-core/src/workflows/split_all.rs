use crate::core::naming::is_split_output;
use crate::engine::config::SplitAllConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::workflows::split::{self, WrittenModel};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitAllReport {
    pub found: usize,
    pub processed: usize,
    pub skipped_already_split: usize,
    pub skipped_no_models: usize,
    pub failures: Vec<FileFailure>,
    pub written: Vec<WrittenModel>,
}

impl SplitAllReport {
    pub fn skipped(&self) -> usize {
        self.skipped_already_split + self.skipped_no_models
    }
}

/// Splits every matching file under `root`.
///
/// A `root` that does not exist or is not a directory holds no files and
/// yields an empty report.
///
/// The file list is collected before anything is written, so outputs created
/// during the run are never split again. Files whose stem contains the split
/// marker are skipped, and a failure on one file is recorded in the report
/// without stopping the batch.
#[instrument(skip_all, name = "split_all_workflow", fields(root = %root.display()))]
pub fn run(
    root: &Path,
    config: &SplitAllConfig,
    reporter: &ProgressReporter,
) -> Result<SplitAllReport, EngineError> {
    let paths = if root.is_dir() {
        find_files(root, &config.extension)?
    } else {
        warn!("{:?} is not a directory; nothing to split.", root);
        Vec::new()
    };
    let mut report = SplitAllReport {
        found: paths.len(),
        ..Default::default()
    };
    info!("Found {} .{} file(s) under {:?}.", paths.len(), config.extension, root);
    if paths.is_empty() {
        return Ok(report);
    }

    reporter.report(Progress::BatchStart {
        total_files: paths.len() as u64,
    });

    for path in paths {
        if is_split_output(&path, &config.split_marker) {
            debug!("Skipping already split file {:?}.", &path);
            report.skipped_already_split += 1;
        } else {
            match split::run(&path, reporter) {
                Ok(written) if written.is_empty() => report.skipped_no_models += 1,
                Ok(written) => {
                    report.processed += 1;
                    report.written.extend(written);
                }
                Err(e) => {
                    error!("Error processing {:?}: {}", &path, e);
                    let failure = FileFailure {
                        path,
                        message: e.to_string(),
                    };
                    reporter.report(Progress::FileFailed {
                        path: failure.path.clone(),
                        message: failure.message.clone(),
                    });
                    report.failures.push(failure);
                }
            }
        }
        reporter.report(Progress::FileDone);
    }

    reporter.report(Progress::BatchFinish);

    info!(
        "Processed {}, skipped {} already split, {} without models, {} failed.",
        report.processed,
        report.skipped_already_split,
        report.skipped_no_models,
        report.failures.len()
    );
    Ok(report)
}

/// Recursively collects the regular files under `root` with the given
/// extension, sorted by path. Unreadable subdirectories are logged and
/// skipped.
pub fn find_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, EngineError> {
    let mut found = Vec::new();
    let entries = fs::read_dir(root).map_err(|e| EngineError::io(root, e))?;
    let mut pending: Vec<PathBuf> = Vec::new();

    for entry in entries.flatten() {
        classify_entry(entry.path(), extension, &mut found, &mut pending);
    }
    while let Some(dir) = pending.pop() {
        match fs::read_dir(&dir) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    classify_entry(entry.path(), extension, &mut found, &mut pending);
                }
            }
            Err(e) => warn!("Cannot read directory {:?}: {}", &dir, e),
        }
    }

    found.sort();
    Ok(found)
}

fn classify_entry(
    path: PathBuf,
    extension: &str,
    files: &mut Vec<PathBuf>,
    dirs: &mut Vec<PathBuf>,
) {
    let is_symlink = path
        .symlink_metadata()
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if path.is_dir() {
        if !is_symlink {
            dirs.push(path);
        }
    } else if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
        files.push(path);
    }
}
