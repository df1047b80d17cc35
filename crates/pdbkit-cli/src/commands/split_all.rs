use crate::cli::SplitAllArgs;
use crate::config::builder::build_split_all_settings;
use crate::config::file::FileConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use pdbkit::{engine::progress::ProgressReporter, workflows, workflows::split_all::SplitAllReport};
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: SplitAllArgs, file_config: &FileConfig) -> Result<()> {
    let settings = build_split_all_settings(&args, file_config)?;
    let extension = &settings.core_config.extension;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Scanning {:?} for .{} files", &settings.root, extension);
    let report = workflows::split_all::run(&settings.root, &settings.core_config, &reporter)?;

    if !report.failures.is_empty() {
        warn!("{} file(s) could not be split.", report.failures.len());
    }
    println!("{}", render_summary(&report, &settings.root, extension));
    Ok(())
}

fn render_summary(report: &SplitAllReport, root: &Path, extension: &str) -> String {
    if report.found == 0 {
        return format!("No .{} files found under {}", extension, root.display());
    }
    [
        String::new(),
        "Summary:".to_string(),
        format!("  Total .{} files found: {}", extension, report.found),
        format!("  Processed (had models): {}", report.processed),
        format!(
            "  Skipped (already split): {}",
            report.skipped_already_split
        ),
        format!("  Skipped (no models): {}", report.skipped_no_models),
        format!("  Failed: {}", report.failures.len()),
        "Done".to_string(),
    ]
    .join("\n")
}
