use crate::cli::RenameArgs;
use crate::config::builder::build_rename_settings;
use crate::config::file::FileConfig;
use crate::error::Result;
use pdbkit::workflows;
use tracing::info;

pub fn run(args: RenameArgs, file_config: &FileConfig) -> Result<()> {
    let settings = build_rename_settings(&args, file_config)?;
    if settings.core_config.dry_run {
        info!("Dry run: no folder will be renamed.");
    }

    let report = workflows::rename::run(&settings.root, &settings.core_config)?;

    println!("Renamed:");
    for renamed in &report.renamed {
        println!("  {} -> {}", renamed.from, renamed.to);
    }
    println!("\nSkipped:");
    for skipped in &report.skipped {
        println!("  {}: {}", skipped.name, skipped.reason);
    }
    println!("\nDone");
    Ok(())
}
