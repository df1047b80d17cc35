use crate::cli::TableArgs;
use crate::config::builder::build_table_settings;
use crate::config::file::FileConfig;
use crate::error::Result;
use pdbkit::workflows;
use tracing::info;

pub fn run(args: TableArgs, file_config: &FileConfig) -> Result<()> {
    let settings = build_table_settings(&args, file_config)?;
    info!(
        "Building test set table from {:?}",
        &settings.core_config.descriptions_path
    );

    let report = workflows::table::run(&settings.core_config)?;

    println!(
        "✅ Test set table written to: {}",
        report.output_path.display()
    );
    println!("Molecules: {}", report.molecule_count());
    println!("Done");
    Ok(())
}
