use crate::cli::SplitArgs;
use crate::config::builder::build_split_settings;
use crate::config::file::FileConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::line_printer;
use pdbkit::{engine::progress::ProgressReporter, workflows};
use tracing::info;

pub fn run(args: SplitArgs, file_config: &FileConfig) -> Result<()> {
    let settings = build_split_settings(&args, file_config);
    let input_path = settings.input_path;

    if !input_path.is_file() {
        return Err(CliError::NotFound(input_path));
    }

    info!("Splitting {:?}", &input_path);
    let reporter = ProgressReporter::with_callback(line_printer());
    let written = workflows::split::run(&input_path, &reporter)?;
    info!("Wrote {} model file(s).", written.len());

    println!("Done");
    Ok(())
}
