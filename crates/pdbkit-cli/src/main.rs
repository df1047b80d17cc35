mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::config::builder::load_file_config;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("pdbkit v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let file_config = load_file_config(cli.config.as_deref(), &cli.set_values)?;

    match cli.command {
        Commands::Split(args) => {
            info!("Dispatching to 'split' command.");
            commands::split::run(args, &file_config)?;
        }
        Commands::SplitAll(args) => {
            info!("Dispatching to 'split-all' command.");
            commands::split_all::run(args, &file_config)?;
        }
        Commands::Rename(args) => {
            info!("Dispatching to 'rename' command.");
            commands::rename::run(args, &file_config)?;
        }
        Commands::Table(args) => {
            info!("Dispatching to 'table' command.");
            commands::table::run(args, &file_config)?;
        }
    }

    info!("Command completed successfully.");
    Ok(())
}
