use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "pdbkit - split multi-model PDB files, rename RNAComposer result folders and build the test-set LaTeX table.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S split.extension=ent
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split one multi-model PDB file into one file per MODEL/ENDMDL block.
    Split(SplitArgs),
    /// Recursively split every PDB file under a directory.
    SplitAll(SplitAllArgs),
    /// Rename RNAComposer result folders after the PDB id found in their files.
    Rename(RenameArgs),
    /// Generate the molecule test-set LaTeX table from CSV metadata.
    Table(TableArgs),
}

/// Arguments for the `split` subcommand.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Path to the PDB file to split. Defaults to `split.default-input`.
    #[arg(value_name = "PATH")]
    pub input: Option<PathBuf>,
}

/// Arguments for the `split-all` subcommand.
#[derive(Args, Debug)]
pub struct SplitAllArgs {
    /// Root directory to scan recursively.
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Override the extension of the files to split.
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,
}

/// Arguments for the `rename` subcommand.
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Directory containing the result folders.
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Override the prefix selecting the folders to rename.
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Report the planned renames without touching the filesystem.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `table` subcommand.
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Directory against which the relative input and output paths are resolved.
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Comma-separated molecule descriptions (CASP, Target_ID, Molecule, Description).
    #[arg(long, value_name = "PATH")]
    pub descriptions: Option<PathBuf>,

    /// Semicolon-separated nucleotide counts (mol;length).
    #[arg(long, value_name = "PATH")]
    pub sizes: Option<PathBuf>,

    /// Directory holding `<mol>/<mol>_GARN.csv` player-count files.
    #[arg(long, value_name = "DIR")]
    pub reference_dir: Option<PathBuf>,

    /// Output path of the generated `.tex` file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
