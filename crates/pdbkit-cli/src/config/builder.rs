use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{RenameSettings, SplitAllSettings, SplitSettings, TableSettings};
use crate::cli::{RenameArgs, SplitAllArgs, SplitArgs, TableArgs};
use crate::error::{CliError, Result};
use crate::utils::parser;
use pdbkit::engine::config as core_config;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the optional TOML file and layers `--set` overrides on top of it.
pub fn load_file_config(path: Option<&Path>, set_values: &[String]) -> Result<FileConfig> {
    let file_config = match path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    apply_set_values(file_config, set_values)
}

pub fn build_split_settings(args: &SplitArgs, file_config: &FileConfig) -> SplitSettings {
    let defaults = DefaultsConfig::default();
    let split_file = file_config.split.clone().unwrap_or_default();

    let input_path = args.input.clone().unwrap_or_else(|| {
        PathBuf::from(
            split_file
                .default_input
                .unwrap_or(defaults.split_default_input),
        )
    });
    SplitSettings { input_path }
}

pub fn build_split_all_settings(
    args: &SplitAllArgs,
    file_config: &FileConfig,
) -> Result<SplitAllSettings> {
    let defaults = DefaultsConfig::default();
    let split_file = file_config.split.clone().unwrap_or_default();

    let extension = args
        .extension
        .clone()
        .or(split_file.extension)
        .unwrap_or(defaults.extension);
    let split_marker = split_file.split_marker.unwrap_or(defaults.split_marker);

    let core_config = core_config::SplitAllConfigBuilder::new()
        .extension(extension)
        .split_marker(split_marker)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!(?core_config, "Resolved split-all configuration");
    Ok(SplitAllSettings {
        root: args.root.clone(),
        core_config,
    })
}

pub fn build_rename_settings(args: &RenameArgs, file_config: &FileConfig) -> Result<RenameSettings> {
    let defaults = DefaultsConfig::default();
    let rename_file = file_config.rename.clone().unwrap_or_default();

    let folder_prefix = args
        .prefix
        .clone()
        .or(rename_file.folder_prefix)
        .unwrap_or(defaults.folder_prefix);
    let candidate_suffixes = rename_file
        .candidate_suffixes
        .unwrap_or(defaults.candidate_suffixes);

    let core_config = core_config::RenameConfigBuilder::new()
        .folder_prefix(folder_prefix)
        .candidate_suffixes(candidate_suffixes)
        .dry_run(args.dry_run)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!(?core_config, "Resolved rename configuration");
    Ok(RenameSettings {
        root: args.root.clone(),
        core_config,
    })
}

pub fn build_table_settings(args: &TableArgs, file_config: &FileConfig) -> Result<TableSettings> {
    let defaults = DefaultsConfig::default();
    let table_file = file_config.table.clone().unwrap_or_default();

    let base_dir = args.base_dir.clone().unwrap_or_else(|| {
        PathBuf::from(table_file.base_dir.clone().unwrap_or(defaults.table_base_dir))
    });

    let resolve = |cli_arg: &Option<PathBuf>, file_arg: &Option<String>, default_arg: &str| {
        let path = cli_arg
            .clone()
            .or_else(|| file_arg.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(default_arg));
        base_dir.join(path)
    };

    let core_config = core_config::TableConfigBuilder::new()
        .descriptions_path(resolve(
            &args.descriptions,
            &table_file.descriptions,
            &defaults.descriptions,
        ))
        .sizes_path(resolve(&args.sizes, &table_file.sizes, &defaults.sizes))
        .reference_dir(resolve(
            &args.reference_dir,
            &table_file.reference_dir,
            &defaults.reference_dir,
        ))
        .output_path(resolve(
            &args.output,
            &table_file.output,
            &defaults.table_output,
        ))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!(?core_config, "Resolved table configuration");
    Ok(TableSettings { core_config })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_set_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
        let value_str = value.to_string();

        match key {
            "split.default-input" => {
                config.split.get_or_insert_with(Default::default).default_input = Some(value_str);
            }
            "split.extension" => {
                config.split.get_or_insert_with(Default::default).extension = Some(value_str);
            }
            "split.split-marker" => {
                config.split.get_or_insert_with(Default::default).split_marker = Some(value_str);
            }
            "rename.folder-prefix" => {
                config.rename.get_or_insert_with(Default::default).folder_prefix = Some(value_str);
            }
            "rename.candidate-suffixes" => {
                let suffixes =
                    parser::parse_list(value).map_err(|e| CliError::Config(e.to_string()))?;
                config
                    .rename
                    .get_or_insert_with(Default::default)
                    .candidate_suffixes = Some(suffixes);
            }
            "table.base-dir" => {
                config.table.get_or_insert_with(Default::default).base_dir = Some(value_str);
            }
            "table.descriptions" => {
                config.table.get_or_insert_with(Default::default).descriptions = Some(value_str);
            }
            "table.sizes" => {
                config.table.get_or_insert_with(Default::default).sizes = Some(value_str);
            }
            "table.reference-dir" => {
                config.table.get_or_insert_with(Default::default).reference_dir = Some(value_str);
            }
            "table.output" => {
                config.table.get_or_insert_with(Default::default).output = Some(value_str);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
