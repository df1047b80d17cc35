use pdbkit::engine::config::{RenameConfig, SplitAllConfig, TableConfig};
use std::path::PathBuf;

pub struct SplitSettings {
    pub input_path: PathBuf,
}

pub struct SplitAllSettings {
    pub root: PathBuf,
    pub core_config: SplitAllConfig,
}

pub struct RenameSettings {
    pub root: PathBuf,
    pub core_config: RenameConfig,
}

pub struct TableSettings {
    pub core_config: TableConfig,
}
