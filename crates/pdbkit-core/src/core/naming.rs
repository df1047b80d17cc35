use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Infix separating a source stem from the model index in split output names.
pub const MODEL_FILE_MARKER: &str = "_model_";

const MODEL_FILE_EXTENSION: &str = "pdb";

static PDB_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9]{4,6})").expect("PDB id pattern is valid"));

/// Builds `<parent>/<source_stem>_model_<index>.pdb` for a split model.
pub fn model_output_path(source: &Path, index: i64) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let file_name = format!("{stem}{MODEL_FILE_MARKER}{index}.{MODEL_FILE_EXTENSION}");
    match source.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Returns `true` when the file stem contains `marker`, i.e. the file looks
/// like the output of an earlier split.
pub fn is_split_output(path: &Path, marker: &str) -> bool {
    path.file_stem()
        .map(|s| s.to_string_lossy().contains(marker))
        .unwrap_or(false)
}

/// Extracts a leading PDB identifier (4 to 6 alphanumerics) from a file name.
///
/// Only the part before the first `.` is considered, so `7QR4.pdb`,
/// `7QR4-log.txt` and `7QR4.pdb-blocks.txt` all yield `7QR4`.
pub fn extract_pdb_id(file_name: &str) -> Option<&str> {
    let stem = file_name.split('.').next().unwrap_or(file_name);
    PDB_ID_PATTERN
        .captures(stem)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_output_path_uses_source_directory_and_stem() {
        assert_eq!(
            model_output_path(Path::new("/data/7QR4/7QR4.pdb"), 3),
            PathBuf::from("/data/7QR4/7QR4_model_3.pdb")
        );
        assert_eq!(
            model_output_path(Path::new("X.pdb"), 1),
            PathBuf::from("X_model_1.pdb")
        );
    }

    #[test]
    fn model_output_path_keeps_inner_dots_of_stem() {
        assert_eq!(
            model_output_path(Path::new("runs/a.b.pdb"), 12),
            PathBuf::from("runs/a.b_model_12.pdb")
        );
    }

    #[test]
    fn is_split_output_checks_stem_only() {
        assert!(is_split_output(Path::new("dir/X_model_1.pdb"), MODEL_FILE_MARKER));
        assert!(!is_split_output(Path::new("dir_model_/X.pdb"), MODEL_FILE_MARKER));
        assert!(!is_split_output(Path::new("X.pdb"), MODEL_FILE_MARKER));
    }

    #[test]
    fn extract_pdb_id_handles_known_candidate_names() {
        assert_eq!(extract_pdb_id("7QR4.pdb"), Some("7QR4"));
        assert_eq!(extract_pdb_id("7QR4-log.txt"), Some("7QR4"));
        assert_eq!(extract_pdb_id("7QR4.pdb-blocks.txt"), Some("7QR4"));
    }

    #[test]
    fn extract_pdb_id_takes_at_most_six_characters() {
        assert_eq!(extract_pdb_id("ABCDEFGH.pdb"), Some("ABCDEF"));
        assert_eq!(extract_pdb_id("R1107v2.pdb"), Some("R1107v"));
    }

    #[test]
    fn extract_pdb_id_rejects_short_or_symbolic_prefixes() {
        assert_eq!(extract_pdb_id("ab.pdb"), None);
        assert_eq!(extract_pdb_id("-7QR4.pdb"), None);
        assert_eq!(extract_pdb_id("7Q-R4.pdb"), None);
    }
}
