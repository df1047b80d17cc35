use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct MoleculeRecord {
    #[serde(rename = "CASP")]
    pub casp: String,
    #[serde(rename = "Target_ID")]
    pub target_id: String,
    #[serde(rename = "Molecule")]
    pub molecule: String,
    #[serde(rename = "Description")]
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct MolSizeRecord {
    mol: String,
    length: String,
}

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

/// Loads the comma-separated molecule descriptions, keeping file order.
pub fn load_molecule_descriptions(path: &Path) -> Result<Vec<MoleculeRecord>, TableLoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| TableLoadError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    reader
        .deserialize::<MoleculeRecord>()
        .map(|result| {
            result.map_err(|e| TableLoadError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })
        })
        .collect()
}

/// Loads the `;`-separated `mol;length` table into a molecule -> length map.
/// Later rows win over earlier ones for the same molecule.
pub fn load_mol_sizes(path: &Path) -> Result<HashMap<String, String>, TableLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_path(path)
        .map_err(|e| TableLoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

    let mut sizes = HashMap::new();
    for result in reader.deserialize::<MolSizeRecord>() {
        let record = result.map_err(|e| TableLoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        sizes.insert(record.mol, record.length);
    }
    Ok(sizes)
}

/// Reads the player count from the first line of a GARN file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_player_count(path: &Path) -> Result<Option<String>, TableLoadError> {
    if !path.exists() {
        return Ok(None);
    }
    let io_err = |e| TableLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    };
    let file = File::open(path).map_err(io_err)?;
    let mut first_line = String::new();
    BufReader::new(file)
        .read_line(&mut first_line)
        .map_err(io_err)?;

    Ok(Some(first_line.trim().trim_end_matches(';').to_string()))
}
