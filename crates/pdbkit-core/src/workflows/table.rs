use crate::core::io::tables::{load_mol_sizes, load_molecule_descriptions, read_player_count};
use crate::core::latex::{MISSING_VALUE, TableRow, render_test_set_table};
use crate::engine::config::TableConfig;
use crate::engine::error::EngineError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub output_path: PathBuf,
    pub rows: Vec<TableRow>,
}

impl TableReport {
    pub fn molecule_count(&self) -> usize {
        self.rows.len()
    }
}

/// Joins the molecule descriptions with nucleotide counts and per-molecule
/// player counts, and writes the resulting LaTeX table.
///
/// A molecule absent from the sizes table, or without a GARN file, gets the
/// `–` placeholder in the corresponding column.
#[instrument(skip_all, name = "table_workflow")]
pub fn run(config: &TableConfig) -> Result<TableReport, EngineError> {
    for required in [&config.descriptions_path, &config.sizes_path] {
        if !required.exists() {
            return Err(EngineError::NotFound(required.clone()));
        }
    }

    let molecules = load_molecule_descriptions(&config.descriptions_path)?;
    info!(
        "Loaded {} molecule description(s) from {:?}.",
        molecules.len(),
        &config.descriptions_path
    );
    let sizes = load_mol_sizes(&config.sizes_path)?;
    debug!("Loaded {} nucleotide count(s).", sizes.len());

    let mut rows = Vec::with_capacity(molecules.len());
    for molecule in molecules {
        let nucleotides = sizes
            .get(&molecule.molecule)
            .cloned()
            .unwrap_or_else(|| MISSING_VALUE.to_string());
        let players = read_player_count(&garn_path(&config.reference_dir, &molecule.molecule))?
            .unwrap_or_else(|| MISSING_VALUE.to_string());

        rows.push(TableRow {
            casp: molecule.casp,
            target_id: molecule.target_id,
            molecule: molecule.molecule,
            description: molecule.description,
            nucleotides,
            players,
        });
    }

    let rendered = render_test_set_table(&rows);
    fs::write(&config.output_path, rendered)
        .map_err(|e| EngineError::io(&config.output_path, e))?;
    info!("Wrote test set table to {:?}.", &config.output_path);

    Ok(TableReport {
        output_path: config.output_path.clone(),
        rows,
    })
}

/// `<reference_dir>/<mol>/<mol>_GARN.csv`
pub fn garn_path(reference_dir: &Path, molecule: &str) -> PathBuf {
    reference_dir
        .join(molecule)
        .join(format!("{}_GARN.csv", molecule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config_in(base: &Path) -> TableConfig {
        TableConfig {
            descriptions_path: base.join("molecule_descriptions.csv"),
            sizes_path: base.join("mol_sizes.csv"),
            reference_dir: base.join("REFERENCE_PBD"),
            output_path: base.join("molecule_test_set_table.tex"),
        }
    }

    #[test]
    fn garn_path_nests_molecule_directory() {
        assert_eq!(
            garn_path(Path::new("REFERENCE_PBD"), "7QR4"),
            PathBuf::from("REFERENCE_PBD/7QR4/7QR4_GARN.csv")
        );
    }

    #[test]
    fn joins_sources_and_fills_placeholders() {
        let dir = tempdir().unwrap();
        let base = dir.path();
        fs::write(
            base.join("molecule_descriptions.csv"),
            "CASP,Target_ID,Molecule,Description\n15,R1107,7QR4,tRNA\n16,R1205,8TJX,riboswitch\n",
        )
        .unwrap();
        fs::write(base.join("mol_sizes.csv"), "mol;length\n7QR4;69\n").unwrap();
        fs::create_dir_all(base.join("REFERENCE_PBD/8TJX")).unwrap();
        fs::write(base.join("REFERENCE_PBD/8TJX/8TJX_GARN.csv"), "31;\n").unwrap();

        let report = run(&config_in(base)).unwrap();

        assert_eq!(report.molecule_count(), 2);
        assert_eq!(report.rows[0].nucleotides, "69");
        assert_eq!(report.rows[0].players, "–");
        assert_eq!(report.rows[1].nucleotides, "–");
        assert_eq!(report.rows[1].players, "31");

        let tex = fs::read_to_string(base.join("molecule_test_set_table.tex")).unwrap();
        assert!(tex.contains(r"15 & R1107 & 7QR4 & tRNA & 69 & – \\"));
        assert!(tex.contains(r"16 & R1205 & 8TJX & riboswitch & – & 31 \\"));
        assert!(tex.ends_with(r"\end{table}"));
    }

    #[test]
    fn missing_descriptions_file_returns_not_found() {
        let dir = tempdir().unwrap();
        let result = run(&config_in(dir.path()));
        assert!(matches!(result, Err(EngineError::NotFound(p)) if p.ends_with("molecule_descriptions.csv")));
    }
}
