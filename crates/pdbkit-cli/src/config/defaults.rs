pub struct DefaultsConfig {
    pub split_default_input: String,
    pub extension: String,
    pub split_marker: String,
    pub folder_prefix: String,
    pub candidate_suffixes: Vec<String>,
    pub table_base_dir: String,
    pub descriptions: String,
    pub sizes: String,
    pub reference_dir: String,
    pub table_output: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            split_default_input: "7QR4.pdb".to_string(),
            extension: "pdb".to_string(),
            split_marker: "_model_".to_string(),
            folder_prefix: "rnacomposer-".to_string(),
            candidate_suffixes: vec![
                ".pdb".to_string(),
                "-log.txt".to_string(),
                ".pdb-blocks.txt".to_string(),
            ],
            table_base_dir: ".".to_string(),
            descriptions: "molecule_descriptions.csv".to_string(),
            sizes: "mol_sizes.csv".to_string(),
            reference_dir: "REFERENCE_PBD".to_string(),
            table_output: "molecule_test_set_table.tex".to_string(),
        }
    }
}
