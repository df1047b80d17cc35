//! LaTeX rendering of the molecule test-set table.
//!
//! Cell values are inserted verbatim so that descriptions may carry their
//! own LaTeX markup.

/// Placeholder used for a cell whose value could not be looked up.
pub const MISSING_VALUE: &str = "–";

const ROW_SEPARATOR: &str = r"\hline";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub casp: String,
    pub target_id: String,
    pub molecule: String,
    pub description: String,
    pub nucleotides: String,
    pub players: String,
}

/// Renders the full `table` environment. Lines are joined with `\n` and the
/// result carries no trailing newline.
pub fn render_test_set_table(rows: &[TableRow]) -> String {
    let mut lines: Vec<String> = vec![
        r"\begin{table}[!ht]".to_string(),
        r"\begin{adjustwidth}{-2.5in}{0in}".to_string(),
        r"\centering".to_string(),
        format!(
            r"\caption{{{{\bf Test set}}. Molecules used to run the simulations. This test set contains {} molecules.}}",
            rows.len()
        ),
        r"\begin{tabular}{llllll}".to_string(),
        r"\toprule".to_string(),
        r"\textbf{CASP} & \textbf{Target ID} & \textbf{Molecule} & \textbf{Description} & \textbf{Nucleotides} & \textbf{Players} \\".to_string(),
        r"\midrule".to_string(),
    ];

    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            lines.push(ROW_SEPARATOR.to_string());
        }
        lines.push(format!(
            r"{} & {} & {} & {} & {} & {} \\",
            row.casp, row.target_id, row.molecule, row.description, row.nucleotides, row.players
        ));
    }

    lines.push(r"\bottomrule".to_string());
    lines.push(r"\end{tabular}".to_string());
    lines.push(r"\end{adjustwidth}".to_string());
    lines.push(r"\end{table}".to_string());

    lines.join("\n")
}
