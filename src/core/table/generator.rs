//! LaTeX tabular generator

use std::fmt::Write;

use super::cell::LatexCell;
use super::rule::{rules_to_latex, LatexHLine};

/// Represents a rendered table row
#[derive(Debug, Clone, Default)]
pub struct LatexRow {
    /// Cells in this row
    pub cells: Vec<LatexCell>,
    /// Horizontal lines after this row
    pub hlines_after: Vec<LatexHLine>,
}

impl LatexRow {
    /// Create a new row
    pub fn new(cells: Vec<LatexCell>, hlines_after: Vec<LatexHLine>) -> Self {
        LatexRow {
            cells,
            hlines_after,
        }
    }

    /// Total output columns covered by this row's tokens
    pub fn width(&self) -> usize {
        self.cells.iter().map(LatexCell::width).sum()
    }
}

/// Accumulates rendered rows and emits the `tabular` environment
pub struct LatexTableGenerator {
    /// Number of columns
    pub col_count: usize,
    /// Vertical rules, bordered spans and the top rule
    pub add_borders: bool,
    /// Rendered rows
    pub rows: Vec<LatexRow>,
}

impl LatexTableGenerator {
    /// Create a new generator with the given column count
    pub fn new(col_count: usize, add_borders: bool) -> Self {
        LatexTableGenerator {
            col_count,
            add_borders,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: LatexRow) {
        self.rows.push(row);
    }

    /// Generate the complete LaTeX tabular code
    pub fn generate_latex(&self) -> String {
        let mut output = String::new();

        let col_spec = self.build_column_spec();
        let _ = writeln!(output, "\\begin{{tabular}}{{{}}}", col_spec);

        if self.add_borders {
            let _ = writeln!(output, "{}", LatexHLine::full().to_latex());
        }

        for row in &self.rows {
            let cells: Vec<String> = row
                .cells
                .iter()
                .map(|cell| cell.to_latex(self.add_borders))
                .collect();
            let _ = writeln!(output, "  {} \\\\", cells.join(" & "));

            let rules = rules_to_latex(&row.hlines_after);
            if !rules.is_empty() {
                let _ = writeln!(output, "{}", rules);
            }
        }

        let _ = write!(output, "\\end{{tabular}}");

        output
    }

    /// Build the column specification string (e.g., "|c|c|c|")
    fn build_column_spec(&self) -> String {
        if self.add_borders {
            let mut spec = String::from("|");
            for _ in 0..self.col_count {
                spec.push_str("c|");
            }
            spec
        } else {
            "c".repeat(self.col_count)
        }
    }
}
