//! Merged-grid to LaTeX tabular generation
//!
//! Turns a classified selection into `tabular` rows, handling row spans,
//! column spans and partial rules under merged blocks.
//!
//! # Architecture
//!
//! ```text
//! GridLayout -> render_row (cells) + plan_rules (hlines) -> LatexTableGenerator
//! ```

mod cell;
mod generator;
mod layout;
mod row;
mod rule;

#[cfg(test)]
mod tests;

// Re-export public API
pub use cell::LatexCell;
pub use generator::{LatexRow, LatexTableGenerator};
pub use layout::GridLayout;
pub use row::render_row;
pub use rule::{plan_rules, rules_to_latex, LatexHLine};
