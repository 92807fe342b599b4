//! Selection to LaTeX table rendering
//!
//! ```text
//! range -> merge clipping -> cell classification -> rows + rules -> table
//! ```

use std::fmt::Write;
use tracing::debug;

use super::grid::{CellGrid, CellStatus};
use super::merge::{resolve_regions, MergeRegion};
use super::options::TableOptions;
use super::range::{parse_range, SelectionRect};
use super::table::{plan_rules, render_row, GridLayout, LatexRow, LatexTableGenerator};
use super::value::CellSource;
use crate::utils::error::RenderResult;

/// Render the range `range_expr` of a sheet as a complete LaTeX table
///
/// # Arguments
/// * `cells` - value accessor, called with absolute 1-based `(row, col)`
/// * `merges` - every merged region declared on the sheet
/// * `range_expr` - selection such as `A1:E6`
/// * `options` - caption, label, position and borders
///
/// # Returns
/// The full `table` environment, or an error; nothing is partially written.
pub fn render_table<C: CellSource + ?Sized>(
    cells: &C,
    merges: &[MergeRegion],
    range_expr: &str,
    options: &TableOptions,
) -> RenderResult<String> {
    let rect = parse_range(range_expr)?;
    render_selection(cells, merges, &rect, options)
}

/// Render an already-parsed selection as a complete LaTeX table
pub fn render_selection<C: CellSource + ?Sized>(
    cells: &C,
    merges: &[MergeRegion],
    rect: &SelectionRect,
    options: &TableOptions,
) -> RenderResult<String> {
    let tabular = render_tabular(cells, merges, rect, options.add_borders)?;
    Ok(wrap_in_table(&tabular, options))
}

/// Render only the `tabular` environment for a selection
pub fn render_tabular<C: CellSource + ?Sized>(
    cells: &C,
    merges: &[MergeRegion],
    rect: &SelectionRect,
    add_borders: bool,
) -> RenderResult<String> {
    let regions = resolve_regions(merges, rect, cells);
    let grid = CellGrid::classify(rect, &regions)?;
    debug!(
        selection = %rect,
        rows = rect.num_rows(),
        cols = rect.num_cols(),
        anchors = grid.count(CellStatus::Anchor),
        continuations = grid.count(CellStatus::Continuation),
        "classified selection"
    );

    let layout = GridLayout::new(rect, &grid, &regions);
    let mut generator = LatexTableGenerator::new(rect.num_cols(), add_borders);
    for r in 0..layout.num_rows() {
        let row_cells = render_row(&layout, r, cells)?;
        let rules = plan_rules(&layout, r)?;
        generator.push_row(LatexRow::new(row_cells, rules));
    }

    Ok(generator.generate_latex())
}

/// Wrap a `tabular` in a `table` float with caption and label
pub fn wrap_in_table(tabular: &str, options: &TableOptions) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "\\begin{{table}}[{}]", options.position);
    let _ = writeln!(output, "\\centering");
    if !options.caption.is_empty() {
        let _ = writeln!(output, "\\caption{{{}}}", options.caption);
    }
    if !options.label.is_empty() {
        let _ = writeln!(output, "\\label{{{}}}", options.label);
    }
    let _ = writeln!(output, "{}", tabular);
    let _ = write!(output, "\\end{{table}}");

    output
}
