//! Horizontal rules between table rows

use tracing::trace;

use super::layout::GridLayout;
use crate::core::grid::CellStatus;
use crate::utils::error::RenderResult;

/// Represents a horizontal line in a LaTeX table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatexHLine {
    /// Covered columns (1-based inclusive), `None` for the full width
    pub columns: Option<(usize, usize)>,
}

impl LatexHLine {
    /// Create a full-width horizontal line
    pub fn full() -> Self {
        LatexHLine { columns: None }
    }

    /// Create a partial horizontal line (cline)
    pub fn partial(start: usize, end: usize) -> Self {
        LatexHLine {
            columns: Some((start, end)),
        }
    }

    /// Generate LaTeX code
    pub fn to_latex(&self) -> String {
        match self.columns {
            Some((start, end)) => format!("\\cline{{{}-{}}}", start, end),
            None => "\\hline".to_string(),
        }
    }
}

/// Render a row boundary's rules as one line (empty when no rule applies)
pub fn rules_to_latex(rules: &[LatexHLine]) -> String {
    rules
        .iter()
        .map(LatexHLine::to_latex)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether the merge covering `(r + 1, c)` crosses the boundary below row `r`
fn continues_below(layout: &GridLayout<'_>, r: usize, c: usize) -> RenderResult<bool> {
    if layout.status(r + 1, c) != CellStatus::Continuation {
        return Ok(false);
    }
    let (anchor_row, _) = layout.origin(r + 1, c)?;
    Ok(anchor_row <= r + layout.rect.min_row())
}

/// Plan the rules emitted after relative row `r`
///
/// The last row and rows with no merge crossing below get a full rule.
/// Otherwise each maximal run of columns not covered from above gets a
/// `\cline`; columns inside a continuing merge get nothing.
pub fn plan_rules(layout: &GridLayout<'_>, r: usize) -> RenderResult<Vec<LatexHLine>> {
    let num_cols = layout.num_cols();
    if r + 1 >= layout.num_rows() {
        return Ok(vec![LatexHLine::full()]);
    }

    let mut continues = Vec::with_capacity(num_cols);
    for c in 0..num_cols {
        continues.push(continues_below(layout, r, c)?);
    }

    if !continues.iter().any(|&b| b) {
        return Ok(vec![LatexHLine::full()]);
    }

    let mut rules = Vec::new();
    let mut run_start: Option<usize> = None;
    for (c, &covered) in continues.iter().enumerate() {
        match (covered, run_start) {
            (false, None) => run_start = Some(c),
            (true, Some(start)) => {
                rules.push(LatexHLine::partial(start + 1, c));
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        rules.push(LatexHLine::partial(start + 1, num_cols));
    }

    trace!(row = r, segments = rules.len(), "partial rules below row");
    Ok(rules)
}
