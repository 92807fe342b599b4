//! Span-aware rendering of a single selection row

use super::cell::LatexCell;
use super::layout::GridLayout;
use crate::core::grid::CellStatus;
use crate::core::value::{normalize, CellSource};
use crate::utils::error::RenderResult;

/// Walk relative row `r` left to right and emit its cell tokens
///
/// - `Anchor`: the region's value, wrapped in `\multirow` and/or
///   `\multicolumn` as its clipped spans require
/// - `Continuation` at the left edge of its region: an empty token as wide
///   as the region (so rows under a `\multirow` keep their column count)
/// - `Continuation` elsewhere: nothing, the span to its left covers it
/// - `Normal`: the cell's own value
pub fn render_row<C: CellSource + ?Sized>(
    layout: &GridLayout<'_>,
    r: usize,
    cells: &C,
) -> RenderResult<Vec<LatexCell>> {
    let num_cols = layout.num_cols();
    let min_col = layout.rect.min_col();
    let mut tokens = Vec::with_capacity(num_cols);
    let mut c = 0;

    while c < num_cols {
        match layout.status(r, c) {
            CellStatus::Anchor => {
                let region = layout.region_at(r, c)?;
                tokens.push(LatexCell::with_spans(
                    region.display_value.clone(),
                    region.rowspan,
                    region.colspan,
                ));
                c += region.colspan;
            }
            CellStatus::Continuation => {
                let region = layout.region_at(r, c)?;
                if c + min_col == region.eff_min_col {
                    tokens.push(LatexCell::empty_span(region.colspan));
                    c += region.colspan;
                } else {
                    c += 1;
                }
            }
            CellStatus::Normal => {
                let (row, col) = layout.absolute(r, c);
                tokens.push(LatexCell::new(normalize(&cells.value(row, col))));
                c += 1;
            }
        }
    }

    Ok(tokens)
}
