//! Per-cell merge classification of a selection
//!
//! Every selection-relative cell is `Normal`, the `Anchor` that renders a
//! region's span token, or a `Continuation` covered by that span. The
//! classification keeps each region's *original* anchor, so a merge whose
//! origin lies outside the selection still suppresses rules inside it.

use fxhash::FxHashMap;

use super::merge::ResolvedRegions;
use super::range::{cell_name, SelectionRect};
use crate::utils::error::{RenderError, RenderResult};

/// Merge status of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStatus {
    #[default]
    Normal,
    Anchor,
    Continuation,
}

/// Selection-relative `(row, col)` -> absolute anchor `(row, col)`
pub type OriginMap = FxHashMap<(usize, usize), (usize, usize)>;

/// Status grid and origin map for one render
#[derive(Debug, Clone)]
pub struct CellGrid {
    rows: usize,
    cols: usize,
    status: Vec<CellStatus>,
    origins: OriginMap,
}

impl CellGrid {
    /// Classify every cell of `rect` against the resolved regions
    ///
    /// `regions` must come from resolving the sheet's merges against the
    /// same `rect`, so no two of them overlap. A region's anchor cell
    /// becomes `Anchor`; when the anchor lies outside the selection the
    /// top-left cell of the clipped extent stands in for it. The rest of the
    /// clipped extent becomes `Continuation`.
    ///
    /// Fails with `SelectionTooLarge` before allocating when the selection
    /// exceeds [`MAX_SELECTION_CELLS`](super::range::MAX_SELECTION_CELLS).
    pub fn classify(rect: &SelectionRect, regions: &ResolvedRegions) -> RenderResult<Self> {
        let len = rect.checked_cell_count()?;
        let rows = rect.num_rows();
        let cols = rect.num_cols();
        let mut grid = CellGrid {
            rows,
            cols,
            status: vec![CellStatus::Normal; len],
            origins: OriginMap::default(),
        };

        for (&anchor, clipped) in regions {
            let anchor_in_view = clipped.contains(anchor.0, anchor.1);
            let effective = if anchor_in_view {
                anchor
            } else {
                clipped.top_left()
            };

            for row in clipped.eff_min_row..=clipped.eff_max_row {
                for col in clipped.eff_min_col..=clipped.eff_max_col {
                    let Some((r, c)) = rect.relative(row, col) else {
                        continue;
                    };
                    let idx = r * cols + c;
                    if grid.status[idx] != CellStatus::Normal {
                        return Err(RenderError::internal(format!(
                            "cell {} claimed by two merge regions",
                            cell_name(row, col)
                        )));
                    }
                    grid.status[idx] = if (row, col) == effective {
                        CellStatus::Anchor
                    } else {
                        CellStatus::Continuation
                    };
                    grid.origins.insert((r, c), anchor);
                }
            }
        }

        Ok(grid)
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Status at a relative position; positions outside the grid are `Normal`
    pub fn status(&self, r: usize, c: usize) -> CellStatus {
        if r < self.rows && c < self.cols {
            self.status[r * self.cols + c]
        } else {
            CellStatus::Normal
        }
    }

    /// Anchor governing a relative position, if it is merged
    pub fn origin(&self, r: usize, c: usize) -> Option<(usize, usize)> {
        self.origins.get(&(r, c)).copied()
    }

    pub fn origins(&self) -> &OriginMap {
        &self.origins
    }

    /// Count cells with the given status
    pub fn count(&self, status: CellStatus) -> usize {
        self.status.iter().filter(|&&s| s == status).count()
    }
}
