//! Read-only view of one classified selection

use crate::core::grid::{CellGrid, CellStatus};
use crate::core::merge::{ClippedRegion, ResolvedRegions};
use crate::core::range::{cell_name, SelectionRect};
use crate::utils::error::{RenderError, RenderResult};

/// Selection, status grid and clipped regions of a single render
#[derive(Debug, Clone, Copy)]
pub struct GridLayout<'a> {
    pub rect: &'a SelectionRect,
    pub grid: &'a CellGrid,
    pub regions: &'a ResolvedRegions,
}

impl<'a> GridLayout<'a> {
    pub fn new(rect: &'a SelectionRect, grid: &'a CellGrid, regions: &'a ResolvedRegions) -> Self {
        GridLayout { rect, grid, regions }
    }

    pub fn num_rows(&self) -> usize {
        self.grid.num_rows()
    }

    pub fn num_cols(&self) -> usize {
        self.grid.num_cols()
    }

    pub fn status(&self, r: usize, c: usize) -> CellStatus {
        self.grid.status(r, c)
    }

    /// Absolute coordinates of a relative position
    pub fn absolute(&self, r: usize, c: usize) -> (usize, usize) {
        (r + self.rect.min_row(), c + self.rect.min_col())
    }

    /// Anchor of a merged position
    ///
    /// Every `Anchor`/`Continuation` cell has an origin by construction; a
    /// miss is reported as an internal error.
    pub fn origin(&self, r: usize, c: usize) -> RenderResult<(usize, usize)> {
        self.grid.origin(r, c).ok_or_else(|| {
            let (row, col) = self.absolute(r, c);
            RenderError::internal(format!(
                "merged cell {} has no recorded origin",
                cell_name(row, col)
            ))
        })
    }

    /// Clipped region governing a merged position
    pub fn region_at(&self, r: usize, c: usize) -> RenderResult<&'a ClippedRegion> {
        let anchor = self.origin(r, c)?;
        self.regions.get(&anchor).ok_or_else(|| {
            RenderError::internal(format!(
                "no clipped region for anchor {}",
                cell_name(anchor.0, anchor.1)
            ))
        })
    }
}
