//! Merged-cell regions and their intersection with a selection

use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use super::range::{cell_name, parse_range, SelectionRect};
use super::value::{normalize, CellSource};
use crate::utils::error::{RenderError, RenderResult};

/// A merged block as declared on the sheet (unclipped, 1-based inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRegion {
    /// Row of the cell holding the block's value
    pub anchor_row: usize,
    /// Column of the cell holding the block's value
    pub anchor_col: usize,
    pub full_min_row: usize,
    pub full_max_row: usize,
    pub full_min_col: usize,
    pub full_max_col: usize,
}

impl MergeRegion {
    /// Create a region anchored at its top-left cell
    pub fn new(min_row: usize, max_row: usize, min_col: usize, max_col: usize) -> Self {
        MergeRegion {
            anchor_row: min_row,
            anchor_col: min_col,
            full_min_row: min_row,
            full_max_row: max_row,
            full_min_col: min_col,
            full_max_col: max_col,
        }
    }

    /// Parse a region from a range expression such as `A1:B2`
    pub fn from_range(expr: &str) -> RenderResult<Self> {
        let rect = parse_range(expr)?;
        Ok(Self::from(rect))
    }

    pub fn anchor(&self) -> (usize, usize) {
        (self.anchor_row, self.anchor_col)
    }

    pub fn height(&self) -> usize {
        self.full_max_row + 1 - self.full_min_row
    }

    /// Standard rectangle overlap test against the selection
    pub fn overlaps(&self, rect: &SelectionRect) -> bool {
        !(self.full_max_row < rect.min_row()
            || self.full_min_row > rect.max_row()
            || self.full_max_col < rect.min_col()
            || self.full_min_col > rect.max_col())
    }

    /// Whether two declared regions share any cell
    pub fn intersects(&self, other: &MergeRegion) -> bool {
        !(self.full_max_row < other.full_min_row
            || self.full_min_row > other.full_max_row
            || self.full_max_col < other.full_min_col
            || self.full_min_col > other.full_max_col)
    }

    /// All absolute cells of the full extent, row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.full_min_row..=self.full_max_row)
            .flat_map(move |row| (self.full_min_col..=self.full_max_col).map(move |col| (row, col)))
    }

    /// Intersect with the selection, reading the anchor's value from `cells`
    pub fn clip<C: CellSource + ?Sized>(&self, rect: &SelectionRect, cells: &C) -> Option<ClippedRegion> {
        if !self.overlaps(rect) {
            return None;
        }

        let eff_min_row = self.full_min_row.max(rect.min_row());
        let eff_max_row = self.full_max_row.min(rect.max_row());
        let eff_min_col = self.full_min_col.max(rect.min_col());
        let eff_max_col = self.full_max_col.min(rect.max_col());

        Some(ClippedRegion {
            anchor_row: self.anchor_row,
            anchor_col: self.anchor_col,
            eff_min_row,
            eff_max_row,
            eff_min_col,
            eff_max_col,
            rowspan: eff_max_row - eff_min_row + 1,
            colspan: eff_max_col - eff_min_col + 1,
            display_value: normalize(&cells.value(self.anchor_row, self.anchor_col)),
        })
    }
}

impl From<SelectionRect> for MergeRegion {
    fn from(rect: SelectionRect) -> Self {
        MergeRegion::new(rect.min_row(), rect.max_row(), rect.min_col(), rect.max_col())
    }
}

impl fmt::Display for MergeRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            cell_name(self.full_min_row, self.full_min_col),
            cell_name(self.full_max_row, self.full_max_col)
        )
    }
}

impl FromStr for MergeRegion {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MergeRegion::from_range(s)
    }
}

/// A merge region truncated to the selection, sized for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ClippedRegion {
    /// Anchor of the originating merge (may lie outside the selection)
    pub anchor_row: usize,
    pub anchor_col: usize,
    pub eff_min_row: usize,
    pub eff_max_row: usize,
    pub eff_min_col: usize,
    pub eff_max_col: usize,
    /// Rows spanned inside the selection (>= 1)
    pub rowspan: usize,
    /// Columns spanned inside the selection (>= 1)
    pub colspan: usize,
    /// Escaped value of the anchor cell
    pub display_value: String,
}

impl ClippedRegion {
    /// Top-left cell of the clipped extent
    pub fn top_left(&self) -> (usize, usize) {
        (self.eff_min_row, self.eff_min_col)
    }

    /// Whether the absolute cell `(row, col)` lies in the clipped extent
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.eff_min_row..=self.eff_max_row).contains(&row)
            && (self.eff_min_col..=self.eff_max_col).contains(&col)
    }
}

/// Clipped regions keyed by anchor, in sheet declaration order
pub type ResolvedRegions = IndexMap<(usize, usize), ClippedRegion>;

/// Intersect every sheet merge with the selection
///
/// Spreadsheets never produce overlapping merges; when the declared list
/// contains them anyway, the first region declared wins and every later
/// region sharing a cell with it is dropped (a shared anchor included).
/// Overlap is judged on full extents, so the outcome does not depend on the
/// selection. Regions entirely outside the selection are then dropped.
pub fn resolve_regions<C: CellSource + ?Sized>(
    merges: &[MergeRegion],
    rect: &SelectionRect,
    cells: &C,
) -> ResolvedRegions {
    let mut accepted: Vec<&MergeRegion> = Vec::with_capacity(merges.len());
    let mut resolved = ResolvedRegions::new();

    for region in merges {
        if let Some(earlier) = accepted.iter().find(|earlier| earlier.intersects(region)) {
            warn!(
                region = %region,
                earlier = %earlier,
                "ignoring merge region overlapping an earlier one"
            );
            continue;
        }
        accepted.push(region);

        if let Some(clipped) = region.clip(rect, cells) {
            resolved.insert(region.anchor(), clipped);
        }
    }

    debug!(
        selection = %rect,
        declared = merges.len(),
        intersecting = resolved.len(),
        "resolved merge regions"
    );
    resolved
}
