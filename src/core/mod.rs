//! Core rendering modules
//!
//! This module contains the grid-to-LaTeX pipeline:
//! - `range`: range expression parsing
//! - `merge`: merge region clipping
//! - `grid`: per-cell merge classification
//! - `value`: cell value normalization and escaping
//! - `table`: row, span and rule generation
//! - `render`: the entry points tying it together

pub mod grid;
pub mod merge;
pub mod options;
pub mod range;
pub mod render;
pub mod table;
pub mod value;

pub use grid::{CellGrid, CellStatus, OriginMap};
pub use merge::{resolve_regions, ClippedRegion, MergeRegion, ResolvedRegions};
pub use options::{Position, TableOptions};
pub use range::{parse_range, SelectionRect, MAX_SELECTION_CELLS};
pub use render::{render_selection, render_table, render_tabular, wrap_in_table};
pub use value::{escape_latex, normalize, CellSource, CellValue};
