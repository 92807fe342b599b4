//! # gridtex
//!
//! Render rectangular spreadsheet selections, merged cells included, as
//! LaTeX `table`/`tabular` markup.
//!
//! ## Features
//!
//! - **Merged Cells**: `\multirow`/`\multicolumn` spans clipped to the selection
//! - **Partial Rules**: `\cline` segments that stop at merged blocks
//! - **Safe Text**: single-pass escaping of LaTeX special characters
//! - **Pure Core**: no I/O, no shared state; render calls are independent
//! - **Data Loading**: CSV sheets and TOML render configs (`data-loading` feature)
//!
//! ## Usage Example
//!
//! ```rust
//! use gridtex::{render_table, CellValue, MergeRegion, TableOptions};
//!
//! let cells = |row: usize, col: usize| match (row, col) {
//!     (1, 1) => CellValue::text("Header"),
//!     (2, 3) => CellValue::Number(5.0),
//!     _ => CellValue::Empty,
//! };
//! let merges = vec![MergeRegion::from_range("A1:B2").unwrap()];
//! let options = TableOptions::new().with_caption("Demo").with_label("tab:demo");
//!
//! let latex = render_table(&cells, &merges, "A1:C3", &options).unwrap();
//! assert!(latex.contains(r"\multicolumn{2}{|c|}{\multirow{2}{*}{Header}}"));
//! assert!(latex.contains(r"\cline{3-3}"));
//! assert!(latex.contains(r"& 5 \\"));
//! ```

/// Core rendering modules
pub mod core;

/// Sheet and workbook access
pub mod sheet;

/// Render configuration files (feature-gated)
#[cfg(feature = "data-loading")]
pub mod config;

/// Utility modules
pub mod utils;

// Re-export core rendering API
pub use crate::core::{
    escape_latex, normalize, parse_range, render_selection, render_table, render_tabular,
    CellSource, CellStatus, CellValue, ClippedRegion, MergeRegion, Position, SelectionRect,
    TableOptions,
};

// Re-export sheet access
pub use sheet::{Sheet, SheetView, Workbook};

#[cfg(feature = "data-loading")]
pub use config::RenderConfig;

// Re-export utilities
pub use utils::error::{RenderError, RenderResult};
