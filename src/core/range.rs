//! Range expression parsing
//!
//! Converts spreadsheet-style ranges such as `A1:E6` into a 1-based,
//! inclusive [`SelectionRect`], and back.
//!
//! # Example
//!
//! ```rust
//! use gridtex::core::range::parse_range;
//!
//! let rect = parse_range("A1:E6").unwrap();
//! assert_eq!((rect.min_row(), rect.max_row()), (1, 6));
//! assert_eq!((rect.min_col(), rect.max_col()), (1, 5));
//! assert_eq!(rect.to_string(), "A1:E6");
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::{RenderError, RenderResult};

lazy_static! {
    /// A single cell reference: column letters followed by a row number
    static ref CELL_REF: Regex = Regex::new(r"^(?<letters>[A-Za-z]+)(?<numbers>[0-9]+)$").unwrap();
}

/// Most cells a single selection may render (`1024 x 1024`)
pub const MAX_SELECTION_CELLS: usize = 1 << 20;

/// Rectangular cell selection, 1-based and inclusive on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionRect {
    min_row: usize,
    max_row: usize,
    min_col: usize,
    max_col: usize,
}

impl SelectionRect {
    /// Build a selection from explicit bounds
    ///
    /// Coordinates are 1-based. A rectangle whose maximum is below its
    /// minimum on either axis has no cells and is rejected.
    pub fn new(min_row: usize, max_row: usize, min_col: usize, max_col: usize) -> RenderResult<Self> {
        if min_row == 0 || min_col == 0 {
            return Err(RenderError::invalid_range(format!(
                "R{}C{}",
                min_row, min_col
            )));
        }
        if max_row < min_row || max_col < min_col {
            return Err(RenderError::EmptySelection {
                rows: (max_row + 1).saturating_sub(min_row),
                cols: (max_col + 1).saturating_sub(min_col),
            });
        }
        Ok(SelectionRect {
            min_row,
            max_row,
            min_col,
            max_col,
        })
    }

    pub fn min_row(&self) -> usize {
        self.min_row
    }

    pub fn max_row(&self) -> usize {
        self.max_row
    }

    pub fn min_col(&self) -> usize {
        self.min_col
    }

    pub fn max_col(&self) -> usize {
        self.max_col
    }

    /// Number of rows in the selection
    pub fn num_rows(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    /// Number of columns in the selection
    pub fn num_cols(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    /// Number of cells, or `None` when the count overflows `usize`
    pub fn cell_count(&self) -> Option<usize> {
        self.num_rows().checked_mul(self.num_cols())
    }

    /// Cell count, checked against [`MAX_SELECTION_CELLS`]
    ///
    /// Parsing accepts any range (merges may legitimately cover whole
    /// columns); rendering needs one grid slot per cell, so the limit is
    /// enforced here.
    pub fn checked_cell_count(&self) -> RenderResult<usize> {
        self.cell_count()
            .filter(|&n| n <= MAX_SELECTION_CELLS)
            .ok_or(RenderError::SelectionTooLarge {
                rows: self.num_rows(),
                cols: self.num_cols(),
                limit: MAX_SELECTION_CELLS,
            })
    }

    /// Whether the absolute cell `(row, col)` lies inside the selection
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.min_row..=self.max_row).contains(&row) && (self.min_col..=self.max_col).contains(&col)
    }

    /// Convert an absolute cell to selection-relative, 0-based coordinates
    pub fn relative(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        if self.contains(row, col) {
            Some((row - self.min_row, col - self.min_col))
        } else {
            None
        }
    }
}

impl FromStr for SelectionRect {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_range(s)
    }
}

impl fmt::Display for SelectionRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            cell_name(self.min_row, self.min_col),
            cell_name(self.max_row, self.max_col)
        )
    }
}

/// Parse a range expression like `A1:E6` (column letters case-insensitive)
///
/// The end cell must not precede the start cell on either axis; reversed
/// ranges are rejected rather than swapped.
pub fn parse_range(expr: &str) -> RenderResult<SelectionRect> {
    let trimmed = expr.trim();
    let (start, end) = trimmed
        .split_once(':')
        .ok_or_else(|| RenderError::invalid_range(trimmed))?;

    let (start_row, start_col) = parse_cell(start)?;
    let (end_row, end_col) = parse_cell(end)?;

    if end_row < start_row || end_col < start_col {
        return Err(RenderError::invalid_range(trimmed));
    }

    SelectionRect::new(start_row, end_row, start_col, end_col)
}

/// Parse a single cell reference like `B12` into 1-based `(row, col)`
pub fn parse_cell(name: &str) -> RenderResult<(usize, usize)> {
    let name = name.trim();
    let caps = CELL_REF
        .captures(name)
        .ok_or_else(|| RenderError::invalid_range(name))?;

    let col = column_index(&caps["letters"]).ok_or_else(|| RenderError::invalid_range(name))?;
    let row = caps["numbers"]
        .parse::<usize>()
        .ok()
        .filter(|&row| row > 0)
        .ok_or_else(|| RenderError::invalid_range(name))?;

    Ok((row, col))
}

/// Convert column letters to a 1-based index (A -> 1, Z -> 26, AA -> 27)
///
/// Returns `None` on empty input, non-letters, or overflow.
pub fn column_index(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    let mut acc = 0usize;
    for b in letters.bytes() {
        if !b.is_ascii_alphabetic() {
            return None;
        }
        let digit = (b.to_ascii_uppercase() - b'A') as usize + 1;
        acc = acc.checked_mul(26)?.checked_add(digit)?;
    }
    Some(acc)
}

/// Convert a 1-based column index to letters (1 -> A, 26 -> Z, 27 -> AA)
pub fn column_letters(col: usize) -> String {
    let mut result = String::new();
    let mut n = col;
    while n > 0 {
        n -= 1;
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    result
}

/// Format a 1-based cell as `A1` notation
pub fn cell_name(row: usize, col: usize) -> String {
    format!("{}{}", column_letters(col), row)
}
