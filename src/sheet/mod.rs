//! In-memory sheets and workbooks
//!
//! These types play the spreadsheet reader's part: they hold cell values and
//! merge declarations per named sheet and hand out read-only views that the
//! renderer consumes through [`CellSource`].
//!
//! ## Example
//!
//! ```rust
//! use gridtex::sheet::{Sheet, Workbook};
//! use gridtex::{render_table, MergeRegion, TableOptions};
//!
//! let mut sheet = Sheet::new();
//! sheet.set(1, 1, "Region");
//! sheet.set(2, 1, 42.0);
//! sheet.add_merge(MergeRegion::from_range("A1:B1").unwrap());
//!
//! let mut book = Workbook::new();
//! book.insert("Sales", sheet);
//!
//! let view = book.view("Sales", true).unwrap();
//! let latex = render_table(&view, view.merges(), "A1:B2", &TableOptions::default()).unwrap();
//! assert!(latex.contains(r"\multicolumn{2}{|c|}{Region}"));
//! ```

#[cfg(feature = "data-loading")]
pub mod loader;

use fxhash::FxHashMap;
use indexmap::IndexMap;

use crate::core::merge::MergeRegion;
use crate::core::value::{CellSource, CellValue};
use crate::utils::error::{RenderError, RenderResult};

/// A stored cell: last computed value plus optional formula text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetCell {
    pub cached: CellValue,
    pub formula: Option<String>,
}

/// A single sheet: sparse cells and merge declarations
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    cells: FxHashMap<(usize, usize), SheetCell>,
    merges: Vec<MergeRegion>,
}

impl Sheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a plain value at absolute, 1-based `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<CellValue>) {
        self.cells.insert(
            (row, col),
            SheetCell {
                cached: value.into(),
                formula: None,
            },
        );
    }

    /// Set a formula together with its last computed value
    pub fn set_formula(
        &mut self,
        row: usize,
        col: usize,
        formula: impl Into<String>,
        cached: impl Into<CellValue>,
    ) {
        self.cells.insert(
            (row, col),
            SheetCell {
                cached: cached.into(),
                formula: Some(formula.into()),
            },
        );
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&SheetCell> {
        self.cells.get(&(row, col))
    }

    pub fn add_merge(&mut self, region: MergeRegion) {
        self.merges.push(region);
    }

    pub fn merges(&self) -> &[MergeRegion] {
        &self.merges
    }

    /// Highest populated `(row, col)`, or `None` for an empty sheet
    pub fn extent(&self) -> Option<(usize, usize)> {
        let max_row = self.cells.keys().map(|&(r, _)| r).max()?;
        let max_col = self.cells.keys().map(|&(_, c)| c).max()?;
        Some((max_row, max_col))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read-only view choosing between cached values and formula text
    pub fn view(&self, show_cached_values: bool) -> SheetView<'_> {
        SheetView {
            sheet: self,
            show_cached_values,
        }
    }
}

/// Named sheets in insertion order
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: IndexMap<String, Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, sheet: Sheet) {
        self.sheets.insert(name.into(), sheet);
    }

    pub fn sheet(&self, name: &str) -> RenderResult<&Sheet> {
        self.sheets.get(name).ok_or_else(|| RenderError::sheet(name))
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }

    /// View of a named sheet; fails with `SheetAccessFailure` when missing
    pub fn view(&self, name: &str, show_cached_values: bool) -> RenderResult<SheetView<'_>> {
        Ok(self.sheet(name)?.view(show_cached_values))
    }
}

/// Borrowed, read-only sheet access for one render
#[derive(Debug, Clone, Copy)]
pub struct SheetView<'a> {
    sheet: &'a Sheet,
    show_cached_values: bool,
}

impl<'a> SheetView<'a> {
    pub fn merges(&self) -> &'a [MergeRegion] {
        self.sheet.merges()
    }

    pub fn show_cached_values(&self) -> bool {
        self.show_cached_values
    }
}

impl CellSource for SheetView<'_> {
    fn value(&self, row: usize, col: usize) -> CellValue {
        match self.sheet.cell(row, col) {
            None => CellValue::Empty,
            Some(SheetCell {
                formula: Some(formula),
                ..
            }) if !self.show_cached_values => CellValue::Text(formula.clone()),
            Some(cell) => cell.cached.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Workbook {
        let mut sheet = Sheet::new();
        sheet.set(1, 1, "Item");
        sheet.set(1, 2, 3.0);
        sheet.set_formula(2, 2, "=B1*2", 6.0);
        let mut book = Workbook::new();
        book.insert("Sheet1", sheet);
        book
    }

    #[test]
    fn test_missing_sheet() {
        let book = sample();
        match book.view("Nope", true) {
            Err(RenderError::SheetAccessFailure { sheet }) => assert_eq!(sheet, "Nope"),
            other => panic!("expected SheetAccessFailure, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_cached_values() {
        let book = sample();
        let view = book.view("Sheet1", true).unwrap();
        assert_eq!(view.value(2, 2), CellValue::Number(6.0));
        assert_eq!(view.value(1, 1), CellValue::text("Item"));
        assert_eq!(view.value(9, 9), CellValue::Empty);
    }

    #[test]
    fn test_formula_text() {
        let book = sample();
        let view = book.view("Sheet1", false).unwrap();
        assert_eq!(view.value(2, 2), CellValue::text("=B1*2"));
        // Plain values are unaffected
        assert_eq!(view.value(1, 2), CellValue::Number(3.0));
    }

    #[test]
    fn test_extent_and_names() {
        let book = sample();
        assert_eq!(book.sheet("Sheet1").unwrap().extent(), Some((2, 2)));
        assert_eq!(book.sheet_names().collect::<Vec<_>>(), vec!["Sheet1"]);
        assert_eq!(Sheet::new().extent(), None);
    }
}
