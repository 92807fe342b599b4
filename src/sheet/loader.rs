//! CSV sheet loading
//!
//! Record `n` of the file becomes sheet row `n` (1-based) and field `m`
//! column `m`. Numeric fields load as numbers, blank fields are left empty,
//! everything else is text. Fields starting with `=` are formulas: CSV holds
//! no computed result, so their cached value is empty and only a view with
//! `show_cached_values == false` displays them. CSV carries no merge
//! information; merges are added afterwards from the command line or a
//! render config.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::Sheet;
use crate::core::value::CellValue;
use crate::utils::error::RenderResult;

/// Load a comma-separated file into a sheet
pub fn load_csv(path: impl AsRef<Path>) -> RenderResult<Sheet> {
    load_csv_with_delimiter(path, b',')
}

/// Load a delimited file into a sheet
pub fn load_csv_with_delimiter(path: impl AsRef<Path>, delimiter: u8) -> RenderResult<Sheet> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let sheet = read_csv(file, delimiter)?;
    debug!(path = %path.display(), cells = sheet.len(), "loaded csv sheet");
    Ok(sheet)
}

/// Read delimited records from any reader into a sheet
pub fn read_csv<R: Read>(reader: R, delimiter: u8) -> RenderResult<Sheet> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut sheet = Sheet::new();
    for (row_idx, record) in rdr.records().enumerate() {
        let record = record?;
        for (col_idx, field) in record.iter().enumerate() {
            let (row, col) = (row_idx + 1, col_idx + 1);
            if is_formula(field) {
                sheet.set_formula(row, col, field.trim(), CellValue::Empty);
                continue;
            }
            let value = parse_field(field);
            if !value.is_empty() {
                sheet.set(row, col, value);
            }
        }
    }

    Ok(sheet)
}

/// Whether a raw field holds formula text such as `=SUM(A1:A3)`
pub fn is_formula(field: &str) -> bool {
    field.trim().strip_prefix('=').is_some_and(|rest| !rest.trim().is_empty())
}

/// Classify a raw field as empty, numeric or text
pub fn parse_field(field: &str) -> CellValue {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    // Rust accepts "inf"/"NaN" as floats; only digit-bearing fields are numbers
    if trimmed.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(n) = trimmed.parse::<f64>() {
            return CellValue::Number(n);
        }
    }
    CellValue::Text(field.to_string())
}
