//! Cell values and their LaTeX display form

use std::fmt;

/// A raw spreadsheet cell value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Canonical, unescaped display string
    ///
    /// Integral numbers drop their fractional part (`5.0` -> `5`).
    pub fn display_string(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

/// Read access to cell values by absolute, 1-based `(row, col)`
///
/// Implemented for plain closures so callers can adapt any reader.
pub trait CellSource {
    fn value(&self, row: usize, col: usize) -> CellValue;
}

impl<F> CellSource for F
where
    F: Fn(usize, usize) -> CellValue,
{
    fn value(&self, row: usize, col: usize) -> CellValue {
        self(row, col)
    }
}

/// Canonical string form of a number
///
/// Output is always positional, never exponent notation:
/// - whole values print every integer digit with no `.0` (`5.0` is `5`,
///   `-0.0` is `0`, and `1e300` is a 301-digit string)
/// - fractions print the shortest digits that round-trip (`0.1` is `0.1`,
///   `1e-7` is `0.0000001`)
/// - non-finite values are `NaN`, `inf` and `-inf`
fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return if n.is_nan() {
            "NaN".to_string()
        } else if n > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    }
    if n.fract() == 0.0 {
        // -0.0 folds to 0
        let folded = if n == 0.0 { 0.0 } else { n };
        format!("{:.0}", folded)
    } else {
        format!("{}", n)
    }
}

/// Escape sequences produced by [`escape_latex`], in match priority order
const ESCAPES: &[(char, &str)] = &[
    ('\\', "\\textbackslash{}"),
    ('&', "\\&"),
    ('%', "\\%"),
    ('$', "\\$"),
    ('#', "\\#"),
    ('_', "\\_"),
    ('{', "\\{"),
    ('}', "\\}"),
    ('~', "\\textasciitilde{}"),
    ('^', "\\textasciicircum{}"),
];

/// Escape LaTeX-significant characters in a single left-to-right pass
///
/// Each input character is mapped at most once, so replacement text is never
/// rescanned. Sequences this function itself emits (`\%`, `\textbackslash{}`,
/// ...) are copied through unchanged, which makes escaping idempotent.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if ch == '\\' {
            if let Some((_, seq)) = ESCAPES.iter().find(|(_, seq)| rest.starts_with(seq)) {
                out.push_str(seq);
                rest = &rest[seq.len()..];
                continue;
            }
        }

        match ESCAPES.iter().find(|(c, _)| *c == ch) {
            Some((_, seq)) => out.push_str(seq),
            None => out.push(ch),
        }
        rest = &rest[ch.len_utf8()..];
    }

    out
}

/// Normalize a cell value to its escaped LaTeX display string
pub fn normalize(value: &CellValue) -> String {
    escape_latex(&value.display_string())
}
