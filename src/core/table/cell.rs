//! Cell tokens for LaTeX table generation

/// Represents a single emitted table cell with span info
#[derive(Debug, Clone, PartialEq)]
pub struct LatexCell {
    /// Cell content (already escaped LaTeX)
    pub content: String,
    /// Number of rows this cell spans
    pub rowspan: usize,
    /// Number of columns this cell spans
    pub colspan: usize,
    /// Whether this is an empty placeholder under a row span
    pub is_placeholder: bool,
}

impl LatexCell {
    /// Create a new single cell with content
    pub fn new(content: String) -> Self {
        LatexCell {
            content,
            rowspan: 1,
            colspan: 1,
            is_placeholder: false,
        }
    }

    /// Create an empty placeholder cell (for rowspan coverage)
    pub fn placeholder() -> Self {
        LatexCell {
            content: String::new(),
            rowspan: 1,
            colspan: 1,
            is_placeholder: true,
        }
    }

    /// Create a cell with spans
    pub fn with_spans(content: String, rowspan: usize, colspan: usize) -> Self {
        LatexCell {
            content,
            rowspan: rowspan.max(1),
            colspan: colspan.max(1),
            is_placeholder: false,
        }
    }

    /// Create an empty cell spanning `colspan` columns under a row span
    pub fn empty_span(colspan: usize) -> Self {
        if colspan > 1 {
            LatexCell::with_spans(String::new(), 1, colspan)
        } else {
            LatexCell::placeholder()
        }
    }

    /// Number of output columns this token occupies
    pub fn width(&self) -> usize {
        self.colspan
    }

    /// Generate LaTeX code for this cell
    ///
    /// `\multirow` sits inside `\multicolumn` when both spans apply.
    pub fn to_latex(&self, bordered: bool) -> String {
        if self.is_placeholder {
            return String::new();
        }

        let inner = if self.rowspan > 1 {
            format!("\\multirow{{{}}}{{*}}{{{}}}", self.rowspan, self.content)
        } else {
            self.content.clone()
        };

        if self.colspan > 1 {
            let spec = if bordered { "|c|" } else { "c" };
            format!("\\multicolumn{{{}}}{{{}}}{{{}}}", self.colspan, spec, inner)
        } else {
            inner
        }
    }
}
