//! Table rendering options

use std::fmt;
use std::str::FromStr;

use crate::utils::error::RenderError;

/// Float placement specifier for the `table` environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "data-loading",
    derive(serde::Deserialize),
    serde(try_from = "String")
)]
pub enum Position {
    /// `h`
    Here,
    /// `htbp`
    #[default]
    Htbp,
    /// `t`
    Top,
    /// `b`
    Bottom,
    /// `p`
    Page,
    /// `H` (float package)
    Exact,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::Here,
        Position::Htbp,
        Position::Top,
        Position::Bottom,
        Position::Page,
        Position::Exact,
    ];

    /// The specifier as written inside `\begin{table}[...]`
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Here => "h",
            Position::Htbp => "htbp",
            Position::Top => "t",
            Position::Bottom => "b",
            Position::Page => "p",
            Position::Exact => "H",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = RenderError;

    /// Case-sensitive: `h` and `H` are different specifiers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                RenderError::config(format!(
                    "unknown table position '{}' (expected one of h, htbp, t, b, p, H)",
                    s
                ))
            })
    }
}

impl TryFrom<String> for Position {
    type Error = RenderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Options for rendering a selection as a LaTeX table
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Caption text (omitted when empty)
    pub caption: String,
    /// Label for cross-referencing (omitted when empty)
    pub label: String,
    /// Float placement
    pub position: Position,
    /// Vertical rules, bordered spans and a top rule
    pub add_borders: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            caption: String::new(),
            label: String::new(),
            position: Position::Htbp,
            add_borders: true,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// No vertical rules and no top rule
    pub fn plain() -> Self {
        Self {
            add_borders: false,
            ..Default::default()
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_borders(mut self, add_borders: bool) -> Self {
        self.add_borders = add_borders;
        self
    }
}
