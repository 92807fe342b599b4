//! Error handling for gridtex rendering
//!
//! This module provides a unified error type and result type for all
//! rendering and loading operations.

use thiserror::Error;

/// Render error type
#[derive(Error, Debug)]
pub enum RenderError {
    /// The range expression could not be parsed
    #[error("Invalid range format: '{input}'")]
    InvalidRangeFormat { input: String },

    /// The selection has no rows or no columns
    #[error("Empty selection: {rows} row(s) x {cols} column(s)")]
    EmptySelection { rows: usize, cols: usize },

    /// The selection has more cells than a single render allows
    #[error("Selection too large: {rows} row(s) x {cols} column(s) exceeds {limit} cells")]
    SelectionTooLarge {
        rows: usize,
        cols: usize,
        limit: usize,
    },

    /// The sheet reader could not provide the requested sheet
    #[error("Cannot access sheet '{sheet}'")]
    SheetAccessFailure { sheet: String },

    /// A render-time invariant was violated
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Invalid configuration value or file
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO error (for file loading)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error
    #[cfg(feature = "data-loading")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

// Convenience constructors for errors
impl RenderError {
    pub fn invalid_range(input: impl Into<String>) -> Self {
        RenderError::InvalidRangeFormat {
            input: input.into(),
        }
    }

    pub fn sheet(name: impl Into<String>) -> Self {
        RenderError::SheetAccessFailure { sheet: name.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        RenderError::Internal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        RenderError::Config {
            message: message.into(),
        }
    }

    /// Whether this error indicates a bug rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(self, RenderError::Internal { .. })
    }
}
