//! Utility modules
//!
//! This module contains shared helpers:
//! - Error types and result types

pub mod error;

// Re-export commonly used items
pub use error::{RenderError, RenderResult};
