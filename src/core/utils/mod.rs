//! Utility helpers for the core pipeline.
//!
//! - `line_index`: byte offset to 1-based line lookups

pub mod line_index;

pub use line_index::LineIndex;
