//! Line diffing and rendering
//!
//! - `diff_algorithm`: Myers' diff for line-by-line comparison
//! - `hunk`: grouping of an edit script into changes with context
//! - `html`: side-by-side HTML rendering with a legend
//! - `file_differ`: decodes a file pair, renders it and feeds the report

pub mod diff_algorithm;
pub mod file_differ;
pub mod html;
pub mod hunk;
