//! Comparison building blocks
//!
//! - `content`: binary detection and text encoding resolution
//! - `diff`: Myers' line diff, context hunks, HTML rendering and the per-pair differ
//! - `walk`: exclusion rules, entry classification and the tree walker

pub mod content;
pub mod diff;
pub mod walk;
