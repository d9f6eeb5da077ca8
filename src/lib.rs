//! Recursive directory comparison with a browsable HTML report.
//!
//! - `areas`: the filesystem-facing pieces (compared trees, report artifact)
//! - `artifacts`: classification, encoding, walking and diff rendering
//! - `commands`: the comparison run and the viewer server

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
