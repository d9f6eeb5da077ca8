//! Filesystem-facing components
//!
//! - `comparison`: one run, tying the request to its report
//! - `report`: the temporary HTML artifact fragments are appended to
//! - `tree`: one side of the comparison and the kind of each of its paths

pub mod comparison;
pub mod report;
pub mod tree;
