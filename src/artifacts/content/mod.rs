//! File content inspection
//!
//! - `binary`: decides whether a file is excluded as binary
//! - `encoding`: guesses the charset a text file should be decoded with

pub mod binary;
pub mod encoding;
