//! Command implementations
//!
//! - `compare`: walks the trees and fills the report
//! - `serve`: exposes the finished report over HTTP
//!
//! Both are methods on `Comparison`, run one after the other by the binary.

pub mod compare;
pub mod serve;
