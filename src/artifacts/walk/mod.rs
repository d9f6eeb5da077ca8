//! Tree traversal and matching
//!
//! - `request`: the immutable description of one comparison
//! - `exclusion`: substring-based exclusion tokens
//! - `entry`: tree entries and their classification outcomes
//! - `walker`: the lazy, depth-first walker over tree A

pub mod entry;
pub mod exclusion;
pub mod request;
pub mod walker;
