use crate::areas::tree::EntryKind;
use colored::{ColoredString, Colorize};
use derive_new::new;
use std::path::{Path, PathBuf};

/// The decision taken for one entry of tree A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    Recurse,
    SkipSymlink,
    SkipBinary,
    SkipUnmatched,
    SkipExcluded,
    Compare,
}

impl Classification {
    pub const ALL: [Classification; 6] = [
        Classification::Recurse,
        Classification::SkipSymlink,
        Classification::SkipBinary,
        Classification::SkipUnmatched,
        Classification::SkipExcluded,
        Classification::Compare,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Classification::Recurse => "recurse",
            Classification::SkipSymlink => "skip-symlink",
            Classification::SkipBinary => "skip-binary",
            Classification::SkipUnmatched => "skip-unmatched",
            Classification::SkipExcluded => "skip-excluded",
            Classification::Compare => "compare",
        }
    }

    pub fn colored_label(&self) -> ColoredString {
        match self {
            Classification::Compare => self.label().green(),
            Classification::Recurse => self.label().normal(),
            _ => self.label().yellow(),
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A path relative to both roots, with what it is on each side.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    pub relative: PathBuf,
    pub kind_a: EntryKind,
    pub kind_b: EntryKind,
}

/// A tree entry together with its resolved paths and the walker's decision.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ClassifiedEntry {
    pub entry: TreeEntry,
    pub path_a: PathBuf,
    pub path_b: PathBuf,
    pub classification: Classification,
}

impl ClassifiedEntry {
    pub fn relative(&self) -> &Path {
        &self.entry.relative
    }
}
