use crate::areas::tree::Tree;
use crate::artifacts::walk::exclusion::ExclusionSet;
use crate::errors::CompareError;
use std::path::{Path, PathBuf};

/// Everything one comparison run needs to know, fixed for the run.
#[derive(Debug, Clone)]
pub struct CompareRequest {
    pub tree_a: Tree,
    pub tree_b: Tree,
    pub exclusions: ExclusionSet,
    pub ignore_dot: bool,
    pub show_same: bool,
}

impl CompareRequest {
    /// Resolves both roots to absolute paths; a missing root is fatal.
    pub fn new(root_a: &Path, root_b: &Path) -> Result<Self, CompareError> {
        Ok(CompareRequest {
            tree_a: Tree::new(resolve_root(root_a)?.into_boxed_path()),
            tree_b: Tree::new(resolve_root(root_b)?.into_boxed_path()),
            exclusions: ExclusionSet::default(),
            ignore_dot: false,
            show_same: false,
        })
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn ignore_dot(mut self, ignore_dot: bool) -> Self {
        self.ignore_dot = ignore_dot;
        self
    }

    pub fn show_same(mut self, show_same: bool) -> Self {
        self.show_same = show_same;
        self
    }

    /// Both roots name regular files rather than directories.
    pub fn is_single_file(&self) -> bool {
        self.tree_a.is_file() && self.tree_b.is_file()
    }

    pub fn caption(&self) -> String {
        format!(
            "{} vs {}",
            self.tree_a.path().display(),
            self.tree_b.path().display()
        )
    }
}

fn resolve_root(path: &Path) -> Result<PathBuf, CompareError> {
    path.canonicalize()
        .map_err(|_| CompareError::MissingRoot(path.to_path_buf()))
}
