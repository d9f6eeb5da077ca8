use std::fs::FileType;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What a path is on one side of the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    /// Sockets, fifos and devices.
    Other,
    Missing,
}

impl EntryKind {
    /// Kind of `path` itself; symlinks are reported as such.
    pub fn probe(path: &Path) -> Self {
        match std::fs::symlink_metadata(path) {
            Ok(metadata) => metadata.file_type().into(),
            Err(err) => Self::from_error(path, err),
        }
    }

    /// Kind of whatever `path` points to once symlinks are followed.
    pub fn resolve(path: &Path) -> Self {
        match std::fs::metadata(path) {
            Ok(metadata) => metadata.file_type().into(),
            Err(err) => Self::from_error(path, err),
        }
    }

    fn from_error(path: &Path, err: std::io::Error) -> Self {
        if err.kind() != ErrorKind::NotFound {
            tracing::debug!("Cannot stat {}: {}", path.display(), err);
        }
        EntryKind::Missing
    }
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
            EntryKind::Symlink => "symlink",
            EntryKind::Other => "special file",
            EntryKind::Missing => "missing",
        };
        write!(f, "{label}")
    }
}

/// One side of a comparison, rooted at a directory (or a single file).
#[derive(Debug, Clone)]
pub struct Tree {
    path: Box<Path>,
}

impl Tree {
    pub fn new(path: Box<Path>) -> Self {
        Tree { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, relative: &Path) -> PathBuf {
        if relative.as_os_str().is_empty() {
            self.path.to_path_buf()
        } else {
            self.path.join(relative)
        }
    }

    pub fn is_file(&self) -> bool {
        EntryKind::resolve(&self.path) == EntryKind::File
    }

    /// Kind of `relative` in this tree, following symlinks.
    pub fn kind_of(&self, relative: &Path) -> EntryKind {
        EntryKind::resolve(&self.join(relative))
    }

    /// Depth-first listing below the root, siblings ordered by file name.
    ///
    /// Symlinks are never followed, so a linked directory shows up as a symlink
    /// entry rather than being descended into.
    pub fn walk(&self) -> walkdir::IntoIter {
        WalkDir::new(&self.path)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
    }
}
