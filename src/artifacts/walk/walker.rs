use crate::areas::tree::EntryKind;
use crate::artifacts::content::binary::is_binary;
use crate::artifacts::walk::entry::{Classification, ClassifiedEntry, TreeEntry};
use crate::artifacts::walk::exclusion::ExclusionSet;
use crate::artifacts::walk::request::CompareRequest;
use std::path::{Path, PathBuf};

enum WalkState {
    SingleFile,
    Tree(walkdir::IntoIter),
    Done,
}

/// Lazily classifies every entry reachable in tree A.
///
/// Traversal is depth-first with siblings in file name order. Tree B is only
/// ever probed at the paths tree A produces, so entries that exist only in
/// tree B are never seen.
pub struct TreeWalker<'r> {
    request: &'r CompareRequest,
    state: WalkState,
}

impl<'r> TreeWalker<'r> {
    pub fn new(request: &'r CompareRequest) -> Self {
        // a file root is one entry, whatever tree B holds at its own root
        let state = if request.tree_a.is_file() {
            WalkState::SingleFile
        } else {
            WalkState::Tree(request.tree_a.walk())
        };

        TreeWalker { request, state }
    }
}

impl Iterator for TreeWalker<'_> {
    type Item = ClassifiedEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let request = self.request;

        match &mut self.state {
            WalkState::SingleFile => {
                self.state = WalkState::Done;
                Some(single_file_entry(request))
            }
            WalkState::Tree(entries) => loop {
                let dent = match entries.next()? {
                    Ok(dent) => dent,
                    Err(err) => {
                        tracing::warn!("Skipping unreadable entry: {}", err);
                        continue;
                    }
                };

                let is_dir = dent.file_type().is_dir();
                if is_unlisted(request, dent.file_name()) {
                    tracing::debug!("Ignore {}", dent.path().display());
                    if is_dir {
                        entries.skip_current_dir();
                    }
                    continue;
                }

                let path_a = dent.path().to_path_buf();
                let relative = path_a
                    .strip_prefix(request.tree_a.path())
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|_| PathBuf::from(dent.file_name()));
                let path_b = request.tree_b.join(&relative);

                let kind_a = EntryKind::from(dent.file_type());
                let kind_b = EntryKind::resolve(&path_b);
                let classification = classify(&request.exclusions, &path_a, kind_a, kind_b);

                if is_dir && classification != Classification::Recurse {
                    entries.skip_current_dir();
                }

                return Some(ClassifiedEntry::new(
                    TreeEntry::new(relative, kind_a, kind_b),
                    path_a,
                    path_b,
                    classification,
                ));
            },
            WalkState::Done => None,
        }
    }
}

/// Names dropped from a directory listing before classification.
fn is_unlisted(request: &CompareRequest, name: &std::ffi::OsStr) -> bool {
    (request.ignore_dot && name.to_string_lossy().starts_with('.'))
        || request.exclusions.is_listed(name)
}

fn single_file_entry(request: &CompareRequest) -> ClassifiedEntry {
    let path_a = request.tree_a.path().to_path_buf();
    let path_b = request.tree_b.path().to_path_buf();
    let relative = path_a
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| path_a.clone());

    let kind_a = EntryKind::probe(&path_a);
    let kind_b = EntryKind::resolve(&path_b);
    let classification = classify(&request.exclusions, &path_a, kind_a, kind_b);

    ClassifiedEntry::new(
        TreeEntry::new(relative, kind_a, kind_b),
        path_a,
        path_b,
        classification,
    )
}

/// Applies the fixed precedence: exclusion, directory, symlink, binary,
/// unmatched, compare.
pub fn classify(
    exclusions: &ExclusionSet,
    path_a: &Path,
    kind_a: EntryKind,
    kind_b: EntryKind,
) -> Classification {
    if exclusions.excludes(path_a) {
        return Classification::SkipExcluded;
    }

    match kind_a {
        EntryKind::Directory if kind_b == EntryKind::Directory => Classification::Recurse,
        EntryKind::Directory => Classification::SkipUnmatched,
        EntryKind::Symlink => Classification::SkipSymlink,
        EntryKind::Other => Classification::SkipBinary,
        EntryKind::Missing => Classification::SkipUnmatched,
        EntryKind::File if is_binary(path_a) => Classification::SkipBinary,
        EntryKind::File if kind_b != EntryKind::File => Classification::SkipUnmatched,
        EntryKind::File => Classification::Compare,
    }
}
