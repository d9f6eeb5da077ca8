use derive_new::new;
use similar::{Algorithm, DiffTag};
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Search time after which the diff settles for a coarser, still valid, script.
pub const DIFF_DEADLINE: Duration = Duration::from_secs(2);

/// One step of an edit script, with the zero-based positions of the lines it
/// touches on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { a: usize, value: T },
    Insert { b: usize, value: T },
    Equal { a: usize, b: usize, value: T },
}

impl<T> Edit<T> {
    pub fn is_equal(&self) -> bool {
        matches!(self, Edit::Equal { .. })
    }

    pub fn a_index(&self) -> Option<usize> {
        match self {
            Edit::Delete { a, .. } | Edit::Equal { a, .. } => Some(*a),
            Edit::Insert { .. } => None,
        }
    }

    pub fn b_index(&self) -> Option<usize> {
        match self {
            Edit::Insert { b, .. } | Edit::Equal { b, .. } => Some(*b),
            Edit::Delete { .. } => None,
        }
    }
}

pub trait DiffAlgorithm<T> {
    type EditScript;

    fn diff(&self) -> Self::EditScript;
}

/// Myers' diff in linear space, bounded by [`DIFF_DEADLINE`].
///
/// Within a replaced run, deletions always come before insertions.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: Eq + Hash + Ord + Clone> DiffAlgorithm<T> for MyersDiff<'_, T> {
    type EditScript = Vec<Edit<T>>;

    fn diff(&self) -> Self::EditScript {
        let deadline = Instant::now().checked_add(DIFF_DEADLINE);
        let ops = similar::capture_diff_slices_deadline(Algorithm::Myers, self.a, self.b, deadline);

        let mut edits = Vec::with_capacity(self.a.len().max(self.b.len()));
        for op in ops {
            let (tag, old, new) = op.as_tag_tuple();
            match tag {
                DiffTag::Equal => edits.extend(old.zip(new).map(|(a, b)| Edit::Equal {
                    a,
                    b,
                    value: self.a[a].clone(),
                })),
                DiffTag::Delete | DiffTag::Insert | DiffTag::Replace => {
                    edits.extend(old.map(|a| Edit::Delete {
                        a,
                        value: self.a[a].clone(),
                    }));
                    edits.extend(new.map(|b| Edit::Insert {
                        b,
                        value: self.b[b].clone(),
                    }));
                }
            }
        }

        edits
    }
}
