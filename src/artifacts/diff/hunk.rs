use crate::artifacts::diff::diff_algorithm::Edit;

/// Unchanged lines kept around each change.
pub const DEFAULT_CONTEXT: usize = 5;

/// A run of edits containing at least one change plus its surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    edits: Vec<Edit<T>>,
}

impl<T: Clone> Hunk<T> {
    /// Groups an edit script into hunks.
    ///
    /// Changes separated by at most `2 * context` unchanged lines end up in the
    /// same hunk, so context is never shown twice.
    pub fn build(edits: &[Edit<T>], context: usize) -> Vec<Hunk<T>> {
        let mut changes = edits
            .iter()
            .enumerate()
            .filter(|(_, edit)| !edit.is_equal())
            .map(|(i, _)| i);

        let Some(first) = changes.next() else {
            return Vec::new();
        };

        let last = edits.len() - 1;
        let mut ranges = vec![(first.saturating_sub(context), (first + context).min(last))];

        for i in changes {
            let lo = i.saturating_sub(context);
            let hi = (i + context).min(last);

            match ranges.last_mut() {
                Some((_, end)) if lo <= *end + 1 => *end = hi,
                _ => ranges.push((lo, hi)),
            }
        }

        ranges
            .into_iter()
            .map(|(start, end)| Hunk {
                edits: edits[start..=end].to_vec(),
            })
            .collect()
    }
}

impl<T> Hunk<T> {
    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }
}
