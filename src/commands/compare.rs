use crate::areas::comparison::Comparison;
use crate::artifacts::diff::file_differ::{FileDiffer, PairOutcome};
use crate::artifacts::diff::html::HtmlDiff;
use crate::artifacts::walk::entry::{Classification, ClassifiedEntry};
use crate::artifacts::walk::walker::TreeWalker;
use crate::errors::CompareError;
use std::collections::BTreeMap;

/// Tally of one run, by classification and by what happened to compared pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareSummary {
    classifications: BTreeMap<Classification, usize>,
    pub fragments: usize,
    pub identical: usize,
    pub unreadable: usize,
}

impl CompareSummary {
    pub fn record(&mut self, classification: Classification) {
        *self.classifications.entry(classification).or_default() += 1;
    }

    pub fn record_pair(&mut self, outcome: PairOutcome) {
        match outcome {
            PairOutcome::Written { has_differences } => {
                self.fragments += 1;
                if !has_differences {
                    self.identical += 1;
                }
            }
            PairOutcome::Suppressed => self.identical += 1,
            PairOutcome::Unreadable => self.unreadable += 1,
        }
    }

    pub fn count(&self, classification: Classification) -> usize {
        self.classifications
            .get(&classification)
            .copied()
            .unwrap_or_default()
    }
}

impl std::fmt::Display for CompareSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} fragment(s) written, {} identical, {} unreadable",
            self.fragments, self.identical, self.unreadable
        )?;

        for classification in Classification::ALL {
            let count = self.count(classification);
            if count > 0 {
                write!(f, ", {} {}", count, classification)?;
            }
        }

        Ok(())
    }
}

impl Comparison {
    /// Walks tree A, diffs every matched text pair into the report and
    /// finalizes it.
    ///
    /// The finalize step only runs when the walk completes; an interrupted run
    /// leaves the report as it was.
    pub fn compare(&mut self) -> anyhow::Result<CompareSummary> {
        let cancelled = self.cancel_flag();
        let (request, report) = self.parts_mut();

        if !request.is_single_file() && (request.tree_a.is_file() || request.tree_b.is_file()) {
            tracing::warn!(
                "Comparing a file with a directory: {}",
                request.caption()
            );
        }

        let mut differ = FileDiffer::new(HtmlDiff::default(), request.show_same);
        let mut summary = CompareSummary::default();

        for entry in TreeWalker::new(request) {
            if cancelled.load(std::sync::atomic::Ordering::SeqCst) {
                return Err(CompareError::Interrupted.into());
            }

            log_entry(&entry);
            summary.record(entry.classification);

            if entry.classification == Classification::Compare {
                let outcome = differ.diff_files(&entry.path_a, &entry.path_b, report)?;
                summary.record_pair(outcome);
            }
        }

        if cancelled.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(CompareError::Interrupted.into());
        }

        report.finalize()?;
        tracing::info!("Compare summary: {}", summary);

        Ok(summary)
    }
}

fn log_entry(entry: &ClassifiedEntry) {
    let path_a = entry.path_a.display();

    match entry.classification {
        Classification::Recurse => tracing::debug!("Processing dir {}", path_a),
        Classification::SkipExcluded => tracing::debug!("Ignore {}", path_a),
        Classification::SkipSymlink => tracing::debug!("Ignore symlink file {}", path_a),
        Classification::SkipBinary => tracing::debug!("Ignore binary file {}", path_a),
        Classification::SkipUnmatched => tracing::debug!(
            "Ignore single {} (no counterpart in the second tree, found {}) {}",
            entry.entry.kind_a,
            entry.entry.kind_b,
            path_a
        ),
        Classification::Compare => tracing::debug!(
            "{} {} and {}",
            entry.classification.colored_label(),
            path_a,
            entry.path_b.display()
        ),
    }
}
