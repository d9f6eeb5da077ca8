use crate::areas::report::Report;
use crate::artifacts::content::encoding::read_lines;
use crate::artifacts::diff::html::{HtmlDiff, LEGEND_HIDE_MARKER, LEGEND_SUMMARY};
use std::path::Path;

/// What happened to one compared pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    Written { has_differences: bool },
    /// Identical, and identical pairs are not reported.
    Suppressed,
    /// One side could not be read or decoded.
    Unreadable,
}

/// Renders matched text files and feeds the fragments to a report.
#[derive(Debug, Default)]
pub struct FileDiffer {
    renderer: HtmlDiff,
    show_same: bool,
}

impl FileDiffer {
    pub fn new(renderer: HtmlDiff, show_same: bool) -> Self {
        FileDiffer {
            renderer,
            show_same,
        }
    }

    /// Appends zero or one fragment for `path_a` against `path_b`.
    ///
    /// Decoding problems skip the pair; only a failure to write the report is
    /// returned as an error.
    pub fn diff_files(
        &mut self,
        path_a: &Path,
        path_b: &Path,
        report: &mut Report,
    ) -> anyhow::Result<PairOutcome> {
        let (lines_a, lines_b) = match (read_lines(path_a), read_lines(path_b)) {
            (Ok(lines_a), Ok(lines_b)) => (lines_a, lines_b),
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!("Open file error: {:#}", err);
                return Ok(PairOutcome::Unreadable);
            }
        };

        let fragment = self.renderer.render(
            &lines_a,
            &lines_b,
            &path_a.display().to_string(),
            &path_b.display().to_string(),
        );

        if !self.show_same && !fragment.has_differences {
            tracing::debug!("No differences between {} and {}", path_a.display(), path_b.display());
            return Ok(PairOutcome::Suppressed);
        }

        report.append(&hide_legend(&fragment.html))?;

        Ok(PairOutcome::Written {
            has_differences: fragment.has_differences,
        })
    }
}

/// Hides every legend in `html`; the report reveals one when it is finalized.
pub fn hide_legend(html: &str) -> String {
    html.replace(
        LEGEND_SUMMARY,
        &format!("{LEGEND_SUMMARY}{LEGEND_HIDE_MARKER}"),
    )
}
