use crate::common::file::{FileSpec, write_file};
use crate::common::trees::{Trees, run, trees};
use crate::common::{diff_tables, visible_legends};
use dompare::artifacts::walk::entry::Classification;
use pretty_assertions::assert_eq;
use rstest::rstest;

const REWRITTEN_LINES: usize = 20_000;

fn numbered(prefix: &str) -> String {
    (0..REWRITTEN_LINES)
        .map(|i| format!("{prefix} line {i}\n"))
        .collect()
}

#[rstest]
fn large_rewrite_does_not_stop_the_walk(trees: Trees) {
    write_file(FileSpec::new(trees.a.path().join("big.txt"), numbered("left")));
    write_file(FileSpec::new(trees.b.path().join("big.txt"), numbered("right")));
    write_file(FileSpec::new(trees.a.path().join("z.txt"), "before\n".to_string()));
    write_file(FileSpec::new(trees.b.path().join("z.txt"), "after\n".to_string()));

    let (summary, report, comparison) = run(trees.request());

    assert!(comparison.report().is_finalized());
    assert_eq!(summary.count(Classification::Compare), 2);
    assert_eq!(summary.fragments, 2);
    assert_eq!(diff_tables(&report), 2);
    assert_eq!(visible_legends(&report), 1);
    assert!(report.contains("z.txt"));
    assert!(report.contains(&format!("line&nbsp;{}", REWRITTEN_LINES - 1)));
}
