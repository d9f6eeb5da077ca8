use crate::common::file::{FileSpec, write_file};
use crate::common::trees::{Trees, run, trees};
use crate::common::{diff_tables, visible_legends};
use dompare::artifacts::diff::html::NO_DIFFERENCES;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_same_renders_identical_pairs(trees: Trees) {
    write_file(FileSpec::new(trees.a.path().join("same.txt"), "same\n".to_string()));
    write_file(FileSpec::new(trees.b.path().join("same.txt"), "same\n".to_string()));
    write_file(FileSpec::new(trees.a.path().join("diff.txt"), "left\n".to_string()));
    write_file(FileSpec::new(trees.b.path().join("diff.txt"), "right\n".to_string()));

    let (summary, report, _comparison) = run(trees.request().show_same(true));

    assert_eq!(summary.fragments, 2);
    assert_eq!(summary.identical, 1);
    assert_eq!(diff_tables(&report), 2);
    assert_eq!(visible_legends(&report), 1);
    assert!(report.contains(NO_DIFFERENCES));
}

#[rstest]
fn identical_pairs_are_left_out_by_default(trees: Trees) {
    write_file(FileSpec::new(trees.a.path().join("same.txt"), "same\n".to_string()));
    write_file(FileSpec::new(trees.b.path().join("same.txt"), "same\n".to_string()));
    write_file(FileSpec::new(trees.a.path().join("diff.txt"), "left\n".to_string()));
    write_file(FileSpec::new(trees.b.path().join("diff.txt"), "right\n".to_string()));

    let (summary, report, _comparison) = run(trees.request());

    assert_eq!(summary.fragments, 1);
    assert_eq!(diff_tables(&report), 1);
    assert!(!report.contains(NO_DIFFERENCES));
}
