use crate::common::file::{FileSpec, write_file, write_generated_pairs};
use crate::common::trees::{Trees, run, trees};
use dompare::areas::report::NO_DIFF_PLACEHOLDER;
use dompare::artifacts::walk::entry::Classification;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn identical_trees_produce_placeholder(trees: Trees) {
    write_file(FileSpec::new(trees.a.path().join("a.txt"), "hello\n".to_string()));
    write_file(FileSpec::new(trees.b.path().join("a.txt"), "hello\n".to_string()));

    let (summary, report, _comparison) = run(trees.request());

    assert_eq!(report, NO_DIFF_PLACEHOLDER);
    assert_eq!(summary.count(Classification::Compare), 1);
    assert_eq!(summary.identical, 1);
    assert_eq!(summary.fragments, 0);
}

#[rstest]
fn empty_trees_produce_placeholder(trees: Trees) {
    let (summary, report, _comparison) = run(trees.request());

    assert_eq!(report, NO_DIFF_PLACEHOLDER);
    assert_eq!(summary.fragments, 0);
}

#[rstest]
fn many_identical_files_produce_placeholder(trees: Trees) {
    let pairs = write_generated_pairs(trees.a.path(), trees.b.path(), 12);

    let (summary, report, _comparison) = run(trees.request());

    assert_eq!(report, NO_DIFF_PLACEHOLDER);
    assert_eq!(summary.count(Classification::Compare), pairs.len());
    assert_eq!(summary.identical, pairs.len());
}
