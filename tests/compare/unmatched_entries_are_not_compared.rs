use crate::common::file::{FileSpec, create_directory, write_file};
use crate::common::trees::{Trees, run, trees};
use dompare::areas::report::NO_DIFF_PLACEHOLDER;
use dompare::artifacts::walk::entry::Classification;
use dompare::artifacts::walk::request::CompareRequest;
use dompare::commands::compare::CompareSummary;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn directory_missing_in_second_tree_is_skipped_whole(trees: Trees) {
    write_file(FileSpec::new(trees.a.path().join("sub/x.txt"), "x\n".to_string()));
    write_file(FileSpec::new(trees.a.path().join("sub/y.txt"), "y\n".to_string()));

    let (summary, report, _comparison) = run(trees.request());

    assert_eq!(summary.count(Classification::SkipUnmatched), 1);
    assert_eq!(summary.count(Classification::Compare), 0);
    assert_eq!(report, NO_DIFF_PLACEHOLDER);
}

#[rstest]
fn entries_only_in_second_tree_are_ignored(trees: Trees) {
    write_file(FileSpec::new(trees.b.path().join("only-b.txt"), "b\n".to_string()));
    write_file(FileSpec::new(trees.b.path().join("extra/z.txt"), "z\n".to_string()));

    let (summary, report, _comparison) = run(trees.request());

    assert_eq!(summary, CompareSummary::default());
    assert_eq!(report, NO_DIFF_PLACEHOLDER);
}

#[rstest]
fn file_facing_a_directory_is_unmatched(trees: Trees) {
    write_file(FileSpec::new(trees.a.path().join("thing"), "file\n".to_string()));
    create_directory(&trees.b.path().join("thing"));
    create_directory(&trees.a.path().join("other"));
    write_file(FileSpec::new(trees.b.path().join("other"), "file\n".to_string()));

    let (summary, report, _comparison) = run(trees.request());

    assert_eq!(summary.count(Classification::SkipUnmatched), 2);
    assert_eq!(summary.count(Classification::Recurse), 0);
    assert_eq!(report, NO_DIFF_PLACEHOLDER);
}

#[rstest]
fn matched_subdirectories_are_recursed(trees: Trees) {
    write_file(FileSpec::new(trees.a.path().join("sub/deep/x.txt"), "a\n".to_string()));
    write_file(FileSpec::new(trees.b.path().join("sub/deep/x.txt"), "b\n".to_string()));

    let (summary, _report, _comparison) = run(trees.request());

    assert_eq!(summary.count(Classification::Recurse), 2);
    assert_eq!(summary.count(Classification::Compare), 1);
    assert_eq!(summary.fragments, 1);
}

#[rstest]
fn file_root_against_directory_root_is_unmatched(trees: Trees) {
    let left = trees.a.path().join("left.txt");
    write_file(FileSpec::new(left.clone(), "a\n".to_string()));
    write_file(FileSpec::new(trees.b.path().join("left.txt"), "b\n".to_string()));

    let request = CompareRequest::new(&left, trees.b.path()).expect("Failed to build request");
    let (summary, report, _comparison) = run(request);

    assert_eq!(summary.count(Classification::SkipUnmatched), 1);
    assert_eq!(summary.count(Classification::Compare), 0);
    assert_eq!(report, NO_DIFF_PLACEHOLDER);
}
