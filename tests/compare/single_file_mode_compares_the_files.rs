use crate::common::file::{FileSpec, write_bytes, write_file};
use crate::common::trees::{Trees, run, trees};
use crate::common::visible_legends;
use dompare::areas::report::NO_DIFF_PLACEHOLDER;
use dompare::artifacts::walk::entry::Classification;
use dompare::artifacts::walk::request::CompareRequest;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn single_file_mode_compares_the_files(trees: Trees) {
    let left = trees.a.path().join("left.cfg");
    let right = trees.b.path().join("right.cfg");
    write_file(FileSpec::new(left.clone(), "port=1\n".to_string()));
    write_file(FileSpec::new(right.clone(), "port=2\n".to_string()));
    // siblings of the given files are never looked at
    write_file(FileSpec::new(trees.a.path().join("noise.txt"), "a\n".to_string()));
    write_file(FileSpec::new(trees.b.path().join("noise.txt"), "b\n".to_string()));

    let request = CompareRequest::new(&left, &right).expect("Failed to build request");
    assert!(request.is_single_file());

    let (summary, report, _comparison) = run(request);

    assert_eq!(summary.count(Classification::Compare), 1);
    assert_eq!(summary.fragments, 1);
    assert_eq!(visible_legends(&report), 1);
    assert!(report.contains("left.cfg"));
    assert!(!report.contains("noise.txt"));
}

#[rstest]
fn single_binary_file_is_skipped(trees: Trees) {
    let left = trees.a.path().join("blob");
    let right = trees.b.path().join("blob");
    write_bytes(&left, &[0, 1, 2, 3]);
    write_bytes(&right, &[0, 1, 2, 4]);

    let request = CompareRequest::new(&left, &right).expect("Failed to build request");
    let (summary, report, _comparison) = run(request);

    assert_eq!(summary.count(Classification::SkipBinary), 1);
    assert_eq!(report, NO_DIFF_PLACEHOLDER);
}
