use crate::common::file::{FileSpec, write_bytes, write_file};
use crate::common::trees::{Trees, run, trees};
use dompare::areas::report::NO_DIFF_PLACEHOLDER;
use dompare::artifacts::walk::entry::Classification;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn binary_files_are_skipped(trees: Trees) {
    write_bytes(&trees.a.path().join("img.bin"), &[0x89, b'P', b'N', b'G', 0x00, 0x01]);
    write_bytes(&trees.b.path().join("img.bin"), &[0x89, b'P', b'N', b'G', 0x00, 0x02]);

    let (summary, report, _comparison) = run(trees.request());

    assert_eq!(summary.count(Classification::SkipBinary), 1);
    assert_eq!(summary.count(Classification::Compare), 0);
    assert_eq!(report, NO_DIFF_PLACEHOLDER);
}

#[cfg(unix)]
#[rstest]
fn symlinks_are_skipped(trees: Trees) {
    write_file(FileSpec::new(trees.a.path().join("target.txt"), "same\n".to_string()));
    write_file(FileSpec::new(trees.b.path().join("target.txt"), "same\n".to_string()));
    write_file(FileSpec::new(trees.b.path().join("link.txt"), "changed\n".to_string()));
    std::os::unix::fs::symlink(
        trees.a.path().join("target.txt"),
        trees.a.path().join("link.txt"),
    )
    .expect("Failed to create symlink");

    let (summary, report, _comparison) = run(trees.request());

    assert_eq!(summary.count(Classification::SkipSymlink), 1);
    assert_eq!(summary.count(Classification::Compare), 1);
    assert_eq!(report, NO_DIFF_PLACEHOLDER);
}

#[rstest]
fn git_directories_are_never_walked(trees: Trees) {
    write_file(FileSpec::new(trees.a.path().join(".git/HEAD"), "ref: a\n".to_string()));
    write_file(FileSpec::new(trees.b.path().join(".git/HEAD"), "ref: b\n".to_string()));

    let (summary, report, _comparison) = run(trees.request());

    assert_eq!(summary.count(Classification::Compare), 0);
    assert_eq!(report, NO_DIFF_PLACEHOLDER);
}

#[rstest]
fn dot_entries_are_dropped_when_asked(trees: Trees) {
    for name in [".env", "visible.txt"] {
        write_file(FileSpec::new(trees.a.path().join(name), "x=1\n".to_string()));
        write_file(FileSpec::new(trees.b.path().join(name), "x=2\n".to_string()));
    }

    let (with_dots, _, _first) = run(trees.request());
    let (without_dots, _, _second) = run(trees.request().ignore_dot(true));

    assert_eq!(with_dots.count(Classification::Compare), 2);
    assert_eq!(without_dots.count(Classification::Compare), 1);
    assert_eq!(without_dots.fragments, 1);
}
