#![allow(dead_code)]

pub mod file;

use dompare::artifacts::diff::html::{LEGEND_HIDE_MARKER, LEGEND_SUMMARY};

/// Number of legend tables a reader of the report actually sees.
pub fn visible_legends(report: &str) -> usize {
    let all = report.matches(LEGEND_SUMMARY).count();
    let hidden = report
        .matches(&format!("{LEGEND_SUMMARY}{LEGEND_HIDE_MARKER}"))
        .count();

    all - hidden
}

/// Number of side-by-side tables in the report, one per compared pair.
pub fn diff_tables(report: &str) -> usize {
    report.matches(r#"<table class="diff" id=""#).count()
}
