//! Side-by-side HTML rendering of a line diff
//!
//! Each rendered fragment is a `<table class="diff">` followed by a legend
//! table. Fragments from one renderer carry distinct anchor ids, so any number
//! of them can share a single document.

use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, Edit, MyersDiff};
use crate::artifacts::diff::hunk::{DEFAULT_CONTEXT, Hunk};

pub const DEFAULT_TAB_SIZE: usize = 4;
pub const DEFAULT_WRAP_COLUMN: usize = 80;

pub const LEGEND_SUMMARY: &str = r#"summary="Legends""#;
/// Appended to the legend's summary attribute to hide it.
pub const LEGEND_HIDE_MARKER: &str = r#" style="display:none""#;

pub const NO_DIFFERENCES: &str = "No Differences Found";
pub const EMPTY_FILE: &str = "Empty File";

const ANCHOR_PREFIX: &str = "dompare_chg";

const STYLES: &str = r#"
        table.diff {font-family:Courier; border:medium;}
        .diff_header {background-color:#e0e0e0}
        td.diff_header {text-align:right}
        .diff_next {background-color:#c0c0c0}
        .diff_add {background-color:#aaffaa}
        .diff_chg {background-color:#ffff77}
        .diff_sub {background-color:#ffaaaa}
        table.diff + table.diff {margin-bottom:2em}
"#;

const LEGEND: &str = r#"<table class="diff" summary="Legends">
    <tr> <th colspan="2"> Legends </th> </tr>
    <tr> <td> <table border="" summary="Colors">
                  <tr><th> Colors </th> </tr>
                  <tr><td class="diff_add">&nbsp;Added&nbsp;</td></tr>
                  <tr><td class="diff_chg">Changed</td> </tr>
                  <tr><td class="diff_sub">Deleted</td> </tr>
              </table></td>
         <td> <table border="" summary="Links">
                  <tr><th colspan="2"> Links </th> </tr>
                  <tr><td>(f)irst change</td> </tr>
                  <tr><td>(n)ext change</td> </tr>
                  <tr><td>(t)op</td> </tr>
              </table></td> </tr>
</table>
"#;

/// A rendered comparison of one file pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub html: String,
    pub has_differences: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Plain,
    Added,
    Changed,
    Deleted,
}

impl Mark {
    fn class(&self) -> Option<&'static str> {
        match self {
            Mark::Plain => None,
            Mark::Added => Some("diff_add"),
            Mark::Changed => Some("diff_chg"),
            Mark::Deleted => Some("diff_sub"),
        }
    }
}

type MarkedText = Vec<(char, Mark)>;

#[derive(Debug, Clone)]
struct Side {
    number: usize,
    text: MarkedText,
}

#[derive(Debug, Clone)]
struct LinePair {
    from: Option<Side>,
    to: Option<Side>,
    changed: bool,
}

#[derive(Debug, Clone)]
pub struct HtmlDiff {
    tab_size: usize,
    wrap_column: usize,
    context: usize,
    tables: usize,
}

impl Default for HtmlDiff {
    fn default() -> Self {
        HtmlDiff::new(DEFAULT_TAB_SIZE, DEFAULT_WRAP_COLUMN)
    }
}

impl HtmlDiff {
    pub fn new(tab_size: usize, wrap_column: usize) -> Self {
        HtmlDiff {
            tab_size: tab_size.max(1),
            wrap_column: wrap_column.max(1),
            context: DEFAULT_CONTEXT,
            tables: 0,
        }
    }

    /// Renders `a` against `b`, labelling the columns with `label_a`/`label_b`.
    pub fn render(&mut self, a: &[String], b: &[String], label_a: &str, label_b: &str) -> Fragment {
        let prefix = format!("{}_{}_", ANCHOR_PREFIX, self.tables);
        self.tables += 1;

        let edits = MyersDiff::new(a, b).diff();
        let hunks = Hunk::build(&edits, self.context);
        let has_differences = !hunks.is_empty();

        let mut html = String::new();
        let first_link = if has_differences {
            format!(r##"<a href="#{prefix}0">f</a>"##)
        } else {
            "<br />".to_string()
        };

        html.push_str(&format!(
            r#"<table class="diff" id="{prefix}top" cellspacing="0" cellpadding="0" rules="groups" >"#
        ));
        html.push('\n');
        html.push_str("    <colgroup></colgroup> <colgroup></colgroup> <colgroup></colgroup>\n");
        html.push_str("    <colgroup></colgroup> <colgroup></colgroup> <colgroup></colgroup>\n");
        html.push_str(&format!(
            r#"    <thead><tr><th class="diff_next">{}</th><th colspan="2" class="diff_header">{}</th><th class="diff_next"><br /></th><th colspan="2" class="diff_header">{}</th></tr></thead>"#,
            first_link,
            escape(label_a),
            escape(label_b)
        ));
        html.push('\n');

        if has_differences {
            let mut block = 0;
            let blocks = hunks.iter().map(|hunk| count_blocks(hunk.edits())).sum::<usize>();

            for hunk in &hunks {
                html.push_str("    <tbody>\n");
                let mut previous_changed = false;
                for pair in self.pair_lines(hunk.edits()) {
                    let anchor = if pair.changed && !previous_changed {
                        let link = if block + 1 < blocks {
                            format!(r##"<a href="#{prefix}{}">n</a>"##, block + 1)
                        } else {
                            format!(r##"<a href="#{prefix}top">t</a>"##)
                        };
                        let anchor = Some((format!("{prefix}{block}"), link));
                        block += 1;
                        anchor
                    } else {
                        None
                    };
                    previous_changed = pair.changed;
                    self.write_rows(&mut html, &pair, anchor);
                }
                html.push_str("    </tbody>\n");
            }
        } else {
            let message = if a.is_empty() && b.is_empty() {
                EMPTY_FILE
            } else {
                NO_DIFFERENCES
            };
            html.push_str(&format!(
                r#"    <tbody><tr><td class="diff_next"></td><td class="diff_header"></td><td nowrap="nowrap">&nbsp;{message}&nbsp;</td><td class="diff_next"></td><td class="diff_header"></td><td nowrap="nowrap">&nbsp;{message}&nbsp;</td></tr></tbody>"#
            ));
            html.push('\n');
        }

        html.push_str("</table>\n");
        html.push_str(LEGEND);

        Fragment {
            html,
            has_differences,
        }
    }

    /// Lines up deletions with insertions of the same change run so the two
    /// sides of a replaced line share a row.
    fn pair_lines(&self, edits: &[Edit<String>]) -> Vec<LinePair> {
        let mut pairs = Vec::new();
        let mut deleted: Vec<(usize, &String)> = Vec::new();
        let mut inserted: Vec<(usize, &String)> = Vec::new();

        for edit in edits {
            match edit {
                Edit::Delete { a, value } => deleted.push((*a, value)),
                Edit::Insert { b, value } => inserted.push((*b, value)),
                Edit::Equal { a, b, value } => {
                    self.flush_changes(&mut pairs, &mut deleted, &mut inserted);
                    let text = self.expand_tabs(value);
                    pairs.push(LinePair {
                        from: Some(Side {
                            number: a + 1,
                            text: plain(&text),
                        }),
                        to: Some(Side {
                            number: b + 1,
                            text: plain(&text),
                        }),
                        changed: false,
                    });
                }
            }
        }
        self.flush_changes(&mut pairs, &mut deleted, &mut inserted);

        pairs
    }

    fn flush_changes(
        &self,
        pairs: &mut Vec<LinePair>,
        deleted: &mut Vec<(usize, &String)>,
        inserted: &mut Vec<(usize, &String)>,
    ) {
        let rows = deleted.len().max(inserted.len());
        for i in 0..rows {
            let from = deleted.get(i).map(|(a, value)| (a + 1, self.expand_tabs(value)));
            let to = inserted.get(i).map(|(b, value)| (b + 1, self.expand_tabs(value)));

            let (from, to) = match (from, to) {
                (Some((a, old)), Some((b, new))) => {
                    let (old, new) = mark_replacement(&old, &new);
                    (
                        Some(Side { number: a, text: old }),
                        Some(Side { number: b, text: new }),
                    )
                }
                (Some((a, old)), None) => (
                    Some(Side {
                        number: a,
                        text: marked(&old, Mark::Deleted),
                    }),
                    None,
                ),
                (None, Some((b, new))) => (
                    None,
                    Some(Side {
                        number: b,
                        text: marked(&new, Mark::Added),
                    }),
                ),
                (None, None) => continue,
            };

            pairs.push(LinePair {
                from,
                to,
                changed: true,
            });
        }

        deleted.clear();
        inserted.clear();
    }

    fn write_rows(&self, html: &mut String, pair: &LinePair, anchor: Option<(String, String)>) {
        let from_chunks = self.wrap(pair.from.as_ref());
        let to_chunks = self.wrap(pair.to.as_ref());
        let rows = from_chunks.len().max(to_chunks.len());

        for row in 0..rows {
            let next = match (&anchor, row) {
                (Some((id, link)), 0) => format!(r#"<td class="diff_next" id="{id}">{link}</td>"#),
                _ => r#"<td class="diff_next"></td>"#.to_string(),
            };

            html.push_str(&format!(
                "        <tr>{}{}<td class=\"diff_next\"></td>{}</tr>\n",
                next,
                cells(pair.from.as_ref(), from_chunks.get(row), row),
                cells(pair.to.as_ref(), to_chunks.get(row), row),
            ));
        }
    }

    fn wrap<'s>(&self, side: Option<&'s Side>) -> Vec<&'s [(char, Mark)]> {
        match side {
            Some(side) if side.text.is_empty() => vec![&side.text[..]],
            Some(side) => side.text.chunks(self.wrap_column).collect(),
            None => Vec::new(),
        }
    }

    fn expand_tabs(&self, line: &str) -> String {
        let mut expanded = String::with_capacity(line.len());
        let mut column = 0;

        for c in line.chars() {
            if c == '\t' {
                let pad = self.tab_size - column % self.tab_size;
                expanded.extend(std::iter::repeat_n(' ', pad));
                column += pad;
            } else {
                expanded.push(c);
                column += 1;
            }
        }

        expanded
    }
}

/// Wraps rendered fragments into a standalone HTML document.
pub fn document(title: &str, body: &str) -> String {
    let title = escape(title);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta http-equiv="Content-Type" content="text/html; charset=utf-8" />
    <title>{title}</title>
    <style type="text/css">{STYLES}    </style>
</head>
<body>
<h3>{title}</h3>
{body}
</body>
</html>
"#
    )
}

fn count_blocks(edits: &[Edit<String>]) -> usize {
    edits
        .iter()
        .zip(std::iter::once(None).chain(edits.iter().map(Some)))
        .filter(|(edit, previous)| {
            !edit.is_equal() && previous.is_none_or(|previous| previous.is_equal())
        })
        .count()
}

fn cells(side: Option<&Side>, chunk: Option<&&[(char, Mark)]>, row: usize) -> String {
    match (side, chunk) {
        (Some(side), Some(chunk)) => {
            let number = if row == 0 {
                side.number.to_string()
            } else {
                ">".to_string()
            };
            format!(
                r#"<td class="diff_header">{}</td><td nowrap="nowrap">{}</td>"#,
                number,
                chunk_html(chunk)
            )
        }
        _ => r#"<td class="diff_header"></td><td nowrap="nowrap"></td>"#.to_string(),
    }
}

fn chunk_html(chunk: &[(char, Mark)]) -> String {
    let mut html = String::new();
    let mut current = Mark::Plain;

    for &(c, mark) in chunk {
        if mark != current {
            if current.class().is_some() {
                html.push_str("</span>");
            }
            if let Some(class) = mark.class() {
                html.push_str(&format!(r#"<span class="{class}">"#));
            }
            current = mark;
        }
        push_escaped(&mut html, c);
    }

    if current.class().is_some() {
        html.push_str("</span>");
    }

    html
}

fn plain(text: &str) -> MarkedText {
    marked(text, Mark::Plain)
}

fn marked(text: &str, mark: Mark) -> MarkedText {
    text.chars().map(|c| (c, mark)).collect()
}

/// Marks the differing middle of a replaced line, keeping the common prefix
/// and suffix plain.
fn mark_replacement(old: &str, new: &str) -> (MarkedText, MarkedText) {
    let old = old.chars().collect::<Vec<_>>();
    let new = new.chars().collect::<Vec<_>>();

    let prefix = old
        .iter()
        .zip(new.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = old[prefix..]
        .iter()
        .rev()
        .zip(new[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let mark = |chars: &[char]| {
        chars
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if i >= prefix && i < chars.len() - suffix {
                    (c, Mark::Changed)
                } else {
                    (c, Mark::Plain)
                }
            })
            .collect::<MarkedText>()
    };

    (mark(&old), mark(&new))
}

fn push_escaped(html: &mut String, c: char) {
    match c {
        '&' => html.push_str("&amp;"),
        '<' => html.push_str("&lt;"),
        '>' => html.push_str("&gt;"),
        '"' => html.push_str("&quot;"),
        ' ' => html.push_str("&nbsp;"),
        c => html.push(c),
    }
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' ' => escaped.push(' '),
            c => push_escaped(&mut escaped, c),
        }
    }
    escaped
}
