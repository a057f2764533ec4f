//! Go-style documentation: a run of `//` lines directly above a declaration.
//!
//! This pass is line oriented rather than character oriented. Comments that
//! are not attached to a declaration are left to the ordinary comment pass.

use super::brace::{self, BraceOptions};
use crate::language::BraceDialect;
use std::ops::Range;

const DECLARATION_KEYWORDS: &[&str] = &["package", "func", "type", "var", "const"];

/// Removes every doc run and returns the remaining text plus the number of runs removed.
pub fn strip_docs(content: &str) -> (String, usize) {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let runs = doc_runs(&lines);
    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;

    for run in &runs {
        out.extend(lines[cursor..run.start].iter().copied());
        cursor = run.end;
    }
    out.extend(lines[cursor..].iter().copied());

    (out, runs.len())
}

/// Removes ordinary comments. With `preserve_docs`, doc runs are copied through
/// untouched and only the text between them is scanned.
pub fn strip_comments(content: &str, preserve_docs: bool) -> String {
    let options =
        BraceOptions::comments(preserve_docs).with_dialect(BraceDialect::CharLiterals);
    if !preserve_docs {
        return brace::strip(content, options).content;
    }

    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;

    for run in doc_runs(&lines) {
        let gap: String = lines[cursor..run.start].concat();
        out.push_str(&brace::strip(&gap, options).content);
        out.extend(lines[run.clone()].iter().copied());
        cursor = run.end;
    }
    let tail: String = lines[cursor..].concat();
    out.push_str(&brace::strip(&tail, options).content);

    out
}

/// Line-index ranges of comment runs followed (after optional blank lines) by a declaration.
fn doc_runs(lines: &[&str]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !is_line_comment(lines[i]) {
            i += 1;
            continue;
        }

        let start = i;
        while i < lines.len() && is_line_comment(lines[i]) {
            i += 1;
        }

        let next_code = lines[i..].iter().find(|line| !line.trim().is_empty());
        if next_code.is_some_and(|line| starts_with_declaration(line)) {
            runs.push(start..i);
        }
    }

    runs
}

fn is_line_comment(line: &str) -> bool {
    line.trim_start().starts_with("//")
}

fn starts_with_declaration(line: &str) -> bool {
    let line = line.trim_start();
    DECLARATION_KEYWORDS.iter().any(|keyword| {
        line.strip_prefix(keyword).is_some_and(|rest| {
            !rest
                .chars()
                .next()
                .is_some_and(|c| c.is_alphanumeric() || c == '_')
        })
    })
}
