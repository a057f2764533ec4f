//! Removal of documentation comments and docstrings, independent of the
//! ordinary-comment pass.

use crate::language::{BraceDialect, Family};
use crate::scanner::brace::{self, BraceOptions};
use crate::scanner::line_doc;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// A triple-quoted string at the top of a module, after any leading comment or blank lines.
static MODULE_DOCSTRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\A((?:[ \t]*#[^\n]*\n|[ \t]*\r?\n)*)[ \t]*(?:"""(?s:.*?)"""|'''(?s:.*?)''')[ \t]*(?:\r?\n)?"#,
    )
    .expect("Invalid regex")
});

/// A triple-quoted string directly below a `def` or `class` header.
static DEFINITION_DOCSTRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?m)(^[ \t]*(?:async[ \t]+)?(?:def|class)[ \t]+\w+[^\n]*:[ \t]*(?:#[^\n]*)?\r?\n)\s*(?:"""(?s:.*?)"""|'''(?s:.*?)''')[ \t]*(?:\r?\n)?"#,
    )
    .expect("Invalid regex")
});

/// Strips documentation for `family`, returning the new text and the number
/// of documentation units removed.
pub fn strip_docstrings(content: &str, family: Family) -> (String, usize) {
    match family {
        Family::Brace(dialect) => {
            let stripped = brace::strip(content, BraceOptions::docs_only().with_dialect(dialect));
            (stripped.content, stripped.doc_units)
        }
        Family::Component => {
            let options = BraceOptions::docs_only().with_dialect(BraceDialect::Script);
            let stripped = brace::strip(content, options);
            (stripped.content, stripped.doc_units)
        }
        Family::LineDoc => line_doc::strip_docs(content),
        Family::Hash(dialect) if dialect.has_docstrings() => strip_python_docstrings(content),
        _ => (content.to_owned(), 0),
    }
}

fn strip_python_docstrings(content: &str) -> (String, usize) {
    let mut removed = 0;

    let without_module = if MODULE_DOCSTRING.is_match(content) {
        removed += 1;
        MODULE_DOCSTRING.replace(content, "$1").into_owned()
    } else {
        content.to_owned()
    };

    let definitions = DEFINITION_DOCSTRING.find_iter(&without_module).count();
    removed += definitions;
    let result = DEFINITION_DOCSTRING
        .replace_all(&without_module, "$1")
        .into_owned();

    trace!("Removed {} Python docstrings", removed);
    (result, removed)
}
