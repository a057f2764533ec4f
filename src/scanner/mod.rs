//! Lexical comment scanners, one per syntax family.
//!
//! Every scanner is a single forward pass that never fails: unterminated
//! strings or comments degrade to passing the remaining input through.

pub mod brace;
pub mod hash;
pub mod line_doc;
pub mod markup;
pub mod sql;

use crate::language::{BraceDialect, Family};
use brace::BraceOptions;

/// Removes ordinary comments for `family`. When `preserve_docs` is set,
/// documentation comments are left in place for the docstring pass to decide.
pub fn strip_comments(content: &str, family: Family, preserve_docs: bool) -> String {
    match family {
        Family::Brace(dialect) => {
            let options = BraceOptions::comments(preserve_docs).with_dialect(dialect);
            brace::strip(content, options).content
        }
        Family::LineDoc => line_doc::strip_comments(content, preserve_docs),
        Family::Hash(dialect) => hash::strip(content, dialect),
        Family::Sql => sql::strip(content),
        Family::Markup => markup::strip(content),
        Family::Component => {
            let without_markup = markup::strip(content);
            let options = BraceOptions::comments(preserve_docs).with_dialect(BraceDialect::Script);
            brace::strip(&without_markup, options).content
        }
        Family::StyleSheet => brace::strip(content, BraceOptions::style_sheet()).content,
        Family::Text | Family::Plain => content.to_owned(),
    }
}
