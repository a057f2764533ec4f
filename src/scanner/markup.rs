use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("Invalid regex"));

/// Removes `<!-- ... -->` comments. An unclosed `<!--` is left alone.
pub fn strip(content: &str) -> String {
    MARKUP_COMMENT.replace_all(content, "").into_owned()
}
