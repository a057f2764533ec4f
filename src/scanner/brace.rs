//! Comment scanner for brace-delimited languages (C, Java, JS/TS, Rust, ...).
//!
//! Comment openers are only recognised in [`State::Normal`], so `//` inside a
//! string, template literal or URL is never mistaken for a comment.

use crate::language::BraceDialect;
use tracing::trace;

/// Which comment kinds a scan recognises and which of them it drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BraceOptions {
    pub line_comments: bool,
    pub block_comments: bool,
    pub remove_ordinary: bool,
    pub remove_docs: bool,
    /// `'` is a character literal, lifetime or label rather than a string delimiter.
    pub char_literals: bool,
}

impl BraceOptions {
    /// Ordinary-comment pass. Doc comments survive when `preserve_docs` is set.
    pub fn comments(preserve_docs: bool) -> Self {
        BraceOptions {
            line_comments: true,
            block_comments: true,
            remove_ordinary: true,
            remove_docs: !preserve_docs,
            char_literals: false,
        }
    }

    /// Documentation pass: drops `///`, `//!`, `/** */` and `/*! */`, keeps everything else.
    pub fn docs_only() -> Self {
        BraceOptions {
            line_comments: true,
            block_comments: true,
            remove_ordinary: false,
            remove_docs: true,
            char_literals: false,
        }
    }

    /// Style sheets have no line comments and no doc comments.
    pub fn style_sheet() -> Self {
        BraceOptions {
            line_comments: false,
            block_comments: true,
            remove_ordinary: true,
            remove_docs: true,
            char_literals: false,
        }
    }

    pub fn with_dialect(mut self, dialect: BraceDialect) -> Self {
        self.char_literals = dialect == BraceDialect::CharLiterals;
        self
    }

    fn mode_for(&self, is_doc: bool) -> Mode {
        let remove = if is_doc {
            self.remove_docs
        } else {
            self.remove_ordinary
        };
        if remove {
            Mode::Drop
        } else {
            Mode::Keep
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Keep,
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Comment {
    mode: Mode,
    doc: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    SingleQuoted,
    DoubleQuoted,
    Template,
    LineComment(Comment),
    BlockComment(Comment),
}

impl State {
    fn closer(self) -> Option<char> {
        match self {
            State::SingleQuoted => Some('\''),
            State::DoubleQuoted => Some('"'),
            State::Template => Some('`'),
            _ => None,
        }
    }
}

/// Result of a scan: the rewritten text and how many documentation units were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    pub content: String,
    pub doc_units: usize,
}

pub fn strip(content: &str, options: BraceOptions) -> Stripped {
    let chars: Vec<char> = content.chars().collect();
    let mut out = String::with_capacity(content.len());
    let mut state = State::Normal;
    let mut doc_units = 0;
    // Set while only indentation separates us from a dropped `///` line on the
    // previous line; consecutive doc lines count as one unit.
    let mut doc_run_open = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        match state {
            State::LineComment(comment) => {
                if c == '\n' {
                    out.push(c);
                    doc_run_open = comment.doc && comment.mode == Mode::Drop;
                    state = State::Normal;
                } else if comment.mode == Mode::Keep {
                    out.push(c);
                }
                i += 1;
            }
            State::BlockComment(comment) => {
                if c == '*' && next == Some('/') {
                    if comment.mode == Mode::Keep {
                        out.push_str("*/");
                    }
                    state = State::Normal;
                    i += 2;
                } else {
                    if comment.mode == Mode::Keep {
                        out.push(c);
                    }
                    i += 1;
                }
            }
            State::SingleQuoted | State::DoubleQuoted | State::Template => {
                out.push(c);
                if c == '\\' {
                    if let Some(escaped) = next {
                        out.push(escaped);
                        i += 2;
                        continue;
                    }
                }
                if Some(c) == state.closer() {
                    state = State::Normal;
                }
                i += 1;
            }
            State::Normal => {
                if c == '/' && next == Some('/') && options.line_comments {
                    let doc = match chars.get(i + 2) {
                        Some('!') => true,
                        Some('/') => chars.get(i + 3) != Some(&'/'),
                        _ => false,
                    };
                    let mode = options.mode_for(doc);
                    if mode == Mode::Keep {
                        out.push_str("//");
                    } else if doc && !doc_run_open {
                        doc_units += 1;
                    }
                    state = State::LineComment(Comment { mode, doc });
                    i += 2;
                    continue;
                }

                if c == '/' && next == Some('*') && options.block_comments {
                    if !has_block_end(&chars, i + 2) {
                        trace!("Unterminated block comment at char {}, passing through", i);
                        out.extend(&chars[i..]);
                        break;
                    }
                    let doc = matches!(chars.get(i + 2), Some('*') | Some('!'))
                        && chars.get(i + 3) != Some(&'/');
                    let mode = options.mode_for(doc);
                    if mode == Mode::Keep {
                        out.push_str("/*");
                    } else if doc {
                        doc_units += 1;
                    }
                    doc_run_open = false;
                    state = State::BlockComment(Comment { mode, doc });
                    i += 2;
                    continue;
                }

                if c != ' ' && c != '\t' {
                    doc_run_open = false;
                }
                if c == '\'' && options.char_literals {
                    let end = char_literal_end(&chars, i).unwrap_or(i);
                    out.extend(&chars[i..=end]);
                    i = end + 1;
                    continue;
                }
                state = match c {
                    '\'' => State::SingleQuoted,
                    '"' => State::DoubleQuoted,
                    '`' => State::Template,
                    _ => State::Normal,
                };
                out.push(c);
                i += 1;
            }
        }
    }

    Stripped {
        content: out,
        doc_units,
    }
}

/// Index of the closing quote of a character literal opening at `start`, or
/// `None` when the quote is a lifetime, label or digit separator.
fn char_literal_end(chars: &[char], start: usize) -> Option<usize> {
    match *chars.get(start + 1)? {
        '\\' => (start + 3..chars.len().min(start + 12))
            .take_while(|&j| chars[j] != '\n')
            .find(|&j| chars[j] == '\''),
        '\n' | '\'' => None,
        _ => (chars.get(start + 2) == Some(&'\'')).then_some(start + 2),
    }
}

fn has_block_end(chars: &[char], from: usize) -> bool {
    chars
        .get(from..)
        .map(|rest| rest.windows(2).any(|w| w[0] == '*' && w[1] == '/'))
        .unwrap_or(false)
}
