//! `#` comment scanner for Python, Ruby and shell scripts.

use crate::language::HashDialect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    SingleQuoted,
    DoubleQuoted,
    Backtick,
    TripleSingle,
    TripleDouble,
}

/// Removes `#` comments up to (not including) the end of line.
///
/// Triple-quoted strings are passed through whole, and a `#!` preceded only by
/// whitespace on its line is kept as a shebang. In shell a `#` only starts a
/// comment at the start of a word, so `$#` and `${#arr[@]}` survive; in Ruby a
/// bare `#{` is interpolation inside a heredoc or percent literal.
pub fn strip(content: &str, dialect: HashDialect) -> String {
    let chars: Vec<char> = content.chars().collect();
    let mut out = String::with_capacity(content.len());
    let mut state = State::Normal;
    let mut line_start = true;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        match state {
            State::TripleSingle | State::TripleDouble => {
                let quote = if state == State::TripleSingle { '\'' } else { '"' };
                if c == '\\' {
                    out.push(c);
                    if let Some(escaped) = next {
                        out.push(escaped);
                    }
                    i += 2;
                } else if c == quote && is_triple(&chars, i, quote) {
                    out.extend([quote; 3]);
                    state = State::Normal;
                    line_start = false;
                    i += 3;
                } else {
                    out.push(c);
                    line_start = c == '\n';
                    i += 1;
                }
                continue;
            }
            State::SingleQuoted | State::DoubleQuoted | State::Backtick => {
                out.push(c);
                if c == '\\' {
                    if let Some(escaped) = next {
                        out.push(escaped);
                        i += 2;
                        continue;
                    }
                }
                let closer = match state {
                    State::SingleQuoted => '\'',
                    State::DoubleQuoted => '"',
                    _ => '`',
                };
                if c == closer {
                    state = State::Normal;
                }
                line_start = c == '\n';
                i += 1;
                continue;
            }
            State::Normal => {}
        }

        match c {
            '\'' | '"' if is_triple(&chars, i, c) => {
                out.extend([c; 3]);
                state = if c == '\'' {
                    State::TripleSingle
                } else {
                    State::TripleDouble
                };
                i += 3;
            }
            '\'' => {
                out.push(c);
                state = State::SingleQuoted;
                i += 1;
            }
            '"' => {
                out.push(c);
                state = State::DoubleQuoted;
                i += 1;
            }
            '`' => {
                out.push(c);
                state = State::Backtick;
                i += 1;
            }
            '#' if line_start && next == Some('!') => {
                out.push(c);
                i += 1;
            }
            '#' if !starts_comment(&chars, i, dialect) => {
                out.push(c);
                i += 1;
            }
            '#' => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }

        line_start = match c {
            '\n' => true,
            ' ' | '\t' | '\r' => line_start,
            _ => false,
        };
    }

    out
}

fn starts_comment(chars: &[char], i: usize, dialect: HashDialect) -> bool {
    match dialect {
        HashDialect::Python => true,
        HashDialect::Ruby => chars.get(i + 1) != Some(&'{'),
        HashDialect::Shell => i == 0 || is_word_boundary(chars[i - 1]),
    }
}

fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, ';' | '|' | '&' | '(' | ')')
}

fn is_triple(chars: &[char], i: usize, quote: char) -> bool {
    chars.get(i..i + 3).is_some_and(|w| w.iter().all(|&c| c == quote))
}
