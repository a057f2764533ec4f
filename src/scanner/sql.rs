/// Removes `--` line comments and `/* */` blocks outside quoted strings.
///
/// A quote preceded by a backslash does not close its string. An unterminated
/// block comment is kept verbatim from its opener onwards.
pub fn strip(content: &str) -> String {
    let chars: Vec<char> = content.chars().collect();
    let mut out = String::with_capacity(content.len());
    let mut quote: Option<char> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if let Some(q) = quote {
            out.push(c);
            if c == q && (i == 0 || chars[i - 1] != '\\') {
                quote = None;
            }
            i += 1;
            continue;
        }

        match (c, next) {
            ('\'', _) | ('"', _) => {
                quote = Some(c);
                out.push(c);
                i += 1;
            }
            ('-', Some('-')) => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            ('/', Some('*')) => match find_block_end(&chars, i + 2) {
                Some(end) => i = end + 2,
                None => {
                    out.extend(&chars[i..]);
                    break;
                }
            },
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

fn find_block_end(chars: &[char], from: usize) -> Option<usize> {
    (from..chars.len().saturating_sub(1)).find(|&j| chars[j] == '*' && chars[j + 1] == '/')
}
