/// Most blank lines kept in a row.
const MAX_BLANK_LINES: usize = 2;

/// Trims trailing spaces and tabs on every line, caps blank-line runs, drops
/// leading blank lines and collapses trailing newlines to one.
///
/// `\n` and `\r\n` both end a line and each line keeps its own terminator.
/// Applying it twice gives the same result as applying it once.
pub fn minify(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut blank_terminators: Vec<&str> = Vec::new();
    let mut started = false;

    for line in content.split_inclusive('\n') {
        let (body, terminator) = split_terminator(line);
        let body = body.trim_end_matches([' ', '\t']);

        if body.is_empty() {
            if started {
                blank_terminators.push(terminator);
            }
            continue;
        }

        for blank in blank_terminators.drain(..).take(MAX_BLANK_LINES) {
            out.push_str(blank);
        }
        out.push_str(body);
        out.push_str(terminator);
        started = true;
    }

    out
}

fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}
