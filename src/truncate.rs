/// Marker appended after the kept lines of a truncated file.
pub fn truncation_marker(omitted_lines: usize) -> String {
    format!("// ... truncated ({} lines omitted) ...", omitted_lines)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncated {
    pub content: String,
    pub omitted_lines: usize,
}

/// Keeps the first `max_lines` lines of `content` followed by one marker line.
///
/// Returns `None` when the content already fits or when `max_lines` is zero.
/// A trailing newline ends the last line rather than starting a new one.
pub fn truncate_lines(content: &str, max_lines: usize) -> Option<Truncated> {
    if max_lines == 0 {
        return None;
    }

    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    if lines.len() <= max_lines {
        return None;
    }

    let omitted_lines = lines.len() - max_lines;
    let mut kept = lines[..max_lines].concat();
    if !kept.ends_with('\n') {
        kept.push('\n');
    }
    kept.push_str(&truncation_marker(omitted_lines));
    kept.push('\n');

    Some(Truncated {
        content: kept,
        omitted_lines,
    })
}
