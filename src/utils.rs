use crate::config::ExportConfig;
use crate::errors::ExportError;
use crate::ignore::IgnorePatterns;
use crate::language::{display_name, extension_of};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs as async_fs;
use tracing::{debug, trace, warn};

pub fn normalize_path(path: &str) -> String {
    let trimmed = path.strip_prefix("./").unwrap_or(path);
    trimmed.replace('\\', "/")
}

/// Path of `file` relative to `root` with `/` separators, or the path itself
/// when it lies outside `root`.
pub fn relative_display(file: &Path, root: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    normalize_path(&relative.to_string_lossy())
}

/// Expands files, directories and glob patterns into a de-duplicated file list,
/// dropping ignored paths and unselected extensions. Inputs are resolved
/// against `root` when relative.
pub fn collect_files(
    inputs: &[String],
    root: &Path,
    config: &ExportConfig,
) -> Result<Vec<PathBuf>, ExportError> {
    let ignore = IgnorePatterns::new(&config.ignore_patterns, config.use_default_ignores);
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    let mut accept = |path: PathBuf, files: &mut Vec<PathBuf>| {
        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        if ignore.should_ignore(&relative) {
            trace!("Ignoring {}", relative.display());
            return;
        }
        let ext = extension_of(&path.to_string_lossy());
        if !config.includes_extension(&ext) {
            trace!("Skipping unselected extension: {}", relative.display());
            return;
        }
        if seen.insert(path.clone()) {
            files.push(path);
        }
    };

    for input in inputs {
        let normalized = normalize_path(input);
        let path = if normalized.is_empty() || normalized == "." {
            root.to_path_buf()
        } else if Path::new(&normalized).is_absolute() {
            PathBuf::from(&normalized)
        } else {
            root.join(&normalized)
        };

        if path.is_dir() {
            for entry in walkdir::WalkDir::new(&path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                if entry.file_type().is_file() {
                    accept(entry.into_path(), &mut files);
                }
            }
        } else if path.is_file() {
            accept(path, &mut files);
        } else {
            let pattern = path.to_string_lossy().replace('\\', "/");
            for entry in glob::glob(&pattern)? {
                match entry {
                    Ok(matched) if matched.is_file() => accept(matched, &mut files),
                    Err(e) => warn!("Error processing pattern {}: {:?}", input, e),
                    _ => {}
                }
            }
        }
    }

    debug!("Collected {} files from {} inputs", files.len(), inputs.len());
    Ok(files)
}

pub async fn read_file_content(file_path: &Path) -> Result<String, ExportError> {
    async_fs::read_to_string(file_path)
        .await
        .map_err(|err| ExportError::FileReadError(file_path.display().to_string(), err.to_string()))
}

/// Markdown section for one file: a path heading and a fenced block long
/// enough not to be closed by backticks inside the content.
pub fn render_markdown_file(path: &str, content: &str) -> String {
    let ext = extension_of(path);
    let longest_run = content
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run.max(2) + 1);

    let mut section = String::with_capacity(content.len() + path.len() + 32);
    section.push_str(&format!("### `{}`\n", path));
    section.push_str(&format!("{}{}\n", fence, display_name(&ext)));
    section.push_str(content);
    if !content.ends_with('\n') {
        section.push('\n');
    }
    section.push_str(&fence);
    section.push_str("\n\n");
    section
}

/// XML section for one file. The content goes into a CDATA block, so markup
/// such as `</file>` inside a file cannot close the section.
pub fn render_xml_file(path: &str, content: &str) -> String {
    let ext = extension_of(path);
    let mut section = String::with_capacity(content.len() + path.len() + 64);
    section.push_str(&format!(
        "<file path=\"{}\" type=\"{}\">\n",
        escape_xml_attr(path),
        display_name(&ext)
    ));
    section.push_str("<![CDATA[");
    section.push_str(&content.replace("]]>", "]]]]><![CDATA[>"));
    section.push_str("]]>\n</file>\n");
    section
}

fn escape_xml_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
