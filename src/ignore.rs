use glob::Pattern;
use std::path::Path;
use tracing::{debug, warn};

/// Directories never worth exporting, matched against any path component.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "target",
    "dist",
    "build",
    "coverage",
    ".vscode",
    ".idea",
    "__pycache__",
    ".venv",
    ".pytest_cache",
    ".mypy_cache",
    ".ruff_cache",
    ".gradle",
    "vendor",
];

/// File patterns matched against the path relative to the export root.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "**/*.log",
    "**/*.tmp",
    "**/*.cache",
    "**/*.pyc",
    "**/*.class",
    "**/.DS_Store",
    "**/Cargo.lock",
    "**/package-lock.json",
    "**/yarn.lock",
    "**/pnpm-lock.yaml",
    "**/Gemfile.lock",
    "**/composer.lock",
    "**/go.sum",
    "**/.env",
    "**/.env.*",
    "codedump.json",
];

pub struct IgnorePatterns {
    dirs: Vec<String>,
    patterns: Vec<Pattern>,
}

impl IgnorePatterns {
    /// Compiles `extra` patterns, on top of the defaults when `use_defaults` is set.
    /// Invalid patterns are logged and skipped.
    pub fn new(extra: &[String], use_defaults: bool) -> Self {
        let mut sources: Vec<String> = Vec::new();
        let mut dirs = Vec::new();
        if use_defaults {
            sources.extend(DEFAULT_IGNORE_PATTERNS.iter().map(|s| s.to_string()));
            dirs.extend(DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()));
        }
        sources.extend(extra.iter().cloned());

        let patterns = sources
            .iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!("Invalid ignore pattern '{}': {}", p, e);
                    None
                }
            })
            .collect();

        debug!("Using ignore patterns: {:?}, ignored dirs: {:?}", sources, dirs);
        IgnorePatterns { dirs, patterns }
    }

    /// `relative` is the path below the export root.
    pub fn should_ignore<P: AsRef<Path>>(&self, relative: P) -> bool {
        let relative = relative.as_ref();
        let in_ignored_dir = relative.parent().is_some_and(|parent| {
            parent
                .components()
                .any(|c| self.dirs.iter().any(|d| c.as_os_str() == d.as_str()))
        });
        if in_ignored_dir {
            return true;
        }

        let path_str = relative.to_string_lossy().replace('\\', "/");
        self.patterns.iter().any(|pattern| pattern.matches(&path_str))
    }
}
