//! Orders candidate files before rendering and budget admission.

use std::cmp::Ordering;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, trace};

const ENTRY_POINT_STEMS: &[&str] = &[
    "index",
    "main",
    "app",
    "server",
    "cli",
    "bootstrap",
    "startup",
    "init",
    "entry",
];

const PROJECT_CONFIG_FILES: &[&str] = &[
    "package.json",
    "tsconfig.json",
    "vite.config.ts",
    "vite.config.js",
    "next.config.js",
    "next.config.ts",
    "webpack.config.js",
    "webpack.config.ts",
    "cargo.toml",
    "pyproject.toml",
];

const SOURCE_DIR: &str = "src";

const ENTRY_POINT_BONUS: u32 = 100;
const SHALLOW_BONUS: u32 = 10;
const SOURCE_DIR_BONUS: u32 = 5;
const SHALLOW_DEPTH: usize = 2;

/// Source of file modification times.
pub trait StatProvider {
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;
}

/// Reads modification times from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStatProvider;

impl StatProvider for FsStatProvider {
    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }
}

impl<F> StatProvider for F
where
    F: Fn(&Path) -> io::Result<SystemTime>,
{
    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        self(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityScore {
    pub path: PathBuf,
    pub score: u32,
    pub modified: SystemTime,
    /// Path relative to the root with `/` separators; the final tiebreaker.
    pub relative_path: String,
    pub depth: usize,
}

impl PriorityScore {
    pub fn compute<S>(path: &Path, root: &Path, stats: &S) -> Self
    where
        S: StatProvider + ?Sized,
    {
        let relative = path.strip_prefix(root).unwrap_or(path);
        let components: Vec<String> = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        let depth = components.len();

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let mut score = 0;
        if ENTRY_POINT_STEMS.contains(&stem.as_str())
            || PROJECT_CONFIG_FILES.contains(&file_name.as_str())
        {
            score += ENTRY_POINT_BONUS;
        }
        if depth <= SHALLOW_DEPTH {
            score += SHALLOW_BONUS;
        }
        if depth > 1 && components.first().map(String::as_str) == Some(SOURCE_DIR) {
            score += SOURCE_DIR_BONUS;
        }

        let modified = stats.modified(path).unwrap_or_else(|e| {
            trace!("No modification time for {}: {}", path.display(), e);
            UNIX_EPOCH
        });

        PriorityScore {
            path: path.to_path_buf(),
            score,
            modified,
            relative_path: components.join("/"),
            depth,
        }
    }

    fn ordering(&self, other: &Self, prefer_recent: bool) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| {
                if prefer_recent {
                    other.modified.cmp(&self.modified)
                } else {
                    Ordering::Equal
                }
            })
            .then_with(|| self.relative_path.cmp(&other.relative_path))
    }
}

/// Orders `files` by score, then (with `prefer_recent`) newest first, then by
/// relative path. Files whose modification time cannot be read sort as the
/// oldest possible.
pub fn prioritize<S>(files: &[PathBuf], root: &Path, stats: &S, prefer_recent: bool) -> Vec<PathBuf>
where
    S: StatProvider + ?Sized,
{
    let mut scored: Vec<PriorityScore> = files
        .iter()
        .map(|file| PriorityScore::compute(file, root, stats))
        .collect();
    scored.sort_by(|a, b| a.ordering(b, prefer_recent));

    debug!(
        "Prioritized {} files, first: {:?}",
        scored.len(),
        scored.first().map(|s| &s.relative_path)
    );
    scored.into_iter().map(|s| s.path).collect()
}
