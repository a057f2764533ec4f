//! Per-file content optimization and run-wide statistics.
//!
//! The passes run in a fixed order: docstrings, comments, whitespace,
//! truncation. Each pass reports what it removed as a [`PassDelta`]; only
//! [`ContentOptimizer::optimize`] folds those into the running totals.

use crate::config::OptimizerConfig;
use crate::docstring::strip_docstrings;
use crate::language::Family;
use crate::scanner::strip_comments;
use crate::truncate::truncate_lines;
use crate::whitespace::minify;
use serde::Serialize;
use tracing::{debug, trace};

/// Characters of removed ordinary comments counted as one comment. An
/// approximation: ordinary comments are not counted individually.
pub const COMMENT_CHARS_PER_UNIT: usize = 50;

/// What a single optimization run removed from one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassDelta {
    pub comments_removed: usize,
    pub docstrings_removed: usize,
    pub truncated: bool,
}

/// Totals accumulated over an export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunningStats {
    pub comments_removed: usize,
    pub docstrings_removed: usize,
    pub truncated_files: Vec<String>,
}

impl RunningStats {
    fn absorb(&mut self, path: &str, delta: &PassDelta) {
        self.comments_removed += delta.comments_removed;
        self.docstrings_removed += delta.docstrings_removed;
        if delta.truncated {
            self.truncated_files.push(path.to_owned());
        }
    }
}

/// Savings report for a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationStats {
    pub original_tokens: usize,
    pub optimized_tokens: usize,
    pub tokens_saved: i64,
    pub savings_percent: i64,
    pub truncated_files: Vec<String>,
    pub comments_removed: usize,
    pub docstrings_removed: usize,
}

#[derive(Debug, Clone)]
pub struct ContentOptimizer {
    config: OptimizerConfig,
    stats: RunningStats,
}

impl ContentOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        debug!("Creating ContentOptimizer with config: {:?}", config);
        ContentOptimizer {
            config,
            stats: RunningStats::default(),
        }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    pub fn running_stats(&self) -> &RunningStats {
        &self.stats
    }

    /// Optimizes one file and records what was removed. Returns the input
    /// unchanged, without touching statistics, when the optimizer is disabled.
    pub fn optimize(&mut self, content: &str, path: &str, extension: &str) -> String {
        if !self.config.enabled {
            return content.to_owned();
        }

        let (optimized, delta) = self.run_passes(content, extension);
        trace!("Optimized {}: {:?}", path, delta);
        self.stats.absorb(path, &delta);
        optimized
    }

    /// Runs every enabled pass without recording anything.
    pub fn run_passes(&self, content: &str, extension: &str) -> (String, PassDelta) {
        let family = Family::from_extension(extension);
        let mut delta = PassDelta::default();
        if family.is_plain() {
            return (content.to_owned(), delta);
        }

        let mut current = content.to_owned();

        if self.config.remove_docstrings {
            let (stripped, units) = strip_docstrings(&current, family);
            delta.docstrings_removed = units;
            current = stripped;
        }

        if self.config.remove_comments {
            let before = current.chars().count();
            current = strip_comments(&current, family, !self.config.remove_docstrings);
            let removed = before.saturating_sub(current.chars().count());
            delta.comments_removed = removed.div_ceil(COMMENT_CHARS_PER_UNIT);
        }

        if self.config.minify_whitespace {
            current = minify(&current);
        }

        if let Some(max_lines) = self.config.line_cap() {
            if let Some(truncated) = truncate_lines(&current, max_lines) {
                debug!("Truncated {} lines", truncated.omitted_lines);
                current = truncated.content;
                delta.truncated = true;
            }
        }

        (current, delta)
    }

    pub fn stats(&self, original_tokens: usize, optimized_tokens: usize) -> OptimizationStats {
        let tokens_saved = original_tokens as i64 - optimized_tokens as i64;
        let savings_percent = if original_tokens > 0 {
            (tokens_saved as f64 / original_tokens as f64 * 100.0).round() as i64
        } else {
            0
        };

        OptimizationStats {
            original_tokens,
            optimized_tokens,
            tokens_saved,
            savings_percent,
            truncated_files: self.stats.truncated_files.clone(),
            comments_removed: self.stats.comments_removed,
            docstrings_removed: self.stats.docstrings_removed,
        }
    }

    /// Clears accumulated statistics. The configuration is kept.
    pub fn reset(&mut self) {
        self.stats = RunningStats::default();
    }
}
