//! Wires the prioritizer, the optimizer and the token ceiling together.
//!
//! Admission is greedy and order sensitive: each candidate is judged only on
//! the tokens already accepted plus its own. A file that does not fit is
//! skipped whole and later, smaller files may still be admitted.

use crate::config::OptimizerConfig;
use crate::optimizer::{ContentOptimizer, OptimizationStats};
use crate::prioritizer::{prioritize, StatProvider};
use crate::tokens::estimate_tokens;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationResult {
    pub optimized_content: String,
    pub original_tokens: usize,
    pub optimized_tokens: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Accepted { total: usize },
    OverBudget { needed: usize, remaining: usize },
}

#[derive(Debug)]
pub struct OptimizationPipeline {
    pub enabled: bool,
    pub optimizer: Option<ContentOptimizer>,
    /// `usize::MAX` when unlimited.
    pub max_token_budget: usize,
    pub ordered_files: Vec<PathBuf>,
    accepted_tokens: usize,
    original_tokens: usize,
}

/// Builds the pipeline for one export run. A disabled config keeps the input
/// order and imposes no ceiling.
pub fn build_pipeline<S>(
    config: &OptimizerConfig,
    files: Vec<PathBuf>,
    root: &Path,
    stats: &S,
) -> OptimizationPipeline
where
    S: StatProvider + ?Sized,
{
    if !config.enabled {
        debug!("Optimizer disabled, keeping {} files in input order", files.len());
        return OptimizationPipeline {
            enabled: false,
            optimizer: None,
            max_token_budget: usize::MAX,
            ordered_files: files,
            accepted_tokens: 0,
            original_tokens: 0,
        };
    }

    let ordered_files = prioritize(&files, root, stats, config.prioritize_recent_files);
    let max_token_budget = config.token_ceiling().unwrap_or(usize::MAX);
    info!(
        "Optimizer enabled: {} files, budget {}",
        ordered_files.len(),
        if max_token_budget == usize::MAX {
            "unlimited".to_owned()
        } else {
            max_token_budget.to_string()
        }
    );

    OptimizationPipeline {
        enabled: true,
        optimizer: Some(ContentOptimizer::new(config.clone())),
        max_token_budget,
        ordered_files,
        accepted_tokens: 0,
        original_tokens: 0,
    }
}

/// True when accepting `candidate_tokens` on top of `total_so_far` would pass `ceiling`.
pub fn would_exceed_budget(total_so_far: usize, candidate_tokens: usize, ceiling: usize) -> bool {
    total_so_far.saturating_add(candidate_tokens) > ceiling
}

/// Runs `content` through `optimizer` when there is one and estimates tokens
/// before and after.
pub fn optimize_content(
    content: &str,
    path: &str,
    extension: &str,
    optimizer: Option<&mut ContentOptimizer>,
) -> OptimizationResult {
    let original_tokens = estimate_tokens(content);
    let optimized_content = match optimizer {
        Some(optimizer) => optimizer.optimize(content, path, extension),
        None => content.to_owned(),
    };
    let optimized_tokens = estimate_tokens(&optimized_content);

    OptimizationResult {
        optimized_content,
        original_tokens,
        optimized_tokens,
    }
}

impl OptimizationPipeline {
    pub fn optimize(&mut self, content: &str, path: &str, extension: &str) -> OptimizationResult {
        optimize_content(content, path, extension, self.optimizer.as_mut())
    }

    /// Admits a candidate if it fits the remaining budget. Accepted tokens are
    /// committed immediately; rejected candidates leave the total untouched.
    pub fn admit(&mut self, result: &OptimizationResult) -> Admission {
        if would_exceed_budget(
            self.accepted_tokens,
            result.optimized_tokens,
            self.max_token_budget,
        ) {
            return Admission::OverBudget {
                needed: result.optimized_tokens,
                remaining: self.max_token_budget.saturating_sub(self.accepted_tokens),
            };
        }

        self.accepted_tokens += result.optimized_tokens;
        self.original_tokens += result.original_tokens;
        Admission::Accepted {
            total: self.accepted_tokens,
        }
    }

    pub fn accepted_tokens(&self) -> usize {
        self.accepted_tokens
    }

    /// Savings over the admitted files, or `None` when the optimizer is off.
    pub fn stats(&self) -> Option<OptimizationStats> {
        self.optimizer
            .as_ref()
            .map(|optimizer| optimizer.stats(self.original_tokens, self.accepted_tokens))
    }
}
