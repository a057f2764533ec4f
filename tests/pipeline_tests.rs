use codedump::config::OptimizerConfig;
use codedump::optimizer::ContentOptimizer;
use codedump::pipeline::{build_pipeline, optimize_content, would_exceed_budget, Admission};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

fn no_mtime(_: &Path) -> io::Result<SystemTime> {
    Ok(UNIX_EPOCH)
}

fn files() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/proj/lib/deep/z.ts"),
        PathBuf::from("/proj/index.ts"),
    ]
}

fn config_with_budget(budget: i64) -> OptimizerConfig {
    OptimizerConfig {
        enabled: true,
        max_token_budget: budget,
        ..OptimizerConfig::default()
    }
}

#[test]
fn test_would_exceed_budget() {
    assert!(would_exceed_budget(90, 15, 100));
    assert!(!would_exceed_budget(90, 10, 100));
    assert!(!would_exceed_budget(usize::MAX - 1, 1, usize::MAX));
    assert!(!would_exceed_budget(usize::MAX, 5, usize::MAX));

    for total in 0..30 {
        for candidate in 0..30 {
            assert_eq!(
                would_exceed_budget(total, candidate, 25),
                total + candidate > 25
            );
        }
    }
}

#[test]
fn test_disabled_pipeline_keeps_order() {
    let pipeline = build_pipeline(&OptimizerConfig::default(), files(), Path::new("/proj"), &no_mtime);
    assert!(!pipeline.enabled);
    assert!(pipeline.optimizer.is_none());
    assert_eq!(pipeline.max_token_budget, usize::MAX);
    assert_eq!(pipeline.ordered_files, files());
    assert!(pipeline.stats().is_none());
}

#[test]
fn test_enabled_pipeline_prioritizes() {
    let pipeline = build_pipeline(&config_with_budget(100), files(), Path::new("/proj"), &no_mtime);
    assert!(pipeline.enabled);
    assert!(pipeline.optimizer.is_some());
    assert_eq!(pipeline.max_token_budget, 100);
    assert_eq!(
        pipeline.ordered_files,
        vec![
            PathBuf::from("/proj/index.ts"),
            PathBuf::from("/proj/lib/deep/z.ts"),
        ]
    );
}

#[test]
fn test_non_positive_budget_is_unlimited() {
    for budget in [0, -5] {
        let pipeline = build_pipeline(&config_with_budget(budget), files(), Path::new("/proj"), &no_mtime);
        assert_eq!(pipeline.max_token_budget, usize::MAX);
    }
}

#[test]
fn test_greedy_admission() {
    let mut pipeline = build_pipeline(&config_with_budget(10), Vec::new(), Path::new("/proj"), &no_mtime);

    let six = pipeline.optimize("a".repeat(24).as_str(), "six.txt", "txt");
    let five = pipeline.optimize("b".repeat(20).as_str(), "five.txt", "txt");
    let four = pipeline.optimize("c".repeat(16).as_str(), "four.txt", "txt");
    assert_eq!(six.optimized_tokens, 6);
    assert_eq!(five.optimized_tokens, 5);
    assert_eq!(four.optimized_tokens, 4);

    assert_eq!(pipeline.admit(&six), Admission::Accepted { total: 6 });
    assert_eq!(
        pipeline.admit(&five),
        Admission::OverBudget {
            needed: 5,
            remaining: 4
        }
    );
    assert_eq!(pipeline.admit(&four), Admission::Accepted { total: 10 });
    assert_eq!(pipeline.accepted_tokens(), 10);
}

#[test]
fn test_optimize_content_without_optimizer() {
    let result = optimize_content("// c\nx\n", "a.ts", "ts", None);
    assert_eq!(result.optimized_content, "// c\nx\n");
    assert_eq!(result.original_tokens, 2);
    assert_eq!(result.optimized_tokens, 2);
}

#[test]
fn test_optimize_content_with_optimizer() {
    let mut optimizer = ContentOptimizer::new(config_with_budget(0));
    let result = optimize_content("// comment here\nx\n", "a.ts", "ts", Some(&mut optimizer));
    assert_eq!(result.optimized_content, "x\n");
    assert_eq!(result.original_tokens, 5);
    assert_eq!(result.optimized_tokens, 1);
    assert_eq!(optimizer.running_stats().comments_removed, 1);
}

#[test]
fn test_pipeline_stats_cover_admitted_files() {
    let mut pipeline = build_pipeline(&config_with_budget(0), Vec::new(), Path::new("/proj"), &no_mtime);
    let result = pipeline.optimize("/// doc\nfn a() {}\n", "a.rs", "rs");
    pipeline.admit(&result);

    let stats = pipeline.stats().unwrap();
    assert_eq!(stats.original_tokens, 5);
    assert_eq!(stats.optimized_tokens, 3);
    assert_eq!(stats.tokens_saved, 2);
    assert_eq!(stats.savings_percent, 40);
    assert_eq!(stats.docstrings_removed, 1);
}
