use codedump::config::OptimizerConfig;
use codedump::optimizer::ContentOptimizer;
use codedump::tokens::estimate_tokens;
use codedump::truncate::{truncate_lines, truncation_marker};
use codedump::whitespace::minify;

fn enabled_config() -> OptimizerConfig {
    OptimizerConfig {
        enabled: true,
        ..OptimizerConfig::default()
    }
}

#[test]
fn test_disabled_optimizer_is_passthrough() {
    let mut optimizer = ContentOptimizer::new(OptimizerConfig::default());
    let content = "/** Doc */\nconst a = 1; // c\n\n\n\n\n";
    assert_eq!(optimizer.optimize(content, "a.ts", "ts"), content);
    assert_eq!(optimizer.running_stats().comments_removed, 0);
    assert!(optimizer.running_stats().truncated_files.is_empty());
}

#[test]
fn test_all_passes_in_order() {
    let config = OptimizerConfig {
        max_lines_per_file: 2,
        ..enabled_config()
    };
    let mut optimizer = ContentOptimizer::new(config);
    let content = "/** Doc */\nconst a = 1; // comment\n\n\n\n\nline1\nline2\nline3\nline4\n";

    let optimized = optimizer.optimize(content, "src/a.ts", "ts");
    let lines: Vec<&str> = optimized.lines().collect();
    assert_eq!(
        lines,
        vec!["const a = 1;", "", "// ... truncated (5 lines omitted) ..."]
    );

    let stats = optimizer.running_stats();
    assert_eq!(stats.docstrings_removed, 1);
    assert_eq!(stats.comments_removed, 1);
    assert_eq!(stats.truncated_files, vec!["src/a.ts".to_string()]);
}

#[test]
fn test_truncation_keeps_exact_prefix() {
    let config = OptimizerConfig {
        max_lines_per_file: 2,
        ..enabled_config()
    };
    let mut optimizer = ContentOptimizer::new(config);
    let optimized = optimizer.optimize("l1\nl2\nl3\nl4\nl5\nl6\nl7\n", "notes.txt", "txt");
    assert_eq!(optimized, "l1\nl2\n// ... truncated (5 lines omitted) ...\n");
}

#[test]
fn test_comments_removed_but_docs_kept() {
    let config = OptimizerConfig {
        remove_docstrings: false,
        truncate_large_files: false,
        ..enabled_config()
    };
    let mut optimizer = ContentOptimizer::new(config);
    let optimized = optimizer.optimize("/** Doc */\n// plain\nx();\n", "a.js", "js");
    assert_eq!(optimized, "/** Doc */\n\nx();\n");
    assert_eq!(optimizer.running_stats().docstrings_removed, 0);
    assert_eq!(optimizer.running_stats().comments_removed, 1);
}

#[test]
fn test_docs_removed_but_comments_kept() {
    let config = OptimizerConfig {
        remove_comments: false,
        truncate_large_files: false,
        ..enabled_config()
    };
    let mut optimizer = ContentOptimizer::new(config);
    let optimized = optimizer.optimize("/** Doc */\n// plain\nx();\n", "a.js", "js");
    assert_eq!(optimized, "// plain\nx();\n");
    assert_eq!(optimizer.running_stats().docstrings_removed, 1);
    assert_eq!(optimizer.running_stats().comments_removed, 0);
}

#[test]
fn test_urls_in_strings_survive() {
    let mut optimizer = ContentOptimizer::new(enabled_config());
    let optimized = optimizer.optimize(
        "const u = \"https://example.com/x\"; // drop me\n",
        "u.ts",
        "ts",
    );
    assert_eq!(optimized, "const u = \"https://example.com/x\";\n");
}

#[test]
fn test_python_docstrings_removed_hash_comment_kept() {
    let config = OptimizerConfig {
        remove_comments: false,
        ..enabled_config()
    };
    let mut optimizer = ContentOptimizer::new(config);
    let content = "\"\"\"Mod.\"\"\"\n# note\ndef f():\n    \"\"\"Doc.\"\"\"\n    return 1\n";
    let optimized = optimizer.optimize(content, "m.py", "py");
    assert_eq!(optimized, "# note\ndef f():\n    return 1\n");
    assert_eq!(optimizer.running_stats().docstrings_removed, 2);
}

#[test]
fn test_unknown_extension_is_untouched() {
    let config = OptimizerConfig {
        max_lines_per_file: 1,
        ..enabled_config()
    };
    let mut optimizer = ContentOptimizer::new(config);
    let content = "  a  // x \n\n\n\n\nb  ";
    assert_eq!(optimizer.optimize(content, "data.xyz", "xyz"), content);
    assert!(optimizer.running_stats().truncated_files.is_empty());
}

#[test]
fn test_text_family_only_minified() {
    let mut optimizer = ContentOptimizer::new(enabled_config());
    let optimized = optimizer.optimize("# Title   \n\n\n\n\nbody\n\n", "README.md", "md");
    assert_eq!(optimized, "# Title\n\n\nbody\n");
}

#[test]
fn test_stats_savings_percent() {
    let optimizer = ContentOptimizer::new(enabled_config());
    let stats = optimizer.stats(200, 150);
    assert_eq!(stats.tokens_saved, 50);
    assert_eq!(stats.savings_percent, 25);

    assert_eq!(optimizer.stats(3, 2).savings_percent, 33);
    assert_eq!(optimizer.stats(0, 0).savings_percent, 0);
}

#[test]
fn test_reset_clears_running_stats() {
    let config = OptimizerConfig {
        max_lines_per_file: 1,
        ..enabled_config()
    };
    let mut optimizer = ContentOptimizer::new(config);
    optimizer.optimize("/// a\nfn a() {}\nfn b() {}\n", "a.rs", "rs");
    assert_eq!(optimizer.running_stats().docstrings_removed, 1);
    assert_eq!(optimizer.running_stats().truncated_files.len(), 1);

    optimizer.reset();
    let stats = optimizer.stats(10, 10);
    assert_eq!(stats.docstrings_removed, 0);
    assert!(stats.truncated_files.is_empty());
    assert_eq!(optimizer.config().max_lines_per_file, 1);
}

#[test]
fn test_minify_is_idempotent() {
    let samples = [
        "\n\n  a  \t\n\n\n\n\nb\r\n  \r\n\n\n",
        "no newline",
        "",
        "\n\n\n",
        "x\n\n\ny\n",
        "\r\n\r\n a \r\n\r\n\r\n\r\nb\r\n\r\n",
    ];
    for sample in samples {
        let once = minify(sample);
        assert_eq!(minify(&once), once, "sample {:?}", sample);
        assert!(!once.contains("\n\n\n\n"));
        assert!(!once.contains("\r\n\r\n\r\n\r\n"));
    }
}

#[test]
fn test_minify_trims_and_collapses() {
    assert_eq!(minify("\n\na  \nb\t\n\n\n\n\nc\n\n\n"), "a\nb\n\n\nc\n");
    assert_eq!(minify("a\r\n"), "a\r\n");
}

#[test]
fn test_minify_collapses_crlf_blank_lines() {
    assert_eq!(
        minify("a\r\n\r\n\r\n\r\n\r\n\r\nb\r\n"),
        "a\r\n\r\n\r\nb\r\n"
    );
    assert_eq!(minify("\r\n\r\n  a  \r\nb\t\r\n\r\n\r\n"), "  a\r\nb\r\n");
}

#[test]
fn test_rust_source_with_lifetimes_survives() {
    let mut optimizer = ContentOptimizer::new(enabled_config());
    let content = "fn f<'a>(x: &'a str) -> &'static str {\n    \"it's at https://example.com/x\"\n}\n";
    assert_eq!(optimizer.optimize(content, "a.rs", "rs"), content);
}

#[test]
fn test_shell_parameter_expansions_survive() {
    let mut optimizer = ContentOptimizer::new(enabled_config());
    let optimized = optimizer.optimize(
        "if [ $# -eq 0 ]; then\n  echo ${#arr[@]}\nfi\n",
        "a.sh",
        "sh",
    );
    assert_eq!(optimized, "if [ $# -eq 0 ]; then\n  echo ${#arr[@]}\nfi\n");
}

#[test]
fn test_truncate_edge_cases() {
    assert_eq!(truncate_lines("a\nb\n", 2), None);
    assert_eq!(truncate_lines("a\nb\nc\n", 0), None);

    let truncated = truncate_lines("a\nb", 1).unwrap();
    assert_eq!(truncated.omitted_lines, 1);
    assert_eq!(truncated.content, format!("a\n{}\n", truncation_marker(1)));
}

#[test]
fn test_estimate_tokens_rounds_up() {
    assert_eq!(estimate_tokens(""), 0);
    assert_eq!(estimate_tokens("abcd"), 1);
    assert_eq!(estimate_tokens("abcde"), 2);
    assert_eq!(estimate_tokens("ééééé"), 2);
}
