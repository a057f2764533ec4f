use crate::export::ExportDocument;
use crate::optimizer::OptimizationStats;
use crate::trie::{FileTokens, Trie, TrieNode};
use std::path::Path;
use tracing::{debug, info};

/// Logs a token tree of the included files, followed by skipped files and savings.
pub fn print_stats(document: &ExportDocument) {
    debug!("Printing statistics for {} files", document.included.len());
    let mut trie = Trie::new();
    for file in &document.included {
        trie.insert(
            Path::new(&file.path),
            FileTokens {
                original: file.original_tokens,
                optimized: file.tokens,
            },
        );
    }

    info!("Overall ({} tokens)", document.total_tokens);
    print_tree(trie.root(), "");

    for skipped in &document.skipped {
        info!("Skipped {} ({})", skipped.path, skipped.reason);
    }

    if let Some(stats) = &document.optimization {
        info!("{}", savings_summary(stats));
    }
}

fn print_tree(node: &TrieNode, prefix: &str) {
    let count = node.children.len();
    for (i, (name, child)) in node.children.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "┗━━" } else { "┣━━" };
        let tokens = child.total();

        if child.is_file() {
            info!("{}{} {} ({})", prefix, connector, name, describe(tokens));
        } else {
            info!("{}{} {}/ ({})", prefix, connector, name, describe(tokens));
            let nested = format!("{}{}    ", prefix, if is_last { " " } else { "┃" });
            print_tree(child, &nested);
        }
    }
}

fn describe(tokens: FileTokens) -> String {
    if tokens.original == tokens.optimized {
        format!("{} tokens", tokens.optimized)
    } else {
        format!("{} tokens, was {}", tokens.optimized, tokens.original)
    }
}

pub fn savings_summary(stats: &OptimizationStats) -> String {
    format!(
        "Optimization saved {} tokens ({}%): {} comments, {} docstrings removed, {} files truncated",
        stats.tokens_saved,
        stats.savings_percent,
        stats.comments_removed,
        stats.docstrings_removed,
        stats.truncated_files.len()
    )
}
