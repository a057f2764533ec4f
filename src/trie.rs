use std::collections::BTreeMap;
use std::path::Path;
use tracing::trace;

/// Token counts for one file before and after optimization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileTokens {
    pub original: usize,
    pub optimized: usize,
}

impl std::ops::Add for FileTokens {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        FileTokens {
            original: self.original + other.original,
            optimized: self.optimized + other.optimized,
        }
    }
}

/// A directory or file in the token tree. Children are kept sorted by name.
#[derive(Debug, Default)]
pub struct TrieNode {
    pub children: BTreeMap<String, TrieNode>,
    pub tokens: Option<FileTokens>,
}

impl TrieNode {
    /// Sum over this node and everything below it.
    pub fn total(&self) -> FileTokens {
        self.children
            .values()
            .map(TrieNode::total)
            .fold(self.tokens.unwrap_or_default(), |acc, t| acc + t)
    }

    pub fn is_file(&self) -> bool {
        self.tokens.is_some()
    }
}

/// Token counts keyed by path component.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    pub fn insert(&mut self, path: &Path, tokens: FileTokens) {
        let mut current = &mut self.root;
        for component in path.iter() {
            current = current
                .children
                .entry(component.to_string_lossy().into_owned())
                .or_default();
        }
        if current.tokens.is_some() {
            trace!("Overwriting token counts for path: {:?}", path);
        }
        current.tokens = Some(tokens);
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}
