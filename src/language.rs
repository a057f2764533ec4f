/// Comment and string syntax shared by a group of languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// `//` and `/* */` comments, `"` and `` ` `` literals, `'` per dialect.
    Brace(BraceDialect),
    /// Brace syntax whose documentation is a run of `//` lines above a declaration (Go).
    LineDoc,
    /// `#` comments with triple-quoted strings.
    Hash(HashDialect),
    /// `--` and `/* */` comments.
    Sql,
    /// `<!-- -->` comments only.
    Markup,
    /// Single-file components: markup comments plus brace comments in script blocks.
    Component,
    /// `/* */` comments only.
    StyleSheet,
    /// Known text formats with no strippable comment syntax. Only the
    /// whitespace and truncation passes apply.
    Text,
    /// No known syntax. Every pass is the identity.
    Plain,
}

/// What a single quote means in a brace language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BraceDialect {
    /// `'` delimits strings (JavaScript, TypeScript, Dart).
    Script,
    /// `'` opens a short character literal, or is a lifetime, label or digit
    /// separator that takes no closing quote (Rust, C family, JVM languages).
    CharLiterals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashDialect {
    Python,
    Ruby,
    Shell,
}

impl HashDialect {
    /// Only Python treats triple-quoted strings as documentation.
    pub fn has_docstrings(self) -> bool {
        matches!(self, HashDialect::Python)
    }
}

impl Family {
    /// Maps a file extension (with or without the leading dot, any case) to its family.
    pub fn from_extension(ext: &str) -> Family {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "js" | "mjs" | "cjs" | "jsx" | "ts" | "mts" | "cts" | "tsx" | "dart" => {
                Family::Brace(BraceDialect::Script)
            }
            "java" | "c" | "h" | "cpp" | "cc" | "cxx" | "hpp" | "cs" | "rs" | "swift" | "kt"
            | "kts" | "scala" => Family::Brace(BraceDialect::CharLiterals),
            "go" => Family::LineDoc,
            "py" | "pyw" | "pyi" => Family::Hash(HashDialect::Python),
            "rb" => Family::Hash(HashDialect::Ruby),
            "sh" | "bash" | "zsh" => Family::Hash(HashDialect::Shell),
            "sql" => Family::Sql,
            "html" | "htm" | "xml" | "xhtml" | "svg" => Family::Markup,
            "vue" | "svelte" => Family::Component,
            "css" | "scss" | "less" => Family::StyleSheet,
            "md" | "markdown" | "txt" | "rst" | "json" | "yaml" | "yml" | "toml" | "ini"
            | "cfg" | "csv" => Family::Text,
            _ => Family::Plain,
        }
    }

    pub fn is_plain(self) -> bool {
        self == Family::Plain
    }
}

/// Lowercased extension of `path`, without the dot. Empty when there is none.
pub fn extension_of(path: &str) -> String {
    std::path::Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Fence/type label used when rendering a file, adapted from the common
/// extension set. Unknown extensions render as `text`.
pub fn display_name(ext: &str) -> &'static str {
    match ext {
        "rs" => "rust",
        "py" | "pyw" | "pyi" => "python",
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "jsx",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "tsx",
        "java" => "java",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" => "cpp",
        "cs" => "csharp",
        "go" => "go",
        "rb" => "ruby",
        "php" => "php",
        "swift" => "swift",
        "kt" | "kts" => "kotlin",
        "scala" => "scala",
        "dart" => "dart",
        "html" | "htm" | "xhtml" => "html",
        "xml" | "svg" => "xml",
        "vue" => "vue",
        "svelte" => "svelte",
        "css" => "css",
        "scss" => "scss",
        "less" => "less",
        "sh" | "bash" | "zsh" => "bash",
        "sql" => "sql",
        "toml" => "toml",
        "yaml" | "yml" => "yaml",
        "json" => "json",
        "md" => "markdown",
        _ => "text",
    }
}
