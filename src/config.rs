use crate::errors::ExportError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the configuration file looked up in the export root.
pub const DEFAULT_CONFIG_FILE: &str = "codedump.json";

/// Settings for the content optimizer. Immutable once handed to an optimizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizerConfig {
    pub enabled: bool,
    /// Ceiling on estimated tokens across all included files; `<= 0` means unlimited.
    pub max_token_budget: i64,
    pub remove_comments: bool,
    pub remove_docstrings: bool,
    pub minify_whitespace: bool,
    pub truncate_large_files: bool,
    /// `<= 0` disables truncation.
    pub max_lines_per_file: i64,
    pub prioritize_recent_files: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        OptimizerConfig {
            enabled: false,
            max_token_budget: 100_000,
            remove_comments: true,
            remove_docstrings: true,
            minify_whitespace: true,
            truncate_large_files: true,
            max_lines_per_file: 500,
            prioritize_recent_files: true,
        }
    }
}

impl OptimizerConfig {
    /// Configured ceiling, or `None` when unlimited.
    pub fn token_ceiling(&self) -> Option<usize> {
        usize::try_from(self.max_token_budget)
            .ok()
            .filter(|&budget| budget > 0)
    }

    /// Line cap to apply, or `None` when truncation is off or misconfigured.
    pub fn line_cap(&self) -> Option<usize> {
        if !self.truncate_large_files {
            return None;
        }
        usize::try_from(self.max_lines_per_file)
            .ok()
            .filter(|&lines| lines > 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Xml,
    Json,
}

/// Export settings as stored in `codedump.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportConfig {
    /// Extensions to include, e.g. `[".rs", "py"]`. Empty includes everything.
    pub extensions: Vec<String>,
    pub output_format: OutputFormat,
    /// First line of a rendered document.
    pub title: String,
    pub skip_empty_files: bool,
    pub include_metadata: bool,
    pub use_default_ignores: bool,
    pub ignore_patterns: Vec<String>,
    pub ai_context_optimizer: OptimizerConfig,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            extensions: Vec::new(),
            output_format: OutputFormat::Markdown,
            title: "# Relevant Code".to_owned(),
            skip_empty_files: true,
            include_metadata: false,
            use_default_ignores: true,
            ignore_patterns: Vec::new(),
            ai_context_optimizer: OptimizerConfig::default(),
        }
    }
}

impl ExportConfig {
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        serde_json::from_str(json).map_err(|e| ExportError::ConfigError(e.to_string()))
    }

    /// Loads an explicit config file, or `codedump.json` under `root` when
    /// present, or the defaults.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self, ExportError> {
        let path: PathBuf = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    debug!("No {} in {}, using defaults", DEFAULT_CONFIG_FILE, root.display());
                    return Ok(ExportConfig::default());
                }
                candidate
            }
        };

        let json = std::fs::read_to_string(&path).map_err(|e| {
            ExportError::ConfigError(format!("{}: {}", path.display(), e))
        })?;
        let config = Self::from_json(&json)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// True when `ext` (without dot, lowercase) is selected.
    pub fn includes_extension(&self, ext: &str) -> bool {
        self.extensions.is_empty()
            || self
                .extensions
                .iter()
                .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}
