use crate::config::{ExportConfig, OutputFormat};
use crate::errors::ExportError;
use crate::language::{display_name, extension_of};
use crate::optimizer::OptimizationStats;
use crate::pipeline::{build_pipeline, Admission};
use crate::prioritizer::FsStatProvider;
use crate::utils::{
    collect_files, read_file_content, relative_display, render_markdown_file, render_xml_file,
};
use arboard::Clipboard;
use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info, trace, warn};

#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub root: PathBuf,
    pub inputs: Vec<String>,
    pub config: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludedFile {
    pub path: String,
    pub language: String,
    pub original_tokens: usize,
    pub tokens: usize,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    Empty,
    TokenBudget,
    Unreadable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Empty => write!(f, "empty"),
            SkipReason::TokenBudget => write!(f, "token budget"),
            SkipReason::Unreadable => write!(f, "unreadable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone)]
pub struct ExportDocument {
    pub content: String,
    pub included: Vec<IncludedFile>,
    pub skipped: Vec<SkippedFile>,
    pub total_tokens: usize,
    pub optimization: Option<OptimizationStats>,
}

#[async_trait]
pub trait Exporter {
    async fn export(&self, request: ExportRequest) -> Result<ExportDocument, ExportError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BasicExporter;

impl BasicExporter {
    pub fn new() -> Self {
        BasicExporter
    }
}

#[async_trait]
impl Exporter for BasicExporter {
    async fn export(&self, request: ExportRequest) -> Result<ExportDocument, ExportError> {
        let ExportRequest {
            root,
            inputs,
            config,
        } = request;

        debug!("Collecting files under {}", root.display());
        let files = collect_files(&inputs, &root, &config)?;
        let mut pipeline =
            build_pipeline(&config.ai_context_optimizer, files, &root, &FsStatProvider);

        let mut included = Vec::new();
        let mut skipped = Vec::new();

        for file in pipeline.ordered_files.clone() {
            let relative = relative_display(&file, &root);
            trace!("Processing file: {}", relative);

            let content = match read_file_content(&file).await {
                Ok(content) => content,
                Err(e) => {
                    warn!("Failed to read file {}: {}", relative, e);
                    skipped.push(SkippedFile {
                        path: relative,
                        reason: SkipReason::Unreadable,
                    });
                    continue;
                }
            };

            let ext = extension_of(&relative);
            let result = pipeline.optimize(&content, &relative, &ext);

            if config.skip_empty_files && result.optimized_content.trim().is_empty() {
                debug!("Skipped empty file: {}", relative);
                skipped.push(SkippedFile {
                    path: relative,
                    reason: SkipReason::Empty,
                });
                continue;
            }

            match pipeline.admit(&result) {
                Admission::OverBudget { needed, remaining } => {
                    info!(
                        "Skipped due to budget: {} ({} tokens, {} remaining)",
                        relative, needed, remaining
                    );
                    skipped.push(SkippedFile {
                        path: relative,
                        reason: SkipReason::TokenBudget,
                    });
                }
                Admission::Accepted { total } => {
                    trace!("Accepted {} ({} tokens so far)", relative, total);
                    included.push(IncludedFile {
                        language: display_name(&ext).to_owned(),
                        path: relative,
                        original_tokens: result.original_tokens,
                        tokens: result.optimized_tokens,
                        content: result.optimized_content,
                    });
                }
            }
        }

        if included.is_empty() {
            return Err(ExportError::EmptyExport(
                "all files were skipped or empty (filters, skip-empty, or token budget)"
                    .to_owned(),
            ));
        }

        let optimization = pipeline.stats();
        let total_tokens = pipeline.accepted_tokens();
        let content = render_document(&config, &included, total_tokens, optimization.as_ref())?;

        info!(
            "Exported {} files ({} skipped, ~{} tokens)",
            included.len(),
            skipped.len(),
            total_tokens
        );

        Ok(ExportDocument {
            content,
            included,
            skipped,
            total_tokens,
            optimization,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<String>,
    total_files: usize,
    estimated_tokens: usize,
    files: &'a [IncludedFile],
    #[serde(skip_serializing_if = "Option::is_none")]
    optimization_stats: Option<&'a OptimizationStats>,
}

pub fn render_document(
    config: &ExportConfig,
    included: &[IncludedFile],
    total_tokens: usize,
    optimization: Option<&OptimizationStats>,
) -> Result<String, ExportError> {
    let generated_at = config
        .include_metadata
        .then(|| Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string());

    match config.output_format {
        OutputFormat::Json => {
            let document = JsonDocument {
                generated_at,
                total_files: included.len(),
                estimated_tokens: total_tokens,
                files: included,
                optimization_stats: optimization,
            };
            Ok(serde_json::to_string_pretty(&document)?)
        }
        OutputFormat::Markdown | OutputFormat::Xml => {
            let mut out = String::new();
            out.push_str(config.title.trim_end());
            out.push('\n');
            if let Some(timestamp) = generated_at {
                out.push_str(&format!(
                    "Generated: {} | Files: {} | Estimated tokens: {}\n",
                    timestamp,
                    included.len(),
                    total_tokens
                ));
            }
            out.push('\n');
            for file in included {
                let section = match config.output_format {
                    OutputFormat::Xml => render_xml_file(&file.path, &file.content),
                    _ => render_markdown_file(&file.path, &file.content),
                };
                out.push_str(&section);
            }
            Ok(out)
        }
    }
}

/// Where a rendered document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
    Clipboard,
}

pub async fn deliver(content: &str, target: &OutputTarget) -> Result<(), ExportError> {
    match target {
        OutputTarget::Stdout => {
            println!("{}", content);
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    ExportError::OutputWriteError(parent.display().to_string(), e.to_string())
                })?;
            }
            tokio::fs::write(path, content).await.map_err(|e| {
                ExportError::OutputWriteError(path.display().to_string(), e.to_string())
            })?;
            info!("Wrote export to {}", path.display());
        }
        OutputTarget::Clipboard => {
            let mut clipboard =
                Clipboard::new().map_err(|e| ExportError::ClipboardInitError(e.to_string()))?;
            clipboard
                .set_text(content.to_owned())
                .map_err(|e| ExportError::ClipboardWriteError(e.to_string()))?;
            info!("Export copied to clipboard.");
        }
    }
    Ok(())
}

pub async fn export_files(request: ExportRequest) -> Result<ExportDocument, ExportError> {
    let exporter = BasicExporter::new();
    exporter.export(request).await
}
