pub mod config;
pub mod docstring;
pub mod errors;
pub mod export;
pub mod ignore;
pub mod language;
pub mod logger;
pub mod optimizer;
pub mod pipeline;
pub mod prioritizer;
pub mod reporting;
pub mod scanner;
pub mod tokens;
pub mod trie;
pub mod truncate;
pub mod utils;
pub mod whitespace;

pub use config::{ExportConfig, OptimizerConfig, OutputFormat};
pub use errors::ExportError;
pub use export::{export_files, ExportDocument, ExportRequest};
pub use optimizer::{ContentOptimizer, OptimizationStats};
pub use pipeline::{build_pipeline, optimize_content, would_exceed_budget, OptimizationPipeline};
pub use prioritizer::{prioritize, FsStatProvider, StatProvider};
pub use tokens::estimate_tokens;
