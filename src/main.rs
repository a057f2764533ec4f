use clap::{Parser, Subcommand};
use codedump::config::{ExportConfig, OptimizerConfig, OutputFormat};
use codedump::export::{deliver, export_files, ExportRequest, OutputTarget};
use codedump::language::extension_of;
use codedump::logger::initialize_logger;
use codedump::optimizer::ContentOptimizer;
use codedump::reporting::{print_stats, savings_summary};
use codedump::tokens::{count_bpe_tokens, estimate_tokens};
use codedump::ExportError;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,
    #[command(subcommand)]
    cmd: SubCommands,
}

#[derive(Subcommand, Debug, Clone)]
enum SubCommands {
    /// Export files into one document
    Export(ExportArgs),
    /// Optimize a single file and print the result
    Optimize(OptimizeArgs),
}

#[derive(Parser, Debug, Clone)]
struct OptimizerArgs {
    #[arg(long, help = "Enable the context optimizer")]
    optimize: bool,
    #[arg(long, conflicts_with = "optimize", help = "Disable the context optimizer")]
    no_optimize: bool,
    #[arg(short = 'b', long, help = "Token budget; 0 or less means unlimited")]
    budget: Option<i64>,
    #[arg(long, help = "Keep ordinary comments")]
    keep_comments: bool,
    #[arg(long, help = "Keep doc comments and docstrings")]
    keep_docstrings: bool,
    #[arg(long, help = "Leave whitespace untouched")]
    no_minify: bool,
    #[arg(long, help = "Never truncate large files")]
    no_truncate: bool,
    #[arg(long, help = "Maximum lines kept per file")]
    max_lines: Option<i64>,
    #[arg(long, help = "Do not prefer recently modified files")]
    no_recent: bool,
}

impl OptimizerArgs {
    fn apply(&self, config: &mut OptimizerConfig) {
        if self.optimize {
            config.enabled = true;
        }
        if self.no_optimize {
            config.enabled = false;
        }
        if let Some(budget) = self.budget {
            config.max_token_budget = budget;
        }
        if self.keep_comments {
            config.remove_comments = false;
        }
        if self.keep_docstrings {
            config.remove_docstrings = false;
        }
        if self.no_minify {
            config.minify_whitespace = false;
        }
        if self.no_truncate {
            config.truncate_large_files = false;
        }
        if let Some(max_lines) = self.max_lines {
            config.max_lines_per_file = max_lines;
        }
        if self.no_recent {
            config.prioritize_recent_files = false;
        }
    }
}

#[derive(Parser, Debug, Clone)]
struct ExportArgs {
    #[arg(required = true, help = "Files, directories or glob patterns")]
    paths: Vec<String>,
    #[arg(short = 'r', long, default_value = ".")]
    root: PathBuf,
    #[arg(short = 'c', long, help = "Configuration file (defaults to <root>/codedump.json)")]
    config: Option<PathBuf>,
    #[arg(short = 'e', long = "ext", help = "Only include these extensions")]
    extensions: Vec<String>,
    #[arg(short = 'f', long, value_enum)]
    format: Option<OutputFormat>,
    #[arg(short = 'o', long, conflicts_with = "clipboard")]
    output: Option<PathBuf>,
    #[arg(long, help = "Copy the document to the clipboard")]
    clipboard: bool,
    #[arg(long = "ignore", help = "Extra patterns to ignore (e.g. 'docs/**')")]
    ignore_patterns: Vec<String>,
    #[arg(long, help = "Keep files that are empty after optimization")]
    include_empty: bool,
    #[arg(long, help = "Add a generation header to the document")]
    metadata: bool,
    #[arg(short = 'M', long, help = "Report exact BPE tokens for this model")]
    model: Option<String>,
    #[arg(short = 's', long, help = "Do not print statistics")]
    no_stats: bool,
    #[command(flatten)]
    optimizer: OptimizerArgs,
}

#[derive(Parser, Debug, Clone)]
struct OptimizeArgs {
    file: PathBuf,
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
    #[command(flatten)]
    optimizer: OptimizerArgs,
}

async fn run_export(args: ExportArgs) -> Result<(), ExportError> {
    let mut config = ExportConfig::load(args.config.as_deref(), &args.root)?;
    args.optimizer.apply(&mut config.ai_context_optimizer);
    if !args.extensions.is_empty() {
        config.extensions = args.extensions.clone();
    }
    if let Some(format) = args.format {
        config.output_format = format;
    }
    config.ignore_patterns.extend(args.ignore_patterns.iter().cloned());
    if args.include_empty {
        config.skip_empty_files = false;
    }
    if args.metadata {
        config.include_metadata = true;
    }

    let request = ExportRequest {
        root: args.root.clone(),
        inputs: args.paths.clone(),
        config,
    };
    let document = export_files(request).await?;

    if !args.no_stats {
        print_stats(&document);
        if let Some(model) = &args.model {
            let exact = count_bpe_tokens(model, &document.content)?;
            info!("Exact {} tokens: {}", model, exact);
        }
    }

    let target = match (&args.output, args.clipboard) {
        (Some(path), _) => OutputTarget::File(path.clone()),
        (None, true) => OutputTarget::Clipboard,
        (None, false) => OutputTarget::Stdout,
    };
    deliver(&document.content, &target).await
}

async fn run_optimize(args: OptimizeArgs) -> Result<(), ExportError> {
    let root = args
        .file
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let mut config = ExportConfig::load(args.config.as_deref(), &root)?.ai_context_optimizer;
    config.enabled = true;
    args.optimizer.apply(&mut config);

    let path = args.file.to_string_lossy().into_owned();
    let content = tokio::fs::read_to_string(&args.file)
        .await
        .map_err(|e| ExportError::FileReadError(path.clone(), e.to_string()))?;

    let mut optimizer = ContentOptimizer::new(config);
    let optimized = optimizer.optimize(&content, &path, &extension_of(&path));
    let stats = optimizer.stats(estimate_tokens(&content), estimate_tokens(&optimized));

    print!("{}", optimized);
    info!("{}", savings_summary(&stats));
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli_args = CliArgs::parse();
    initialize_logger(cli_args.verbose);

    let result = match cli_args.cmd {
        SubCommands::Export(args) => run_export(args).await,
        SubCommands::Optimize(args) => run_optimize(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
