//! codegrade - generate and grade source artifacts.
//!
//! ## Commands
//!
//! - `evaluate`: run the evaluation pipeline over an existing artifact and
//!   print the JSON report
//! - `run`: generate code for a problem, save it, then evaluate it

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, Level};

use codegrade_core::{init_tracing, EvaluatorSet, QualityEvaluator, ToolchainConfig};
use codegrade_gen::{new_generator, save_generated_code, GeneratorConfig, Problem};

/// Default per-tool timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Parser)]
#[command(name = "codegrade")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate and grade source artifacts", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an existing artifact and print the JSON report
    Evaluate {
        /// Path to the artifact file
        #[arg(short, long)]
        artifact: PathBuf,

        /// Per-tool timeout in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,
    },

    /// Generate code for a problem, save it, and evaluate it
    Run {
        /// Path to a problem definition (JSON)
        #[arg(short, long)]
        problem: PathBuf,

        /// Model to use for generation
        #[arg(short, long, default_value = "gpt-4o-mini")]
        model: String,

        /// Directory for generated artifacts
        #[arg(long, default_value = "out/generated")]
        out_dir: PathBuf,

        /// Maximum tokens for generation
        #[arg(long, default_value = "2000")]
        max_tokens: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    init_tracing(cli.json, level);

    match cli.command {
        Commands::Evaluate {
            artifact,
            timeout_secs,
        } => cmd_evaluate(&artifact, timeout_secs).await,
        Commands::Run {
            problem,
            model,
            out_dir,
            max_tokens,
        } => cmd_run(&problem, &model, &out_dir, max_tokens).await,
    }
}

async fn cmd_evaluate(artifact: &Path, timeout_secs: u64) -> Result<()> {
    let toolchain = ToolchainConfig::default().with_timeout(timeout_secs);
    let evaluators = EvaluatorSet::new(vec![Box::new(QualityEvaluator::new(toolchain))])?;

    let report = evaluators.evaluate_artifact(artifact).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn cmd_run(
    problem_path: &Path,
    model: &str,
    out_dir: &Path,
    max_tokens: u32,
) -> Result<()> {
    let api_key = std::env::var("OPENAI_API_KEY")
        .context("OPENAI_API_KEY environment variable is required")?;

    let raw = std::fs::read_to_string(problem_path)
        .with_context(|| format!("failed to read problem file {}", problem_path.display()))?;
    let problem: Problem = serde_json::from_str(&raw).context("invalid problem definition")?;

    let config = GeneratorConfig {
        provider: "openai".to_string(),
        model: model.to_string(),
        api_key,
        max_tokens,
    };
    let generator = new_generator(config)?;

    info!(title = %problem.title, model = %model, "generating code");
    let code = generator
        .generate_code(&problem)
        .await
        .context("code generation failed")?;

    let artifact = save_generated_code(&code, &problem, model, out_dir)?;

    cmd_evaluate(&artifact, DEFAULT_TIMEOUT_SECS).await
}
