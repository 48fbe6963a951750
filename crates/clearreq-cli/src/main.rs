mod display;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clearreq_ai::recommendations::improvement_recommendations;
use clearreq_ai::{Analyzer, RandomSource, SeededSource, ThreadSource};
use clearreq_llm::{ProviderConfig, anthropic, openai, select_strategy};
use clearreq_server::{AppState, DEFAULT_ADDR, DEFAULT_CORS_ORIGINS, ServerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clearreq", version, about = "Extract and review requirements from documents")]
struct Cli {
    #[command(flatten)]
    providers: ProviderArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ProviderArgs {
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_MODEL", default_value = openai::DEFAULT_MODEL, global = true)]
    openai_model: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = openai::DEFAULT_BASE_URL, global = true)]
    openai_base_url: String,

    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true, global = true)]
    anthropic_api_key: Option<String>,

    #[arg(long, env = "ANTHROPIC_MODEL", default_value = anthropic::DEFAULT_MODEL, global = true)]
    anthropic_model: String,

    #[arg(
        long,
        env = "ANTHROPIC_BASE_URL",
        default_value = anthropic::DEFAULT_BASE_URL,
        global = true
    )]
    anthropic_base_url: String,

    /// Per-request timeout for remote enhancement, in seconds.
    #[arg(long, env = "CLEARREQ_AI_TIMEOUT_SECS", default_value_t = 20, global = true)]
    ai_timeout_secs: u64,

    /// Maximum remote enhancement requests in flight.
    #[arg(long, env = "CLEARREQ_AI_CONCURRENCY", default_value_t = 4, global = true)]
    ai_concurrency: usize,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a .txt or .pdf document and print the report
    Analyze {
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Seed the random source for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the HTTP API
    Serve {
        #[arg(long, env = "CLEARREQ_ADDR", default_value = DEFAULT_ADDR)]
        addr: SocketAddr,

        /// Allowed browser origin (repeatable, or comma-separated in the env var).
        #[arg(long = "cors-origin", env = "CLEARREQ_CORS_ORIGINS", value_delimiter = ',')]
        cors_origins: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

impl ProviderArgs {
    fn config(&self) -> ProviderConfig {
        ProviderConfig {
            openai_api_key: self.openai_api_key.clone(),
            openai_model: self.openai_model.clone(),
            openai_base_url: self.openai_base_url.clone(),
            anthropic_api_key: self.anthropic_api_key.clone(),
            anthropic_model: self.anthropic_model.clone(),
            anthropic_base_url: self.anthropic_base_url.clone(),
        }
    }

    fn analyzer(&self) -> anyhow::Result<Analyzer> {
        let analyzer = Analyzer::new(select_strategy(&self.config()))
            .context("compiling requirement patterns")?
            .with_concurrency(self.ai_concurrency)
            .with_timeout(Duration::from_secs(self.ai_timeout_secs));
        Ok(analyzer)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `--format json` output stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("clearreq v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Analyze { file, format, seed } => {
            analyze(&cli.providers, &file, format, seed).await
        }
        Command::Serve { addr, cors_origins } => serve(&cli.providers, addr, cors_origins).await,
    }
}

async fn analyze(
    providers: &ProviderArgs,
    file: &Path,
    format: Format,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let bytes = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let filename = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let text = clearreq_ingest::extract_text(&filename, &bytes)
        .with_context(|| format!("extracting text from {filename}"))?;

    let analyzer = providers.analyzer()?;
    let mut rng: Box<dyn RandomSource + Send> = match seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(ThreadSource),
    };
    let report = analyzer.analyze(&filename, &text, rng.as_mut()).await;

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Table => {
            let patterns = analyzer.ambiguity_patterns(&report.requirements, rng.as_mut());
            let recommendations = improvement_recommendations(&report.requirements);
            display::print_report(&report)?;
            display::print_review(&patterns, &recommendations)?;
        }
    }
    Ok(())
}

async fn serve(
    providers: &ProviderArgs,
    addr: SocketAddr,
    mut cors_origins: Vec<String>,
) -> anyhow::Result<()> {
    cors_origins.retain(|o| !o.trim().is_empty());
    if cors_origins.is_empty() {
        cors_origins = DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect();
    }

    let state = AppState {
        analyzer: Arc::new(providers.analyzer()?),
    };
    clearreq_server::run_server(state, ServerConfig { addr, cors_origins }).await?;
    Ok(())
}
