use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use sentiment_engine::config::create_config_template;
use sentiment_engine::{load_config, BatchAggregator, BatchResult, EngineConfig, NewsItem};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "sentiment-engine", about = "Financial news sentiment scoring")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Overrides the configured log level
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a single text (reads stdin when --text is omitted)
    Analyze {
        #[arg(short, long)]
        text: Option<String>,
    },
    /// Analyze a JSON array of {"title", "content"} news records ("-" for stdin)
    Batch { input: PathBuf },
    /// Write a commented configuration template
    InitConfig { path: PathBuf },
}

/// Batch output with run metadata
#[derive(Serialize)]
struct BatchReport {
    run_id: Uuid,
    generated_at: DateTime<Utc>,
    lexicon_version: String,
    baseline: String,
    processing_time_ms: u64,
    #[serde(flatten)]
    result: BatchResult,
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Command::InitConfig { path } = &cli.command {
        create_config_template(path)?;
        println!("Wrote configuration template to {}", path.display());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    // Initialize logging; stdout is reserved for JSON output
    tracing_subscriber::fmt()
        .with_max_level(config.logging.max_level()?)
        .with_writer(std::io::stderr)
        .init();

    let analyzer = config.build_analyzer()?;

    match cli.command {
        Command::Analyze { text } => {
            let text = match text {
                Some(text) => text,
                None => read_input(Path::new("-"))?,
            };
            let result = analyzer.analyze_detailed(&text);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Command::Batch { input } => {
            let start = Instant::now();
            let content = read_input(&input)?;
            let items: Vec<NewsItem> = serde_json::from_str(&content)
                .with_context(|| format!("Invalid news records in {}", input.display()))?;

            info!("Analyzing {} news items", items.len());

            let lexicon_version = analyzer.lexicon().version().to_string();
            let baseline = analyzer.baseline_name().to_string();
            let aggregator = BatchAggregator::new(analyzer, config.batch.clone());
            let result = aggregator.analyze(items).await;

            let report = BatchReport {
                run_id: Uuid::new_v4(),
                generated_at: Utc::now(),
                lexicon_version,
                baseline,
                processing_time_ms: start.elapsed().as_millis() as u64,
                result,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Command::InitConfig { .. } => {}
    }

    Ok(())
}
