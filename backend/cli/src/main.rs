mod config;

use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;

use linelog::{Context, LineLogger, LogLevel, LoggerOptions, load_options};

use config::Config;

#[derive(Parser)]
#[command(name = "linelog")]
#[command(about = "Append leveled log records to daily log files")]
#[command(version)]
struct Cli {
    /// Log directory, or stream://stdout / stream://stderr
    #[arg(short, long, global = true)]
    dir: Option<PathBuf>,

    /// Minimum severity to write (emergency .. debug)
    #[arg(short, long, global = true)]
    threshold: Option<LogLevel>,

    /// YAML file with logger options
    #[arg(short, long, global = true)]
    options: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format and append a message
    Log {
        level: LogLevel,
        message: String,
        /// Context as a JSON object
        #[arg(short, long)]
        context: Option<String>,
    },
    /// Append a line verbatim
    Write { line: String },
    /// Print the resolved log file path
    Path,
}

fn main() -> Result<()> {
    let config = Config::from_env();

    // Diagnostics go to stderr so stream://stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.diagnostics)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let dir = cli.dir.unwrap_or(config.dir);
    let threshold = cli.threshold.unwrap_or(config.threshold);
    let options = match cli.options.or(config.options) {
        Some(path) => load_options(&path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => LoggerOptions::default(),
    };

    let mut logger = LineLogger::with_options(&dir, threshold, options)
        .with_context(|| format!("Failed to open logger at {}", dir.display()))?;
    debug!(path = %logger.log_file_path().display(), "Logger opened");

    match cli.command {
        Commands::Log { level, message, context } => {
            let context = parse_context(context.as_deref())?;
            logger.log(level, &message, &context)?;
        }
        Commands::Write { line } => {
            let line = if line.ends_with('\n') { line } else { format!("{line}\n") };
            logger.write(&line)?;
        }
        Commands::Path => println!("{}", logger.log_file_path().display()),
    }

    logger.flush()?;
    Ok(())
}

fn parse_context(raw: Option<&str>) -> Result<Context> {
    let Some(raw) = raw else {
        return Ok(Context::new());
    };
    let value: serde_json::Value = serde_json::from_str(raw).context("Context is not valid JSON")?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => bail!("Context must be a JSON object, got {other}"),
    }
}
