mod commands;
mod ui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use telemetry_metrics::DEFAULT_THRESHOLD_MS;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[derive(Parser)]
#[command(name = "telemetry")]
#[command(about = "Regional latency and uptime metrics over a static telemetry dataset", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the metrics HTTP API
    Serve {
        /// Service config file (YAML, TOML, or JSON)
        #[arg(short, long, env = "TELEMETRY_CONFIG")]
        config: Option<PathBuf>,

        /// Listen address, overrides the config file
        #[arg(short, long, env = "TELEMETRY_LISTEN")]
        listen: Option<String>,

        /// Dataset file, overrides the config file
        #[arg(short, long, env = "TELEMETRY_DATASET")]
        dataset: Option<PathBuf>,
    },

    /// Compute metrics for regions straight from a dataset file
    Query {
        /// Path to dataset file
        #[arg(short, long)]
        dataset: PathBuf,

        /// Region to report on (repeatable); defaults to every region
        #[arg(short, long = "region")]
        regions: Vec<String>,

        /// Latency threshold in milliseconds
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD_MS, allow_negative_numbers = true)]
        threshold: f64,

        /// Output format (cli, json, markdown, prometheus)
        #[arg(short, long, default_value = "cli")]
        format: String,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the regions in a dataset file
    Regions {
        /// Path to dataset file
        #[arg(short, long)]
        dataset: PathBuf,
    },

    /// Validate a dataset file
    Validate {
        /// Path to dataset file
        dataset_file: PathBuf,

        /// Force a format (json, yaml, toml) instead of using the file extension
        #[arg(long)]
        format: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let _guard = init_logging(log_level, &cli.log_format, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Serve {
            config,
            listen,
            dataset,
        } => {
            commands::serve::execute(config, listen, dataset).await?;
        }

        Commands::Query {
            dataset,
            regions,
            threshold,
            format,
            output,
        } => {
            commands::query::execute(dataset, regions, threshold, format, output).await?;
        }

        Commands::Regions { dataset } => {
            commands::regions::execute(dataset).await?;
        }

        Commands::Validate {
            dataset_file,
            format,
        } => {
            commands::validate::execute(dataset_file, format).await?;
        }
    }

    Ok(())
}

/// The returned guard flushes the file writer on drop; keep it alive for the whole run.
fn init_logging(
    level: Level,
    format: &str,
    log_file: Option<&Path>,
) -> anyhow::Result<Option<WorkerGuard>> {
    let (writer, guard) = match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(writer);

    match format {
        "json" => builder.json().init(),
        "text" => builder.init(),
        other => anyhow::bail!("Unknown log format: {}", other),
    }

    Ok(guard)
}
