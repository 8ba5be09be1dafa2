//! muninn — compute metrics over recorded LLM traces.
//!
//! Reads a trace as JSON (`{"llm_calls": [...]}`) from a file or stdin and
//! prints the requested metrics, or a full trace record for export.

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use muninn::{Config, MetricAggregator, MetricRegistry, Trace, TraceRecord};

/// Muninn CLI
#[derive(Parser)]
#[command(name = "muninn")]
#[command(version = muninn::PKG_VERSION)]
#[command(about = "Compute cost, latency and token metrics over LLM traces")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long, env = "MUNINN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available metrics
    Metrics,

    /// Compute metrics over a trace
    Compute {
        /// Trace JSON file (or omit to read from stdin)
        trace: Option<PathBuf>,
        /// Metric to compute (repeatable; default: from config)
        #[arg(short, long = "metric")]
        metrics: Vec<String>,
        /// Emit a full trace record with this name instead of bare metrics
        #[arg(long)]
        record: Option<String>,
        /// Model name to stamp on the trace record
        #[arg(long, requires = "record")]
        model: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = Config::load_or_default(args.config.as_deref())?;

    // Initialise tracing (default from config; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .init();

    debug!(version = muninn::version_string(), "muninn starting");

    // Built-in registration failing means the binary itself is broken.
    let registry = MetricRegistry::with_builtins()?;

    match args.command {
        Command::Metrics => {
            for name in registry.get_all_names() {
                println!("{name}");
            }
        }
        Command::Compute {
            trace,
            metrics,
            record,
            model,
            format,
        } => {
            let trace = read_trace(trace.as_deref())?;
            let names = config.select_metrics(metrics);

            let aggregator = MetricAggregator::new(&registry, &names)?;
            let results = aggregator.compute_all(&trace);
            info!(calls = trace.len(), metrics = ?names, "computed metrics");

            match record {
                Some(name) => {
                    let mut record = TraceRecord::new(name, trace, results);
                    if let Some(model) = model {
                        record = record.with_model(model);
                    }
                    match format {
                        Format::Json => println!("{}", record.to_json()?),
                        Format::Text => println!("{}", record.to_json_pretty()?),
                    }
                }
                None => match format {
                    Format::Json => println!("{}", serde_json::to_string(&results)?),
                    Format::Text => {
                        for (name, value) in results.iter() {
                            println!("{name}: {value}");
                        }
                    }
                },
            }
        }
    }

    Ok(())
}

/// Read a trace from `path`, or from stdin when no path is given.
fn read_trace(path: Option<&std::path::Path>) -> Result<Trace, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Trace::from_reader(BufReader::new(File::open(path)?))?),
        None => {
            if io::stdin().is_terminal() {
                return Err("no trace file given and stdin is a terminal".into());
            }
            Ok(Trace::from_reader(io::stdin().lock())?)
        }
    }
}
