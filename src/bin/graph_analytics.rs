//! Graph Analytics command line front end.
//!
//! Loads a `{"nodes": [...], "edges": [...]}` document and prints one report
//! as JSON on stdout. Logs go to stderr so reports can be piped.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default: warn)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development (default: pretty)
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin graph-analytics -- overview graph.json
//! ```

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use graph_analytics::{Graph, GraphError, GRAPH_ANALYTICS_SCHEMA_VERSION};

/// Report to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Report {
    /// Forward and reverse adjacency lists.
    Adjacency,
    /// Ancestors and descendants of every node.
    Reachability,
    /// Top-down value propagation.
    Propagation,
    /// Type counts and transition probabilities.
    Types,
    /// Overview statistics.
    Overview,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// Parse a log format name; anything other than "json" is pretty.
    fn from_name(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Runtime configuration resolved from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Config {
    log_format: LogFormat,
}

impl Config {
    /// Read `LOG_FORMAT` (default: pretty).
    fn from_env() -> Self {
        Self::from_log_format(std::env::var("LOG_FORMAT").ok().as_deref())
    }

    fn from_log_format(log_format: Option<&str>) -> Self {
        Self {
            log_format: log_format.map(LogFormat::from_name).unwrap_or(LogFormat::Pretty),
        }
    }

    /// Apply command-line overrides.
    fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(log_format) = cli.log_format {
            self.log_format = log_format;
        }
        self
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "graph-analytics: adjacency, reachability, propagation and type statistics",
    long_about = None
)]
struct Cli {
    /// Report to print.
    #[arg(value_enum)]
    report: Report,

    /// Graph document to analyse.
    path: PathBuf,

    /// Emit compact JSON instead of pretty-printed JSON.
    #[arg(long)]
    compact: bool,

    /// Log format (overrides `LOG_FORMAT`).
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

/// Envelope written to stdout.
#[derive(Serialize)]
struct ReportOutput<T: Serialize> {
    schema_version: &'static str,
    graph_fingerprint: String,
    report: T,
}

/// Initialize the tracing subscriber with JSON or pretty format
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "graph_analytics=warn".into());

    match format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_span_events(FmtSpan::CLOSE),
                )
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_current_span(true)
                        .flatten_event(true),
                )
                .init();
        }
    }
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn render<T: Serialize>(graph: &Graph, report: T, compact: bool) -> Result<String, GraphError> {
    let output = ReportOutput {
        schema_version: GRAPH_ANALYTICS_SCHEMA_VERSION,
        graph_fingerprint: graph.fingerprint()?,
        report,
    };
    let rendered = if compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    Ok(rendered)
}

fn run(cli: &Cli) -> Result<String, GraphError> {
    let graph = Graph::from_path(&cli.path)?;
    info!(
        path = %cli.path.display(),
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "graph loaded"
    );

    match cli.report {
        Report::Adjacency => render(&graph, graph.adjacency(), cli.compact),
        Report::Reachability => render(&graph, graph.reachability()?, cli.compact),
        Report::Propagation => render(&graph, graph.propagate()?, cli.compact),
        Report::Types => render(&graph, graph.type_aggregate()?, cli.compact),
        Report::Overview => render(&graph, graph.overview()?, cli.compact),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::from_env().with_overrides(&cli);
    init_tracing(config.log_format);

    let start = Instant::now();
    match run(&cli) {
        Ok(rendered) => {
            println!("{}", rendered);
            info!(
                report = ?cli.report,
                latency_ms = elapsed_millis(start.elapsed()),
                "report completed"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, integrity = e.is_integrity(), "report failed");
            Err(e.into())
        }
    }
}
