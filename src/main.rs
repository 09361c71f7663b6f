use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use pagesim::common::config::SimulationConfig;
use pagesim::input::parse_capacity;
use pagesim::report::{
    render_summary_table, render_trace, summaries_to_csv, summaries_to_json, summarize_timed,
    timed_run_all,
};
use pagesim::Policy;

#[derive(Parser)]
#[command(name = "pagesim")]
#[command(about = "Simulate FIFO, LRU and Optimal page replacement", long_about = None)]
#[command(version)]
struct Cli {
    /// Comma-separated page references, e.g. "7,0,1,2,0,3"
    #[arg(short, long)]
    pages: Option<String>,

    /// Number of frames
    #[arg(short, long, allow_hyphen_values = true)]
    capacity: Option<String>,

    /// Policy to run (FIFO, LRU, Optimal); repeat for several, defaults to all
    #[arg(long = "policy")]
    policies: Vec<Policy>,

    /// JSON config file; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Log every eviction to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Summary table
    Table,
    /// Frame occupancy per policy, then the summary table
    Trace,
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if let Some(pages) = cli.pages {
        config.pages = pages;
    }
    if !cli.policies.is_empty() {
        config.policies = cli.policies;
    }

    // Validate everything before running anything.
    let refs = config.reference_string()?;
    let capacity = match &cli.capacity {
        Some(raw) => parse_capacity(raw)?,
        None => config.capacity()?,
    };

    let runs = timed_run_all(&config.policies, &refs, capacity);
    let summaries = summarize_timed(&runs);

    match cli.format {
        Format::Table => print!("{}", render_summary_table(&summaries)),
        Format::Trace => {
            for timed in &runs {
                println!("{}", render_trace(&timed.result));
            }
            print!("{}", render_summary_table(&summaries));
        }
        Format::Csv => print!("{}", summaries_to_csv(&summaries)),
        Format::Json => println!("{}", summaries_to_json(&summaries)?),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "pagesim=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
