//! citadel-sim - headless batch simulator for the citadel card engine.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use citadel::sim::{run_batch, SimConfig};
use citadel::{CardCatalog, Ruleset};

/// Run many matches under the reference policy and report balance
/// statistics.
#[derive(Parser, Debug)]
#[command(name = "citadel-sim")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of matches to run
    #[arg(default_value = "1")]
    matches: u32,

    /// Base seed (default: derived from the clock)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Worker threads (default: one per core)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Production-phase ceiling per match before a runaway fault
    #[arg(long, default_value = "2000")]
    ceiling: u32,

    /// Stop at the first faulted match instead of logging and continuing
    #[arg(long)]
    fail_fast: bool,

    /// Card catalogue JSON file (default: the built-in set)
    #[arg(long)]
    cards: Option<std::path::PathBuf>,

    /// Show a progress bar
    #[arg(short, long)]
    progress: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Some(num_threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let catalog = match &args.cards {
        Some(path) => {
            let json = match std::fs::read_to_string(path) {
                Ok(json) => json,
                Err(e) => {
                    eprintln!("error: cannot read {}: {e}", path.display());
                    return ExitCode::FAILURE;
                }
            };
            match CardCatalog::from_json(&json) {
                Ok(catalog) => catalog,
                Err(e) => {
                    eprintln!("error: invalid catalogue {}: {e}", path.display());
                    return ExitCode::FAILURE;
                }
            }
        }
        None => citadel::standard(),
    };
    let rules = Arc::new(Ruleset::new(catalog));

    let base_seed = args.seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    let config = SimConfig {
        matches: args.matches,
        base_seed,
        ceiling: args.ceiling,
        fail_fast: args.fail_fast,
        progress: args.progress,
    };

    if matches!(args.format, OutputFormat::Text) {
        println!("Running {} simulated games (seed {base_seed})...", args.matches);
    }
    let report = match run_batch(&rules, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match args.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: cannot serialize report: {e}");
                return ExitCode::FAILURE;
            }
        },
    }

    if report.has_faults() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
