//! Branch predictor trace replay CLI.
//!
//! This binary evaluates a predictor against a recorded branch trace. It performs:
//! 1. **Configuration:** Loads a JSON config (optional) and applies command-line overrides.
//! 2. **Replay:** Feeds every trace record through predict/update.
//! 3. **Reporting:** Prints accuracy statistics as text or JSON.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bpsim_core::config::{BranchPredictor as BpType, Config};
use bpsim_core::sim::{replay, trace};
use bpsim_core::{BranchPredictor, BranchPredictorWrapper};

#[derive(Parser, Debug)]
#[command(
    name = "bpsim",
    author,
    version,
    about = "Branch predictor trace replay",
    long_about = "Replay a branch trace through a gshare or tournament predictor and report prediction accuracy.\n\nTrace format: one `<pc> <next_pc> <taken>` record per line, addresses in hex.\n\nExamples:\n  bpsim run -t traces/loop.trace\n  bpsim run -t traces/loop.trace -p tournament --btb-size 1024 --bhr-size 12\n  bpsim run -t traces/loop.trace -c configs/gshare.json --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a branch trace and print prediction statistics.
    Run {
        /// Branch trace to replay.
        #[arg(short, long)]
        trace: PathBuf,

        /// JSON configuration file; command-line options override it.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Predictor algorithm (gshare or tournament).
        #[arg(short, long)]
        predictor: Option<BpType>,

        /// Branch Target Buffer entries (power of two).
        #[arg(long)]
        btb_size: Option<u32>,

        /// Global history register width in bits (1-32).
        #[arg(long)]
        bhr_size: Option<u32>,

        /// Print statistics as JSON instead of the text report.
        #[arg(long)]
        json: bool,

        /// Increase log verbosity (-v info, -vv debug, -vvv trace).
        #[arg(short, long, action = ArgAction::Count)]
        verbose: u8,
    },
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8, trace_predictions: bool) {
    let level = match verbose {
        _ if trace_predictions => "trace",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn Error>> {
    match path {
        Some(p) => Ok(Config::from_json(&fs::read_to_string(p)?)?),
        None => Ok(Config::default()),
    }
}

fn cmd_run(
    trace_path: &Path,
    config_path: Option<&Path>,
    predictor: Option<BpType>,
    btb_size: Option<u32>,
    bhr_size: Option<u32>,
    json: bool,
    verbose: u8,
) -> Result<(), Box<dyn Error>> {
    let mut config = load_config(config_path)?;
    if let Some(kind) = predictor {
        config.predictor.kind = kind;
    }
    if let Some(size) = btb_size {
        config.predictor.btb_size = size;
    }
    if let Some(bits) = bhr_size {
        config.predictor.bhr_size = bits;
    }
    config.validate()?;

    init_tracing(verbose, config.general.trace_predictions);

    let mut bp = BranchPredictorWrapper::new(&config.predictor)?;
    let records = trace::load(trace_path)?;
    info!(
        "{}: btb_size={}, bhr_size={}, {} records from {}",
        bp.name(),
        config.predictor.btb_size,
        config.predictor.bhr_size,
        records.len(),
        trace_path.display()
    );

    let stats = replay(&mut bp, records);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        stats.print(bp.name());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            trace,
            config,
            predictor,
            btb_size,
            bhr_size,
            json,
            verbose,
        } => cmd_run(
            &trace,
            config.as_deref(),
            predictor,
            btb_size,
            bhr_size,
            json,
            verbose,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            ExitCode::FAILURE
        }
    }
}
