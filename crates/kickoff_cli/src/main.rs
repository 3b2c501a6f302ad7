//! Kickoff CLI
//!
//! 요청 JSON 파일로 경기 하나 또는 여러 경기를 시뮬레이션한다.
//!
//! ```text
//! kickoff simulate --request match.json --pretty
//! kickoff live --request match.json
//! kickoff batch --request match.json --count 1000 --config arcade.yaml
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use kickoff_core::{simulate_batch, simulate_request, EngineConfig, MatchEngine, MatchRequest, MatchResult};

#[derive(Parser)]
#[command(name = "kickoff")]
#[command(about = "Zone-based football match simulator", long_about = None)]
struct Cli {
    /// Debug-level logging unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one match and print the result JSON
    Simulate {
        /// Match request JSON file
        #[arg(long)]
        request: PathBuf,

        /// Engine config override (.yaml/.yml or .json)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Step through one match, printing commentary as it happens
    Live {
        #[arg(long)]
        request: PathBuf,

        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run many matches in parallel (seeds request.seed .. request.seed + count)
    Batch {
        #[arg(long)]
        request: PathBuf,

        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, default_value = "100")]
        count: usize,
    },
}

/// Aggregate over a batch run.
#[derive(Debug, Default, Serialize)]
struct BatchSummary {
    matches: usize,
    home_wins: usize,
    draws: usize,
    away_wins: usize,
    avg_home_goals: f64,
    avg_away_goals: f64,
}

impl BatchSummary {
    fn from_results(results: &[MatchResult]) -> Self {
        let mut summary = BatchSummary { matches: results.len(), ..Default::default() };
        if results.is_empty() {
            return summary;
        }
        let (mut home_goals, mut away_goals) = (0u64, 0u64);
        for r in results {
            home_goals += r.score_home as u64;
            away_goals += r.score_away as u64;
            match r.score_home.cmp(&r.score_away) {
                std::cmp::Ordering::Greater => summary.home_wins += 1,
                std::cmp::Ordering::Equal => summary.draws += 1,
                std::cmp::Ordering::Less => summary.away_wins += 1,
            }
        }
        summary.avg_home_goals = home_goals as f64 / results.len() as f64;
        summary.avg_away_goals = away_goals as f64 / results.len() as f64;
        summary
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn load_request(path: &Path) -> Result<MatchRequest> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading request {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing request {}", path.display()))
}

fn load_config(path: &Path) -> Result<EngineConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let config: EngineConfig = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&raw).with_context(|| format!("parsing YAML config {}", path.display()))?
        }
        Some("json") => {
            serde_json::from_str(&raw).with_context(|| format!("parsing JSON config {}", path.display()))?
        }
        other => bail!("unsupported config extension: {:?}", other),
    };
    config.validate().context("config override rejected")?;
    Ok(config)
}

/// Request file plus optional override; the override wins over an embedded config.
fn prepare(request: &Path, config: Option<&Path>) -> Result<MatchRequest> {
    let mut request = load_request(request)?;
    if let Some(path) = config {
        request.config = Some(load_config(path)?);
        debug!(config = %path.display(), "config override loaded");
    }
    Ok(request)
}

/// Tick `engine` to full time, handing each new log line to `emit`.
/// Rendered commentary already carries the minute.
fn play_live(engine: &mut MatchEngine, mut emit: impl FnMut(&str)) {
    let mut printed = 0;
    while !engine.is_finished() {
        let state = engine.tick();
        for event in &state.log[printed..] {
            emit(&event.text);
        }
        printed = state.log.len();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Simulate { request, config, out, pretty } => {
            let request = prepare(&request, config.as_deref())?;
            let response = simulate_request(&request).context("simulation failed")?;
            let json = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            match out {
                Some(path) => {
                    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
                    info!(out = %path.display(), "result written");
                }
                None => println!("{}", json),
            }
        }

        Commands::Live { request, config } => {
            let request = prepare(&request, config.as_deref())?;
            let mut engine = MatchEngine::new(&request.setup, request.seed, request.config.unwrap_or_default())
                .context("invalid match setup")?;
            play_live(&mut engine, |line| println!("{}", line));
            let state = engine.state();
            println!("{} {} - {} {}", state.home.name, state.score_home, state.score_away, state.away.name);
        }

        Commands::Batch { request, config, count } => {
            let request = prepare(&request, config.as_deref())?;
            let config = request.config.clone().unwrap_or_default();
            let results =
                simulate_batch(&request.setup, request.seed, count, &config).context("batch simulation failed")?;
            let summary = BatchSummary::from_results(&results);
            info!(matches = summary.matches, home_wins = summary.home_wins, draws = summary.draws, "batch done");
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
