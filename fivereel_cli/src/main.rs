use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use std::fmt::Write as _;
use std::io::BufRead;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fivereel_core::{
    simulate_with, spin_with_seeds, verify_positions, EngineParams, Grid, PositionSource,
    Positions, ProvablyFairRng, SlotMachine, SpinObserver, SpinOutcome, WinRecord, BAND_LENGTH,
    COLUMNS, ROWS,
};

#[derive(Parser)]
#[command(name = "fivereel", about = "5x3 slot machine: play, verify and simulate")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Engine params JSON; built-in reels, paylines and paytable when absent
    #[arg(long, global = true, value_parser, env = "FIVEREEL_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal: Enter spins, q quits
    Play {
        /// Seed for reproducible sessions
        #[arg(long)]
        seed: Option<u64>,
    },
    /// One provably-fair spin
    Spin {
        #[arg(long)]
        server_seed: String,
        #[arg(long)]
        client_seed: String,
        #[arg(long, default_value_t = 0)]
        nonce: u64,
        /// Print the full outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check reel positions against the seeds that should have produced them
    Verify {
        #[arg(long)]
        server_seed: String,
        #[arg(long)]
        client_seed: String,
        #[arg(long)]
        nonce: u64,
        /// Five comma separated offsets, e.g. 3,17,0,9,12
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        positions: Vec<usize>,
    },
    /// Run many spins and report the payout profile
    Simulate {
        #[arg(long, default_value_t = 10_000)]
        spins: u64,
        #[arg(long)]
        seed: Option<u64>,
        /// Write one CSV row per spin
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Print the effective engine params as JSON
    Params,
}

/// Text front end: prints the grid and the wins list after every result.
struct Terminal;

impl SpinObserver for Terminal {
    fn on_spin_result(&mut self, grid: &Grid, wins: &[WinRecord], total: u32) {
        print!("{}", render_grid(grid));
        print!("{}", render_wins(wins, total));
    }
}

fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for row in 0..ROWS {
        let cells: Vec<String> = grid.row(row).iter().map(|s| format!("{s:<8}")).collect();
        let _ = writeln!(out, "| {} |", cells.join(" | "));
    }
    out
}

fn render_wins(wins: &[WinRecord], total: u32) -> String {
    let mut out = format!("Total Wins: {total}\n");
    for win in wins {
        let _ = writeln!(
            out,
            "- payline {}, {} x{}, {}",
            win.payline, win.symbol, win.count, win.points
        );
    }
    out
}

fn parse_positions(values: &[usize]) -> anyhow::Result<Positions> {
    let offsets: [usize; COLUMNS] = values
        .try_into()
        .map_err(|_| anyhow!("expected {COLUMNS} positions, got {}", values.len()))?;
    if let Some(bad) = offsets.iter().find(|&&o| o >= BAND_LENGTH) {
        bail!("position {bad} is outside the band (0..{BAND_LENGTH})");
    }
    Ok(Positions(offsets))
}

fn csv_record(n: u64, outcome: &SpinOutcome) -> [String; 4] {
    let positions: Vec<String> = outcome.positions.0.iter().map(|p| p.to_string()).collect();
    let wins: Vec<String> = outcome
        .wins
        .iter()
        .map(|w| format!("{}:{}:{}:{}", w.payline, w.symbol, w.count, w.points))
        .collect();
    [
        n.to_string(),
        positions.join(" "),
        outcome.total.to_string(),
        wins.join(";"),
    ]
}

fn play<S: PositionSource + ?Sized>(params: EngineParams, source: &mut S) -> anyhow::Result<()> {
    let mut terminal = Terminal;
    let mut machine = SlotMachine::with_observer(params, &mut terminal);
    println!("[Enter] spin, [q] quit");
    for line in std::io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        match line.trim() {
            "q" | "quit" => break,
            "" => machine.trigger_spin(source, &mut terminal),
            other => warn!("unknown input {other:?}"),
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let params = match &cli.config {
        Some(path) => EngineParams::load(path)
            .with_context(|| format!("loading engine params from {}", path.display()))?,
        None => EngineParams::default(),
    };

    match cli.command {
        Commands::Play { seed } => match seed {
            Some(seed) => play(params, &mut StdRng::seed_from_u64(seed))?,
            None => play(params, &mut rand::thread_rng())?,
        },
        Commands::Spin {
            server_seed,
            client_seed,
            nonce,
            json,
        } => {
            let hash = ProvablyFairRng::new(&server_seed, &client_seed, nonce).server_seed_hash_hex();
            let outcome = spin_with_seeds(&server_seed, &client_seed, nonce, &params);
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!(
                    "server_seed_hash={} nonce={} positions={:?}",
                    hash, nonce, outcome.positions.0
                );
                Terminal.on_spin_result(&outcome.grid, &outcome.wins, outcome.total);
            }
        }
        Commands::Verify {
            server_seed,
            client_seed,
            nonce,
            positions,
        } => {
            let expected = parse_positions(&positions)?;
            if !verify_positions(&server_seed, &client_seed, nonce, &expected) {
                bail!("positions {:?} do not match seeds at nonce {}", expected.0, nonce);
            }
            println!("verified: positions {:?} match nonce {}", expected.0, nonce);
        }
        Commands::Simulate {
            spins,
            seed,
            csv: csv_path,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut wtr = match &csv_path {
                Some(path) => {
                    let mut w = csv::Writer::from_path(path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    w.write_record(["spin", "positions", "total", "wins"])?;
                    Some(w)
                }
                None => None,
            };
            let mut write_err = None;
            let report = simulate_with(&params, &mut rng, spins, |n, outcome| {
                if write_err.is_some() {
                    return;
                }
                if let Some(w) = wtr.as_mut() {
                    if let Err(e) = w.write_record(csv_record(n, outcome)) {
                        write_err = Some(e);
                    }
                }
            });
            if let Some(e) = write_err {
                return Err(e.into());
            }
            if let (Some(mut w), Some(path)) = (wtr, csv_path) {
                w.flush()?;
                info!("exported {} rows to {}", report.spins, path.display());
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
            println!(
                "hit_frequency={:.4} mean_points={:.4}",
                report.hit_frequency(),
                report.mean_points()
            );
        }
        Commands::Params => {
            println!("{}", serde_json::to_string_pretty(&params)?);
        }
    }

    Ok(())
}
