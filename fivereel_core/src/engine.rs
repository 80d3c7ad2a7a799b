use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use crate::{
    error::{ConfigError, ConfigResult},
    evaluator::{evaluate, total_points, WinRecord},
    grid::{Grid, Positions, GRID_SIZE},
    paylines::{standard_paylines, Payline},
    paytable::{Paytable, MIN_RUN},
    rng::{PositionSource, ProvablyFairRng},
    symbols::{ReelsConfig, COLUMNS},
};

/// Static tables a machine plays with. Never changes once a machine is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineParams {
    pub reels: ReelsConfig,
    pub paylines: Vec<Payline>,
    pub paytable: Paytable,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            reels: ReelsConfig::default_5x3(),
            paylines: standard_paylines(),
            paytable: Paytable::standard(),
        }
    }
}

impl EngineParams {
    /// Parses and validates params from JSON. Band and reel counts are fixed
    /// by the array types, so a short band fails here as a parse error.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let params: EngineParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading engine params");
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.paylines.is_empty() {
            return Err(ConfigError::NoPaylines);
        }
        for (n, line) in self.paylines.iter().enumerate() {
            match line.misplaced_cell() {
                None => {}
                Some((_, index)) if index >= GRID_SIZE => {
                    return Err(ConfigError::PaylineOutOfGrid { payline: n + 1, index });
                }
                Some((column, index)) => {
                    return Err(ConfigError::PaylineColumn { payline: n + 1, column, index });
                }
            }
        }
        let mut seen = HashSet::new();
        for e in &self.paytable.0 {
            if !(MIN_RUN..=COLUMNS as u8).contains(&e.count) {
                return Err(ConfigError::PayoutCount { symbol: e.symbol, count: e.count });
            }
            if !seen.insert((e.symbol, e.count)) {
                return Err(ConfigError::DuplicatePayout { symbol: e.symbol, count: e.count });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub positions: Positions,
    pub grid: Grid,
    pub wins: Vec<WinRecord>,
    pub total: u32,
}

/// Assembles the grid for `positions` and scores it.
pub fn evaluate_positions(params: &EngineParams, positions: Positions) -> SpinOutcome {
    let grid = Grid::assemble(&params.reels, &positions);
    let wins = evaluate(&grid, &params.paylines, &params.paytable);
    let total = total_points(&wins);
    SpinOutcome {
        positions,
        grid,
        wins,
        total,
    }
}

/// Display side of the machine: receives every result, including the startup one.
pub trait SpinObserver {
    fn on_spin_result(&mut self, grid: &Grid, wins: &[WinRecord], total: u32);
}

#[derive(Debug, Clone)]
pub struct SlotMachine {
    params: EngineParams,
    outcome: SpinOutcome,
}

impl SlotMachine {
    /// Builds a machine showing the all-zero reel positions, already scored.
    /// Nothing is published; use [`SlotMachine::with_observer`] or
    /// [`SlotMachine::publish`] to show the startup result.
    pub fn new(params: EngineParams) -> Self {
        let outcome = evaluate_positions(&params, Positions::ZERO);
        info!(
            paylines = params.paylines.len(),
            startup_total = outcome.total,
            "slot machine ready"
        );
        Self { params, outcome }
    }

    /// Like [`SlotMachine::new`], then hands the startup result to `observer`.
    pub fn with_observer<O>(params: EngineParams, observer: &mut O) -> Self
    where
        O: SpinObserver + ?Sized,
    {
        let machine = Self::new(params);
        machine.publish(observer);
        machine
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Result currently on display.
    pub fn outcome(&self) -> &SpinOutcome {
        &self.outcome
    }

    pub fn spin<S: PositionSource + ?Sized>(&mut self, source: &mut S) -> &SpinOutcome {
        let positions = Positions::new(source.draw_positions().0);
        self.outcome = evaluate_positions(&self.params, positions);
        debug!(
            positions = ?self.outcome.positions.0,
            wins = self.outcome.wins.len(),
            total = self.outcome.total,
            "spin"
        );
        &self.outcome
    }

    /// Spins and hands the result to `observer`.
    pub fn trigger_spin<S, O>(&mut self, source: &mut S, observer: &mut O)
    where
        S: PositionSource + ?Sized,
        O: SpinObserver + ?Sized,
    {
        self.spin(source);
        self.publish(observer);
    }

    /// Re-sends the current result, e.g. the startup grid before any spin.
    pub fn publish<O: SpinObserver + ?Sized>(&self, observer: &mut O) {
        let o = &self.outcome;
        observer.on_spin_result(&o.grid, &o.wins, o.total);
    }
}

/// Convenience: one provably-fair spin straight from the seeds.
pub fn spin_with_seeds(
    server_seed: &str,
    client_seed: &str,
    nonce: u64,
    params: &EngineParams,
) -> SpinOutcome {
    let rng = ProvablyFairRng::new(server_seed, client_seed, nonce);
    evaluate_positions(params, rng.positions())
}

/// Checks that `expected` is what the seeds produce for `nonce`.
pub fn verify_positions(
    server_seed: &str,
    client_seed: &str,
    nonce: u64,
    expected: &Positions,
) -> bool {
    ProvablyFairRng::new(server_seed, client_seed, nonce).positions() == *expected
}
