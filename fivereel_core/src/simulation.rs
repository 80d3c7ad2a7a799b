//! Batch spins for checking a configuration's payout profile.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

use crate::engine::{EngineParams, SlotMachine, SpinOutcome};
use crate::rng::PositionSource;
use crate::symbols::Symbol;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolStats {
    pub wins: u64,
    pub points: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimulationReport {
    pub spins: u64,
    pub total_points: u64,
    pub winning_spins: u64,
    pub by_symbol: BTreeMap<Symbol, SymbolStats>,
}

impl SimulationReport {
    fn record(&mut self, outcome: &SpinOutcome) {
        self.spins += 1;
        self.total_points += u64::from(outcome.total);
        if !outcome.wins.is_empty() {
            self.winning_spins += 1;
        }
        for win in &outcome.wins {
            let stats = self.by_symbol.entry(win.symbol).or_default();
            stats.wins += 1;
            stats.points += u64::from(win.points);
        }
    }

    /// Share of spins with at least one win.
    pub fn hit_frequency(&self) -> f64 {
        if self.spins == 0 {
            return 0.0;
        }
        self.winning_spins as f64 / self.spins as f64
    }

    pub fn mean_points(&self) -> f64 {
        if self.spins == 0 {
            return 0.0;
        }
        self.total_points as f64 / self.spins as f64
    }
}

pub fn simulate<S: PositionSource + ?Sized>(
    params: &EngineParams,
    source: &mut S,
    spins: u64,
) -> SimulationReport {
    simulate_with(params, source, spins, |_, _| {})
}

/// Like [`simulate`], calling `each` with the spin number and its outcome.
pub fn simulate_with<S, F>(
    params: &EngineParams,
    source: &mut S,
    spins: u64,
    mut each: F,
) -> SimulationReport
where
    S: PositionSource + ?Sized,
    F: FnMut(u64, &SpinOutcome),
{
    let mut machine = SlotMachine::new(params.clone());
    let mut report = SimulationReport::default();
    for n in 0..spins {
        let outcome = machine.spin(source);
        report.record(outcome);
        each(n, outcome);
    }
    info!(
        spins = report.spins,
        total_points = report.total_points,
        hit_frequency = report.hit_frequency(),
        "simulation finished"
    );
    report
}
