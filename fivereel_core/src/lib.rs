pub mod engine;
pub mod error;
pub mod evaluator;
pub mod grid;
pub mod paylines;
pub mod paytable;
pub mod rng;
pub mod simulation;
pub mod symbols;

pub use crate::engine::{
    evaluate_positions, spin_with_seeds, verify_positions, EngineParams, SlotMachine,
    SpinObserver, SpinOutcome,
};
pub use crate::error::{ConfigError, ConfigResult};
pub use crate::evaluator::{anchored_run, evaluate, total_points, WinRecord};
pub use crate::grid::{Grid, Positions, GRID_SIZE};
pub use crate::paylines::{standard_paylines, Payline};
pub use crate::paytable::{Paytable, PaytableEntry, MIN_RUN};
pub use crate::rng::{derive_floats, derive_hash_hex, PositionSource, ProvablyFairRng};
pub use crate::simulation::{simulate, simulate_with, SimulationReport, SymbolStats};
pub use crate::symbols::{ReelBand, ReelsConfig, Symbol, BAND_LENGTH, COLUMNS, ROWS};
