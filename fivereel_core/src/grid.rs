use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::symbols::{ReelsConfig, Symbol, BAND_LENGTH, COLUMNS, ROWS};

pub const GRID_SIZE: usize = ROWS * COLUMNS;

/// Offset of every reel into its band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Positions(pub [usize; COLUMNS]);

impl Positions {
    pub const ZERO: Positions = Positions([0; COLUMNS]);

    /// Builds a position vector, folding each offset into the band.
    pub fn new(offsets: [usize; COLUMNS]) -> Self {
        Self(offsets.map(|o| o % BAND_LENGTH))
    }
}

/// Row-major snapshot of the 5x3 window: `index = row * COLUMNS + column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid([Symbol; GRID_SIZE]);

impl Grid {
    /// Reads every cell from the reels at `positions`. Always a full rebuild.
    pub fn assemble(reels: &ReelsConfig, positions: &Positions) -> Self {
        Grid(std::array::from_fn(|i| {
            let (row, column) = (i / COLUMNS, i % COLUMNS);
            reels.symbol_at(column, row, positions.0[column])
        }))
    }

    pub fn from_cells(cells: [Symbol; GRID_SIZE]) -> Self {
        Grid(cells)
    }

    pub fn cells(&self) -> &[Symbol; GRID_SIZE] {
        &self.0
    }

    pub fn get(&self, row: usize, column: usize) -> Symbol {
        assert!(row < ROWS && column < COLUMNS, "cell ({row}, {column}) out of range");
        self.0[row * COLUMNS + column]
    }

    pub fn row(&self, row: usize) -> [Symbol; COLUMNS] {
        std::array::from_fn(|column| self.get(row, column))
    }

    /// Rows of symbol indices, the numeric form used for export.
    pub fn symbol_indices(&self) -> Vec<Vec<u8>> {
        (0..ROWS)
            .map(|r| self.row(r).iter().map(|s| s.to_index()).collect())
            .collect()
    }
}

impl Index<usize> for Grid {
    type Output = Symbol;

    fn index(&self, index: usize) -> &Symbol {
        assert!(index < GRID_SIZE, "grid index {index} out of range");
        &self.0[index]
    }
}
