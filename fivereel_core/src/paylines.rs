use serde::{Deserialize, Serialize};

use crate::grid::GRID_SIZE;
use crate::symbols::COLUMNS;

/// Grid indices inspected by one line, column 0 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payline(pub [usize; COLUMNS]);

impl Payline {
    /// A straight line across `row`.
    pub const fn straight(row: usize) -> Self {
        let base = row * COLUMNS;
        Payline([base, base + 1, base + 2, base + 3, base + 4])
    }

    pub fn indices(&self) -> &[usize; COLUMNS] {
        &self.0
    }

    /// First cell that is off the grid or sits in the wrong column, as
    /// `(column, index)`.
    pub fn misplaced_cell(&self) -> Option<(usize, usize)> {
        self.0
            .iter()
            .enumerate()
            .find(|&(column, &index)| index >= GRID_SIZE || index % COLUMNS != column)
            .map(|(column, &index)| (column, index))
    }
}

/// The seven standard lines. A win's payline number is its position here plus one.
pub fn standard_paylines() -> Vec<Payline> {
    vec![
        Payline::straight(1),
        Payline::straight(0),
        Payline::straight(2),
        Payline([0, 1, 7, 13, 14]),
        Payline([10, 11, 7, 3, 4]),
        Payline([0, 6, 12, 8, 4]),  // V
        Payline([10, 6, 2, 8, 14]), // inverted V
    ]
}
