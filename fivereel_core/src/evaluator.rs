//! Payline win evaluation.
//!
//! For every symbol (in [`Symbol::ALL`] order) and every payline (in list
//! order) the evaluator finds the leftmost cell holding that symbol and counts
//! how many consecutive cells, from there to the right, still hold it. A run
//! of [`MIN_RUN`] or more produces a [`WinRecord`]. Cells left of the first
//! occurrence are never revisited, so a line like `bar lemon bar bar bar`
//! scores a bar run of one, not three.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::paylines::Payline;
use crate::paytable::{Paytable, MIN_RUN};
use crate::symbols::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinRecord {
    pub payline: usize, // 1-based
    pub symbol: Symbol,
    pub count: u8,
    pub points: u32,
}

/// Length of the run of `symbol` anchored at its first occurrence on `line`.
pub fn anchored_run(grid: &Grid, line: &Payline, symbol: Symbol) -> u8 {
    let cells = line.indices();
    let Some(start) = cells.iter().position(|&i| grid[i] == symbol) else {
        return 0;
    };
    cells[start..].iter().take_while(|&&i| grid[i] == symbol).count() as u8
}

/// All wins on `grid`, grouped by symbol then by payline.
pub fn evaluate(grid: &Grid, paylines: &[Payline], paytable: &Paytable) -> Vec<WinRecord> {
    let mut wins = Vec::new();
    for symbol in Symbol::ALL {
        for (n, line) in paylines.iter().enumerate() {
            let count = anchored_run(grid, line, symbol);
            if count >= MIN_RUN {
                wins.push(WinRecord {
                    payline: n + 1,
                    symbol,
                    count,
                    points: paytable.points(symbol, count),
                });
            }
        }
    }
    wins
}

pub fn total_points(wins: &[WinRecord]) -> u32 {
    wins.iter().map(|w| w.points).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Positions, GRID_SIZE};
    use crate::paylines::standard_paylines;
    use crate::symbols::ReelsConfig;
    use Symbol::*;

    fn grid_with_top_row(top: [Symbol; 5], fill: [Symbol; 10]) -> Grid {
        let mut cells = [Apple; GRID_SIZE];
        cells[..5].copy_from_slice(&top);
        cells[5..].copy_from_slice(&fill);
        Grid::from_cells(cells)
    }

    #[test]
    fn all_bar_grid_pays_every_line() {
        let grid = Grid::from_cells([Bar; GRID_SIZE]);
        let lines = standard_paylines();
        let wins = evaluate(&grid, &lines, &Paytable::standard());
        assert_eq!(wins.len(), lines.len());
        for (n, win) in wins.iter().enumerate() {
            assert_eq!(win.payline, n + 1);
            assert_eq!((win.symbol, win.count, win.points), (Bar, 5, 50));
        }
        assert_eq!(total_points(&wins), 350);
    }

    #[test]
    fn run_is_anchored_at_first_occurrence() {
        let grid = grid_with_top_row([Bar, Lemon, Bar, Bar, Bar], [Apple; 10]);
        let top = Payline::straight(0);
        assert_eq!(anchored_run(&grid, &top, Bar), 1);
        assert_eq!(anchored_run(&grid, &top, Lemon), 1);
        let wins = evaluate(&grid, &[top], &Paytable::standard());
        assert!(wins.is_empty());
    }

    #[test]
    fn run_may_start_mid_line() {
        let grid = grid_with_top_row([Lemon, Bell, Bell, Bell, Bell], [Apple; 10]);
        let top = Payline::straight(0);
        assert_eq!(anchored_run(&grid, &top, Bell), 4);
        let wins = evaluate(&grid, &[top], &Paytable::standard());
        assert_eq!(
            wins,
            vec![WinRecord { payline: 1, symbol: Bell, count: 4, points: 10 }]
        );
    }

    #[test]
    fn missing_symbol_scores_zero() {
        let grid = Grid::from_cells([Apple; GRID_SIZE]);
        assert_eq!(anchored_run(&grid, &Payline::straight(1), Seven), 0);
    }

    #[test]
    fn no_runs_means_no_wins() {
        let grid = Grid::from_cells([
            Bar, Leaf, Bar, Leaf, Bar, //
            Seven, Bell, Seven, Bell, Seven, //
            Orange, Apple, Orange, Apple, Orange,
        ]);
        let wins = evaluate(&grid, &standard_paylines(), &Paytable::standard());
        assert!(wins.is_empty());
        assert_eq!(total_points(&wins), 0);
    }

    #[test]
    fn several_symbols_and_lines_win_together() {
        // top row: leaf x3 then bell bell; bottom row: bell x5
        let grid = Grid::from_cells([
            Leaf, Leaf, Leaf, Bell, Bell, //
            Apple, Orange, Cherries, Orange, Apple, //
            Bell, Bell, Bell, Bell, Bell,
        ]);
        let wins = evaluate(&grid, &standard_paylines(), &Paytable::standard());
        assert_eq!(
            wins,
            vec![
                WinRecord { payline: 2, symbol: Leaf, count: 3, points: 5 },
                WinRecord { payline: 3, symbol: Bell, count: 5, points: 15 },
            ]
        );
        assert_eq!(total_points(&wins), 20);
    }

    #[test]
    fn unpriced_run_still_recorded() {
        let grid = Grid::from_cells([Seven; GRID_SIZE]);
        let wins = evaluate(&grid, &[Payline::straight(0)], &Paytable(vec![]));
        assert_eq!(wins, vec![WinRecord { payline: 1, symbol: Seven, count: 5, points: 0 }]);
    }

    #[test]
    fn zero_positions_evaluation() {
        let grid = Grid::assemble(&ReelsConfig::default_5x3(), &Positions::ZERO);
        let wins = evaluate(&grid, &standard_paylines(), &Paytable::standard());
        assert_eq!(wins, vec![WinRecord { payline: 3, symbol: Lemon, count: 3, points: 1 }]);
    }
}
