use serde::{Deserialize, Serialize};
use std::fmt;

/// Visible rows per reel.
pub const ROWS: usize = 3;
/// Number of reels, one per grid column.
pub const COLUMNS: usize = 5;
/// Symbols on every reel band.
pub const BAND_LENGTH: usize = 20;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Bar,
    Leaf,
    Seven,
    Bell,
    Orange,
    Apple,
    Lemon,
    Cherries,
}

impl Symbol {
    /// Every symbol in scan order. The win evaluator walks this list as-is.
    pub const ALL: [Symbol; 8] = [
        Symbol::Bar,
        Symbol::Leaf,
        Symbol::Seven,
        Symbol::Bell,
        Symbol::Orange,
        Symbol::Apple,
        Symbol::Lemon,
        Symbol::Cherries,
    ];

    pub fn to_index(self) -> u8 {
        match self {
            Symbol::Bar => 0,
            Symbol::Leaf => 1,
            Symbol::Seven => 2,
            Symbol::Bell => 3,
            Symbol::Orange => 4,
            Symbol::Apple => 5,
            Symbol::Lemon => 6,
            Symbol::Cherries => 7,
        }
    }

    /// Asset key used by the display layer.
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Bar => "bar",
            Symbol::Leaf => "leaf",
            Symbol::Seven => "seven",
            Symbol::Bell => "bell",
            Symbol::Orange => "orange",
            Symbol::Apple => "apple",
            Symbol::Lemon => "lemon",
            Symbol::Cherries => "cherries",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One circular reel strip.
pub type ReelBand = [Symbol; BAND_LENGTH];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelsConfig {
    pub reels: [ReelBand; COLUMNS], // one band per column
}

impl ReelsConfig {
    /// Symbol shown at `(column, row)` when the reel sits at `offset`.
    ///
    /// The band wraps, so any offset is accepted; column and row must be
    /// inside the 5x3 window.
    pub fn symbol_at(&self, column: usize, row: usize, offset: usize) -> Symbol {
        assert!(column < COLUMNS, "reel column {column} out of range");
        assert!(row < ROWS, "reel row {row} out of range");
        self.reels[column][(offset + row) % BAND_LENGTH]
    }

    /// The three symbols visible on one reel, top to bottom.
    pub fn window(&self, column: usize, offset: usize) -> [Symbol; ROWS] {
        std::array::from_fn(|row| self.symbol_at(column, row, offset))
    }

    pub fn default_5x3() -> Self {
        use Symbol::*;
        Self {
            reels: [
                [
                    Leaf, Lemon, Lemon, Bar, Bar, Orange, Bar, Bell, Orange, Seven, Leaf, Seven,
                    Cherries, Bell, Orange, Leaf, Cherries, Orange, Lemon, Leaf,
                ],
                [
                    Bar, Apple, Lemon, Apple, Orange, Orange, Cherries, Orange, Orange, Bell,
                    Lemon, Leaf, Orange, Lemon, Bar, Orange, Apple, Cherries, Lemon, Apple,
                ],
                [
                    Orange, Leaf, Lemon, Cherries, Seven, Leaf, Apple, Leaf, Leaf, Orange, Seven,
                    Orange, Bar, Apple, Seven, Leaf, Bell, Bar, Apple, Cherries,
                ],
                [
                    Leaf, Apple, Seven, Apple, Cherries, Cherries, Seven, Apple, Cherries, Bar,
                    Orange, Bar, Apple, Seven, Apple, Lemon, Leaf, Orange, Seven, Apple,
                ],
                [
                    Lemon, Cherries, Leaf, Seven, Bell, Bar, Seven, Leaf, Leaf, Bell, Bell, Leaf,
                    Apple, Bell, Bar, Apple, Bar, Apple, Bell, Cherries,
                ],
            ],
        }
    }
}

impl Default for ReelsConfig {
    fn default() -> Self {
        Self::default_5x3()
    }
}
