use crate::symbols::Symbol;
use serde::{Deserialize, Serialize};

/// Shortest run that pays.
pub const MIN_RUN: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaytableEntry {
    pub symbol: Symbol,
    pub count: u8,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paytable(pub Vec<PaytableEntry>);

impl Paytable {
    /// Points for `count` matching `symbol`s. Anything not in the table pays 0.
    pub fn points(&self, symbol: Symbol, count: u8) -> u32 {
        if count < MIN_RUN {
            return 0;
        }
        self.0
            .iter()
            .find(|e| e.symbol == symbol && e.count == count)
            .map_or(0, |e| e.points)
    }

    pub fn standard() -> Self {
        let rows: [(Symbol, [u32; 3]); 8] = [
            (Symbol::Bar, [10, 20, 50]),
            (Symbol::Leaf, [5, 10, 20]),
            (Symbol::Seven, [5, 10, 15]),
            (Symbol::Bell, [5, 10, 15]),
            (Symbol::Orange, [2, 5, 10]),
            (Symbol::Apple, [1, 2, 5]),
            (Symbol::Lemon, [1, 2, 3]),
            (Symbol::Cherries, [1, 2, 3]),
        ];
        Self(
            rows.iter()
                .flat_map(|&(symbol, pays)| {
                    (MIN_RUN..).zip(pays).map(move |(count, points)| PaytableEntry {
                        symbol,
                        count,
                        points,
                    })
                })
                .collect(),
        )
    }
}

impl Default for Paytable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_lookup() {
        let table = Paytable::standard();
        assert_eq!(table.0.len(), 24);
        assert_eq!(table.points(Symbol::Bar, 5), 50);
        assert_eq!(table.points(Symbol::Orange, 4), 5);
        assert_eq!(table.points(Symbol::Cherries, 3), 1);
    }

    #[test]
    fn misses_pay_nothing() {
        let table = Paytable::standard();
        assert_eq!(table.points(Symbol::Bar, 2), 0);
        assert_eq!(table.points(Symbol::Bar, 6), 0);
        assert_eq!(Paytable(vec![]).points(Symbol::Leaf, 3), 0);
    }
}
