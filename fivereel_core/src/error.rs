use crate::symbols::Symbol;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("at least one payline is required")]
    NoPaylines,
    #[error("payline {payline} references grid index {index} (grid has 15 cells)")]
    PaylineOutOfGrid { payline: usize, index: usize },
    #[error("payline {payline} uses grid index {index} for column {column}")]
    PaylineColumn { payline: usize, column: usize, index: usize },
    #[error("payout for {symbol} x{count}: only runs of 3 to 5 pay")]
    PayoutCount { symbol: Symbol, count: u8 },
    #[error("payout for {symbol} x{count} is listed more than once")]
    DuplicatePayout { symbol: Symbol, count: u8 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
