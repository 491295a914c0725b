//! Pure decimal calculators: consolidated balance, currency formatting,
//! compound interest and transaction statistics.
//!
//! Every calculator owns an immutable [`DecimalContext`]; none of them logs or
//! touches shared state.

pub mod balance;
pub mod context;
pub mod format;
pub mod interest;
pub mod stats;

pub use balance::{consolidate, BalanceCalculator, ConsolidatedResult};
pub use context::{DecimalContext, RoundingMode};
pub use format::{format_brl, format_brl_decimal};
pub use interest::{compound, InterestCalculator};
pub use stats::{aggregate, StatsAggregator, TransactionStats};
