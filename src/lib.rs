pub mod api;
pub mod calc;
pub mod config;
pub mod datasource;
pub mod domain;
pub mod error;

pub use calc::{
    aggregate, compound, consolidate, format_brl, format_brl_decimal, BalanceCalculator,
    ConsolidatedResult, DecimalContext, InterestCalculator, RoundingMode, StatsAggregator,
    TransactionStats,
};
pub use config::Config;
pub use datasource::{CsvEntrySource, DataSourceError, DemoDataSource, EntrySource, FallbackSource};
pub use domain::{
    Decimal, Direction, Entry, EntryKind, MonetaryEntry, Movement, RecordType, TransactionRecord,
};
pub use error::{AppError, CalcError};
