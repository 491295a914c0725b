//! Providers of monetary entries for the dashboard summary.
//!
//! The summary is served from a configured CSV export when one is available and
//! falls back to the built-in demo dataset otherwise.

use crate::domain::MonetaryEntry;
use async_trait::async_trait;
use std::fmt;

pub mod csv_file;
pub mod demo;
pub mod fallback;

pub use csv_file::CsvEntrySource;
pub use demo::DemoDataSource;
pub use fallback::FallbackSource;

/// Source of monetary entries, in the order they should be consolidated.
#[async_trait]
pub trait EntrySource: Send + Sync + fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn load_entries(&self) -> Result<Vec<MonetaryEntry>, DataSourceError>;
}

/// Error type for entry source operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSourceError {
    /// The backing file could not be read.
    Io(String),
    /// A row could not be parsed (bad CSV, amount or timestamp).
    Parse(String),
}

impl fmt::Display for DataSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSourceError::Io(msg) => write!(f, "IO error: {}", msg),
            DataSourceError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for DataSourceError {}
