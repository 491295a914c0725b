//! Entries exported as CSV (`kind,amount,label,occurred_at`).

use super::{DataSourceError, EntrySource};
use crate::domain::{Decimal, EntryKind, MonetaryEntry};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CsvEntrySource {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Row {
    kind: String,
    amount: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    occurred_at: Option<String>,
}

impl CsvEntrySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse CSV bytes with a header row.
    ///
    /// Unknown kinds are kept (and later skipped by the calculator); a bad
    /// amount or timestamp fails the whole file.
    pub fn parse_csv(csv_bytes: &[u8]) -> Result<Vec<MonetaryEntry>, DataSourceError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(csv_bytes);

        let mut entries = Vec::new();
        for (idx, record) in reader.deserialize::<Row>().enumerate() {
            let line = idx + 2;
            let row = record.map_err(|e| DataSourceError::Parse(e.to_string()))?;
            let amount = Decimal::from_str_canonical(&row.amount)
                .map_err(|e| DataSourceError::Parse(format!("line {}: {}", line, e)))?;

            let kind = EntryKind::from(row.kind);
            let mut entry = MonetaryEntry::new(kind, amount);
            if let Some(label) = row.label.filter(|s| !s.is_empty()) {
                entry = entry.with_label(label);
            }
            if let Some(raw) = row.occurred_at.filter(|s| !s.is_empty()) {
                let at = DateTime::parse_from_rfc3339(&raw).map_err(|e| {
                    DataSourceError::Parse(format!(
                        "line {}: invalid occurred_at {:?}: {}",
                        line, raw, e
                    ))
                })?;
                entry = entry.with_occurred_at(at.with_timezone(&Utc));
            }
            entries.push(entry);
        }

        Ok(entries)
    }
}

#[async_trait]
impl EntrySource for CsvEntrySource {
    fn name(&self) -> &'static str {
        "csv"
    }

    async fn load_entries(&self) -> Result<Vec<MonetaryEntry>, DataSourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| DataSourceError::Io(format!("{}: {}", self.path.display(), e)))?;
        Self::parse_csv(&bytes)
    }
}
