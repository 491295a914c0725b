//! Built-in demo dataset served when no real entries are configured.

use super::{DataSourceError, EntrySource};
use crate::domain::{Decimal, MonetaryEntry};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};

#[derive(Debug, Clone, Default)]
pub struct DemoDataSource;

impl DemoDataSource {
    pub fn new() -> Self {
        Self
    }

    /// A month of typical household movements.
    pub fn entries() -> Vec<MonetaryEntry> {
        // (inflow, cents, label, day of month)
        const ROWS: [(bool, i64, &str, u32); 6] = [
            (true, 4_500_00, "Salário", 5),
            (true, 800_00, "Freelance", 12),
            (false, 1_200_00, "Aluguel", 10),
            (false, 350_75, "Conta de luz", 15),
            (false, 89_90, "Supermercado", 18),
            (false, 39_90, "Streaming", 20),
        ];

        ROWS.iter()
            .map(|&(inflow, cents, label, day)| {
                let amount = Decimal::new(rust_decimal::Decimal::new(cents, 2));
                let entry = if inflow {
                    MonetaryEntry::inflow(amount)
                } else {
                    MonetaryEntry::outflow(amount)
                }
                .with_label(label);
                match Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).single() {
                    Some(at) => entry.with_occurred_at(at),
                    None => entry,
                }
            })
            .collect()
    }
}

#[async_trait]
impl EntrySource for DemoDataSource {
    fn name(&self) -> &'static str {
        "demo"
    }

    async fn load_entries(&self) -> Result<Vec<MonetaryEntry>, DataSourceError> {
        Ok(Self::entries())
    }
}
