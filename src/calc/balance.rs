use serde::{Deserialize, Serialize};

use super::format::format_brl;
use super::DecimalContext;
use crate::domain::{Decimal, Direction, Entry, MonetaryEntry, Movement};
use crate::error::CalcError;

/// Totals over a set of entries, rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedResult {
    /// Total inflow minus total outflow.
    pub net_balance: Decimal,
    pub total_inflow: Decimal,
    pub total_outflow: Decimal,
    /// Net balance as Brazilian Real, formatted before rounding.
    pub formatted_balance: String,
    /// Entries ignored because their kind was not recognised.
    pub skipped: usize,
}

/// Consolidated balance over monetary entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceCalculator {
    ctx: DecimalContext,
}

impl BalanceCalculator {
    pub fn new(ctx: DecimalContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> DecimalContext {
        self.ctx
    }

    /// Sum inflows and outflows in input order.
    ///
    /// Entries with an unrecognised kind are skipped and counted in
    /// [`ConsolidatedResult::skipped`]. The formatted balance is produced from
    /// the unrounded net balance; only the numeric fields are rounded.
    pub fn calculate(&self, entries: &[MonetaryEntry]) -> Result<ConsolidatedResult, CalcError> {
        self.consolidate(entries.iter().map(MonetaryEntry::to_movement))
    }

    /// Same as [`calculate`](Self::calculate) over either entry shape.
    pub fn calculate_entries(&self, entries: &[Entry]) -> Result<ConsolidatedResult, CalcError> {
        self.consolidate(entries.iter().map(Entry::to_movement))
    }

    fn consolidate(
        &self,
        movements: impl Iterator<Item = Option<Movement>>,
    ) -> Result<ConsolidatedResult, CalcError> {
        let mut total_inflow = Decimal::zero();
        let mut total_outflow = Decimal::zero();
        let mut skipped = 0;

        for movement in movements {
            match movement {
                Some(Movement {
                    direction: Direction::In,
                    magnitude,
                }) => total_inflow = self.ctx.add(total_inflow, magnitude)?,
                Some(Movement {
                    direction: Direction::Out,
                    magnitude,
                }) => total_outflow = self.ctx.add(total_outflow, magnitude)?,
                None => skipped += 1,
            }
        }

        let net_balance = self.ctx.sub(total_inflow, total_outflow)?;
        let formatted_balance = format_brl(net_balance.to_f64());

        Ok(ConsolidatedResult {
            net_balance: self.ctx.to_money(net_balance),
            total_inflow: self.ctx.to_money(total_inflow),
            total_outflow: self.ctx.to_money(total_outflow),
            formatted_balance,
            skipped,
        })
    }
}

/// Consolidated balance with the default context (20 digits, half-up).
pub fn consolidate(entries: &[MonetaryEntry]) -> Result<ConsolidatedResult, CalcError> {
    BalanceCalculator::default().calculate(entries)
}
