use serde::{Deserialize, Serialize};

use super::DecimalContext;
use crate::domain::{Decimal, Direction, TransactionRecord};
use crate::error::CalcError;

/// Income, outcome and net total over signed transaction records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionStats {
    pub income: Decimal,
    /// Sum of outcome magnitudes (non-negative).
    pub outcome: Decimal,
    /// `income - outcome`.
    pub total: Decimal,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StatsAggregator {
    ctx: DecimalContext,
}

impl StatsAggregator {
    pub fn new(ctx: DecimalContext) -> Self {
        Self { ctx }
    }

    /// Fold records into totals.
    ///
    /// Direction is the explicit `type` when present, otherwise the sign of
    /// `amount`. Magnitudes are always taken as absolute values, so a record of
    /// `-50` typed `income` adds `50` to both `income` and `total`.
    pub fn aggregate(&self, records: &[TransactionRecord]) -> Result<TransactionStats, CalcError> {
        let mut income = Decimal::zero();
        let mut outcome = Decimal::zero();
        let mut total = Decimal::zero();

        for record in records {
            let movement = record.to_movement();
            match movement.direction {
                Direction::In => {
                    income = self.ctx.add(income, movement.magnitude)?;
                    total = self.ctx.add(total, movement.magnitude)?;
                }
                Direction::Out => {
                    outcome = self.ctx.add(outcome, movement.magnitude)?;
                    total = self.ctx.sub(total, movement.magnitude)?;
                }
            }
        }

        Ok(TransactionStats {
            income: self.ctx.to_money(income),
            outcome: self.ctx.to_money(outcome),
            total: self.ctx.to_money(total),
            count: records.len(),
        })
    }
}

/// Transaction statistics with the default context (20 digits, half-up).
pub fn aggregate(records: &[TransactionRecord]) -> Result<TransactionStats, CalcError> {
    StatsAggregator::default().aggregate(records)
}
