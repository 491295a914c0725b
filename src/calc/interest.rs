use super::DecimalContext;
use crate::domain::Decimal;
use crate::error::CalcError;

/// Compound growth of a principal at a fixed periodic rate.
///
/// A negative rate models decay. Zero periods or a zero rate return the
/// principal unchanged (rounded to two places).
#[derive(Debug, Clone, Copy, Default)]
pub struct InterestCalculator {
    ctx: DecimalContext,
}

impl InterestCalculator {
    pub fn new(ctx: DecimalContext) -> Self {
        Self { ctx }
    }

    /// `principal * (1 + rate) ^ periods`, rounded to two decimal places.
    ///
    /// # Errors
    /// Returns [`CalcError::Overflow`] once `(1 + rate) ^ periods` or the final
    /// amount leaves the 28-digit decimal range. Monthly terms of a few decades
    /// fit easily; `compound(100, 0.1, 700)` does not.
    pub fn compound(
        &self,
        principal: Decimal,
        rate: Decimal,
        periods: u32,
    ) -> Result<Decimal, CalcError> {
        let factor = self.ctx.add(Decimal::one(), rate)?;
        let growth = self.ctx.pow(factor, periods)?;
        let amount = self.ctx.mul(principal, growth)?;
        Ok(self.ctx.to_money(amount))
    }

    /// Balance at the end of each period `1..=periods`.
    ///
    /// Growth is carried at context precision; only the reported balances are
    /// rounded to two places.
    pub fn schedule(
        &self,
        principal: Decimal,
        rate: Decimal,
        periods: u32,
    ) -> Result<Vec<Decimal>, CalcError> {
        let factor = self.ctx.add(Decimal::one(), rate)?;
        let mut growth = Decimal::one();
        let mut balances = Vec::with_capacity(periods as usize);
        for _ in 0..periods {
            growth = self.ctx.mul(growth, factor)?;
            let amount = self.ctx.mul(principal, growth)?;
            balances.push(self.ctx.to_money(amount));
        }
        Ok(balances)
    }
}

/// Compound interest with the default context (20 digits, half-up).
///
/// Fails with [`CalcError::Overflow`] past the decimal range, see
/// [`InterestCalculator::compound`].
pub fn compound(principal: Decimal, rate: Decimal, periods: u32) -> Result<Decimal, CalcError> {
    InterestCalculator::default().compound(principal, rate, periods)
}
