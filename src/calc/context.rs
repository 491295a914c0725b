use rust_decimal::{MathematicalOps, RoundingStrategy};

use crate::domain::Decimal;
use crate::error::CalcError;

/// Rounding applied when a result exceeds the context precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Midpoints away from zero.
    #[default]
    HalfUp,
    /// Midpoints to the even neighbour (banker's rounding).
    HalfEven,
    /// Toward zero.
    Down,
    /// Away from zero.
    Up,
}

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
        }
    }
}

/// Precision and rounding for a family of decimal operations.
///
/// Each operation is computed exactly and its result is then rounded to
/// `precision` significant digits. The context is an immutable value owned by
/// whichever calculator uses it, so two calculations never share settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalContext {
    precision: u32,
    rounding: RoundingMode,
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
            rounding: RoundingMode::HalfUp,
        }
    }
}

impl DecimalContext {
    pub const DEFAULT_PRECISION: u32 = 20;
    pub const MAX_PRECISION: u32 = 28;

    /// Decimal places kept in monetary output.
    pub const MONEY_DP: u32 = 2;

    /// # Errors
    /// Returns [`CalcError::InvalidPrecision`] unless `1 <= precision <= 28`.
    pub fn new(precision: u32, rounding: RoundingMode) -> Result<Self, CalcError> {
        if precision == 0 || precision > Self::MAX_PRECISION {
            return Err(CalcError::InvalidPrecision(precision));
        }
        Ok(Self {
            precision,
            rounding,
        })
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    fn fit(&self, value: rust_decimal::Decimal) -> Result<Decimal, CalcError> {
        value
            .round_sf_with_strategy(self.precision, self.rounding.strategy())
            .map(Decimal::new)
            .ok_or(CalcError::Overflow)
    }

    pub fn add(&self, a: Decimal, b: Decimal) -> Result<Decimal, CalcError> {
        let sum = a.inner().checked_add(b.inner()).ok_or(CalcError::Overflow)?;
        self.fit(sum)
    }

    pub fn sub(&self, a: Decimal, b: Decimal) -> Result<Decimal, CalcError> {
        let diff = a.inner().checked_sub(b.inner()).ok_or(CalcError::Overflow)?;
        self.fit(diff)
    }

    pub fn mul(&self, a: Decimal, b: Decimal) -> Result<Decimal, CalcError> {
        let product = a.inner().checked_mul(b.inner()).ok_or(CalcError::Overflow)?;
        self.fit(product)
    }

    /// `base ^ exp` for a non-negative integer exponent. `x ^ 0 == 1`.
    pub fn pow(&self, base: Decimal, exp: u32) -> Result<Decimal, CalcError> {
        let power = base
            .inner()
            .checked_powu(u64::from(exp))
            .ok_or(CalcError::Overflow)?;
        self.fit(power)
    }

    /// Round to the two decimal places used for money, with this context's
    /// rounding mode at the midpoint.
    pub fn to_money(&self, value: Decimal) -> Decimal {
        Decimal::new(
            value
                .inner()
                .round_dp_with_strategy(Self::MONEY_DP, self.rounding.strategy()),
        )
    }
}
