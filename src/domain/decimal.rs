//! Lossless decimal numeric type backed by rust_decimal.
//!
//! Provides canonical parsing from strings, parsing from display numbers, and
//! half-up rounding for monetary output.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal as RustDecimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// Lossless decimal numeric type for monetary calculations.
///
/// Backed by rust_decimal to avoid floating-point drift.
/// Serializes to JSON number (not string) by default.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Decimal(#[serde(with = "rust_decimal::serde::float")] RustDecimal);

impl Decimal {
    /// Create a Decimal from a RustDecimal.
    pub fn new(value: RustDecimal) -> Self {
        Decimal(value)
    }

    /// Parse a Decimal from a string losslessly.
    ///
    /// # Errors
    /// Returns [`CalcError::InvalidAmount`] if the string is not a decimal number.
    pub fn from_str_canonical(s: &str) -> Result<Self, CalcError> {
        RustDecimal::from_str(s.trim())
            .map(Decimal)
            .map_err(|e| CalcError::InvalidAmount(format!("{:?}: {}", s, e)))
    }

    /// Build a Decimal from a display number.
    ///
    /// The number's shortest round-trip representation is used, so `0.1`
    /// becomes exactly `0.1` rather than its binary expansion.
    ///
    /// # Errors
    /// Returns [`CalcError::InvalidAmount`] for NaN, infinities and values
    /// outside the decimal range.
    pub fn from_f64(value: f64) -> Result<Self, CalcError> {
        if !value.is_finite() {
            return Err(CalcError::InvalidAmount(value.to_string()));
        }
        RustDecimal::from_str(&value.to_string())
            .ok()
            .or_else(|| RustDecimal::from_f64(value))
            .map(Decimal)
            .ok_or_else(|| CalcError::InvalidAmount(value.to_string()))
    }

    /// Collapse to the nearest display number.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }

    /// Format the Decimal as a canonical string (no exponent notation).
    pub fn to_canonical_string(&self) -> String {
        // Use normalize() to remove trailing zeros, then format without exponent
        let normalized = self.0.normalize();
        format!("{}", normalized)
    }

    /// Get the underlying RustDecimal.
    pub fn inner(&self) -> RustDecimal {
        self.0
    }

    /// The additive identity (0).
    pub fn zero() -> Self {
        Decimal(RustDecimal::ZERO)
    }

    /// The multiplicative identity (1).
    pub fn one() -> Self {
        Decimal(RustDecimal::ONE)
    }

    /// Returns true if the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the value is > 0.
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.0.is_sign_positive()
    }

    /// Returns true if the value is < 0.
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.0.is_sign_negative()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Decimal(self.0.abs())
    }

    /// Round to `dp` decimal places, midpoints away from zero.
    ///
    /// `0.005` rounds to `0.01` and `-0.005` to `-0.01`.
    pub fn round_half_up(&self, dp: u32) -> Self {
        Decimal(
            self.0
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl FromStr for Decimal {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_canonical(s)
    }
}

impl From<RustDecimal> for Decimal {
    fn from(value: RustDecimal) -> Self {
        Decimal(value)
    }
}

impl From<Decimal> for RustDecimal {
    fn from(value: Decimal) -> Self {
        value.0
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal(RustDecimal::from(value))
    }
}
