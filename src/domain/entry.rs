//! Monetary entry shapes and their normalisation into movements.
//!
//! Two shapes reach the calculators: kinded entries (`{kind, amount}`, amount
//! is a non-negative magnitude) and signed records (`{amount, type?}`, where
//! direction comes from `type` or, failing that, from the sign). Both reduce
//! to a [`Movement`] before any arithmetic happens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Decimal;

/// Direction of a monetary entry as tagged by the caller.
///
/// Tags are matched ignoring case and surrounding whitespace, whatever the
/// source. Unknown tags are kept as [`EntryKind::Other`] instead of failing;
/// the balance calculator skips them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryKind {
    /// Money entering the account ("entrada").
    Inflow,
    /// Money leaving the account ("saida").
    Outflow,
    /// Any tag the calculators do not recognise.
    Other(String),
}

impl EntryKind {
    pub fn as_str(&self) -> &str {
        match self {
            EntryKind::Inflow => "entrada",
            EntryKind::Outflow => "saida",
            EntryKind::Other(s) => s,
        }
    }
}

impl From<&str> for EntryKind {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "entrada" | "inflow" => EntryKind::Inflow,
            "saida" | "outflow" => EntryKind::Outflow,
            _ => EntryKind::Other(value.to_string()),
        }
    }
}

impl From<String> for EntryKind {
    fn from(value: String) -> Self {
        EntryKind::from(value.as_str())
    }
}

impl From<EntryKind> for String {
    fn from(value: EntryKind) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A monetary entry whose direction is carried by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonetaryEntry {
    pub kind: EntryKind,
    /// Magnitude in major currency units. Expected to be non-negative.
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<DateTime<Utc>>,
}

impl MonetaryEntry {
    pub fn new(kind: EntryKind, amount: Decimal) -> Self {
        Self {
            kind,
            amount,
            label: None,
            occurred_at: None,
        }
    }

    pub fn inflow(amount: Decimal) -> Self {
        Self::new(EntryKind::Inflow, amount)
    }

    pub fn outflow(amount: Decimal) -> Self {
        Self::new(EntryKind::Outflow, amount)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_occurred_at(mut self, at: DateTime<Utc>) -> Self {
        self.occurred_at = Some(at);
        self
    }

    /// Reduce to a movement. `None` for an unrecognised kind.
    pub fn to_movement(&self) -> Option<Movement> {
        match self.kind {
            EntryKind::Inflow => Some(Movement::new(Direction::In, self.amount)),
            EntryKind::Outflow => Some(Movement::new(Direction::Out, self.amount)),
            // Unknown kinds contribute nothing. Callers rely on this leniency.
            EntryKind::Other(_) => None,
        }
    }
}

/// Explicit direction of a signed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Income,
    Outcome,
}

/// A transaction record with a signed amount and optional explicit type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub amount: Decimal,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<RecordType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl TransactionRecord {
    pub fn new(amount: Decimal, record_type: Option<RecordType>) -> Self {
        Self {
            amount,
            record_type,
            description: None,
            date: None,
        }
    }

    /// Direction of this record: explicit type wins, otherwise `amount >= 0`
    /// is income.
    pub fn direction(&self) -> Direction {
        match self.record_type {
            Some(RecordType::Income) => Direction::In,
            Some(RecordType::Outcome) => Direction::Out,
            None if self.amount.is_negative() => Direction::Out,
            None => Direction::In,
        }
    }

    pub fn to_movement(&self) -> Movement {
        Movement::new(self.direction(), self.amount.abs())
    }
}

/// Either entry shape, as found across the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Kinded(MonetaryEntry),
    Signed(TransactionRecord),
}

impl Entry {
    pub fn to_movement(&self) -> Option<Movement> {
        match self {
            Entry::Kinded(entry) => entry.to_movement(),
            Entry::Signed(record) => Some(record.to_movement()),
        }
    }
}

impl From<MonetaryEntry> for Entry {
    fn from(value: MonetaryEntry) -> Self {
        Entry::Kinded(value)
    }
}

impl From<TransactionRecord> for Entry {
    fn from(value: TransactionRecord) -> Self {
        Entry::Signed(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    In,
    Out,
}

/// Canonical `{direction, magnitude}` form every entry shape reduces to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub direction: Direction,
    pub magnitude: Decimal,
}

impl Movement {
    pub fn new(direction: Direction, magnitude: Decimal) -> Self {
        Self {
            direction,
            magnitude,
        }
    }
}
