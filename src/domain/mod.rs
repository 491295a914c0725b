//! Domain types for the balance and statistics calculators.
//!
//! This module provides:
//! - Lossless numeric handling via Decimal wrapper
//! - The two monetary entry shapes and the movement they normalise into

pub mod decimal;
pub mod entry;

pub use decimal::Decimal;
pub use entry::{Direction, Entry, EntryKind, MonetaryEntry, Movement, RecordType, TransactionRecord};
