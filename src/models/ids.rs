//! Expense identifiers and their generator
//!
//! Identifiers are integers derived from the creation time in milliseconds,
//! but the generator never hands out the same value twice: when two
//! expenses are created within one millisecond the second one gets the next
//! integer instead.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// Wrap a raw identifier value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw identifier value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExpenseId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

/// Monotonic, collision-free identifier source
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Create a generator whose next id is strictly greater than every id in `existing`
    pub fn seeded<'a, I>(existing: I) -> Self
    where
        I: IntoIterator<Item = &'a ExpenseId>,
    {
        let last = existing.into_iter().map(|id| id.0).max().unwrap_or(0);
        Self { last }
    }

    /// Next identifier, using the current wall-clock time
    pub fn next_id(&mut self) -> ExpenseId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now)
    }

    /// Next identifier for a given timestamp in milliseconds
    pub fn next_at(&mut self, millis: u64) -> ExpenseId {
        self.last = millis.max(self.last.saturating_add(1));
        ExpenseId(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_parse() {
        let id = ExpenseId::new(1_709_251_200_000);
        assert_eq!(id.to_string(), "1709251200000");
        assert_eq!("1709251200000".parse::<ExpenseId>().unwrap(), id);
        assert_eq!("#42".parse::<ExpenseId>().unwrap(), ExpenseId::new(42));
        assert!("abc".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = ExpenseId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let deserialized: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_same_millisecond_does_not_collide() {
        let mut ids = IdGenerator::default();
        let first = ids.next_at(1000);
        let second = ids.next_at(1000);
        let third = ids.next_at(999);

        assert_eq!(first.value(), 1000);
        assert_eq!(second.value(), 1001);
        assert_eq!(third.value(), 1002);
    }

    #[test]
    fn test_follows_the_clock_when_ahead() {
        let mut ids = IdGenerator::default();
        ids.next_at(1000);
        assert_eq!(ids.next_at(5000).value(), 5000);
    }

    #[test]
    fn test_seeded_past_existing() {
        let existing = vec![ExpenseId::new(3), ExpenseId::new(10), ExpenseId::new(5)];
        let mut ids = IdGenerator::seeded(&existing);
        assert_eq!(ids.next_at(1).value(), 11);
    }

    #[test]
    fn test_next_id_is_increasing() {
        let mut ids = IdGenerator::default();
        let a = ids.next_id();
        let b = ids.next_id();
        assert!(b > a);
    }
}
