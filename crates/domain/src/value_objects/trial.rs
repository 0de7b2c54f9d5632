//! Trial value objects for the first-entree-time simulation.
//!
//! A *trial* rolls a die until a six appears; its *outcome* is the 1-indexed
//! attempt on which the six arrived. A *batch* is an ordered collection of
//! independent outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Outcome of a single trial: the 1-indexed attempt on which the first six
/// appeared.
///
/// Always at least 1. Unbounded above - the geometric distribution has
/// unbounded support, though outcomes are almost always small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrialOutcome(u32);

impl TrialOutcome {
    /// Create an outcome from a 1-indexed attempt number.
    pub fn new(attempts: u32) -> Result<Self, DomainError> {
        if attempts == 0 {
            return Err(DomainError::validation("Trial outcome must be at least 1"));
        }
        Ok(Self(attempts))
    }

    // Simulation-internal constructor: the trial loop always rolls at least
    // once, so the counter is nonzero by construction.
    pub(crate) const fn from_attempts(attempts: u32) -> Self {
        Self(attempts)
    }

    /// The number of rolls the trial took.
    pub fn attempts(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TrialOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated number of draws for the batch driver.
///
/// Constructed from a signed integer so that a negative request is rejected
/// at the boundary instead of reaching the driver. Zero is valid and yields
/// an empty batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawCount(u32);

impl DrawCount {
    /// No draws at all.
    pub const ZERO: Self = Self(0);

    /// Create a draw count. Negative values are rejected.
    pub fn new(n: i64) -> Result<Self, DomainError> {
        if n < 0 {
            return Err(DomainError::invalid_draw_count(n));
        }
        u32::try_from(n)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("Draw count too large: {n}")))
    }

    /// The number of draws.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DrawCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered collection of independent trial outcomes, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch(Vec<TrialOutcome>);

impl Batch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an empty batch with room for `capacity` outcomes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub(crate) fn push(&mut self, outcome: TrialOutcome) {
        self.0.push(outcome);
    }

    /// Number of outcomes in the batch.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the batch holds no outcomes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The outcomes, in generation order.
    pub fn outcomes(&self) -> &[TrialOutcome] {
        &self.0
    }

    /// Empirical mean of the outcomes, or `None` for an empty batch.
    pub fn mean_attempts(&self) -> Option<f64> {
        if self.0.is_empty() {
            return None;
        }
        let total: u64 = self.0.iter().map(|o| u64::from(o.attempts())).sum();
        Some(total as f64 / self.0.len() as f64)
    }
}

impl fmt::Display for Batch {
    /// Format as a bracketed list (e.g., "[4, 2, 9]").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcomes: Vec<String> = self.0.iter().map(|o| o.to_string()).collect();
        write!(f, "[{}]", outcomes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_rejects_zero() {
        assert!(matches!(
            TrialOutcome::new(0),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_outcome_accepts_one() {
        let outcome = TrialOutcome::new(1).unwrap();
        assert_eq!(outcome.attempts(), 1);
        assert_eq!(outcome.to_string(), "1");
    }

    #[test]
    fn test_draw_count_rejects_negative() {
        assert!(matches!(
            DrawCount::new(-1),
            Err(DomainError::InvalidDrawCount { given: -1 })
        ));
    }

    #[test]
    fn test_draw_count_accepts_zero() {
        let count = DrawCount::new(0).unwrap();
        assert_eq!(count, DrawCount::ZERO);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_batch_display() {
        let mut batch = Batch::new();
        batch.push(TrialOutcome::new(4).unwrap());
        batch.push(TrialOutcome::new(2).unwrap());
        batch.push(TrialOutcome::new(9).unwrap());
        assert_eq!(batch.to_string(), "[4, 2, 9]");
    }

    #[test]
    fn test_empty_batch_display() {
        assert_eq!(Batch::new().to_string(), "[]");
    }

    #[test]
    fn test_batch_mean() {
        let mut batch = Batch::new();
        batch.push(TrialOutcome::new(2).unwrap());
        batch.push(TrialOutcome::new(4).unwrap());
        assert_eq!(batch.mean_attempts(), Some(3.0));
        assert_eq!(Batch::new().mean_attempts(), None);
    }

    #[test]
    fn test_batch_serializes_as_plain_array() {
        let mut batch = Batch::new();
        batch.push(TrialOutcome::new(3).unwrap());
        batch.push(TrialOutcome::new(1).unwrap());
        let json = serde_json::to_string(&batch).unwrap();
        assert_eq!(json, "[3,1]");
    }
}
