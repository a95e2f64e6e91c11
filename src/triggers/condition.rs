//! Stat conditions.
//!
//! A condition compares one named stat against a constant. Conditions
//! filter target candidates and decide when a card on the board is
//! destroyed; in both cases the stat's effective value is compared.

use serde::{Deserialize, Serialize};

/// Comparison operator of a condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Comparison {
    /// Apply the operator as `actual <op> expected`.
    #[must_use]
    pub fn compare(self, actual: i64, expected: i64) -> bool {
        match self {
            Comparison::Equal => actual == expected,
            Comparison::NotEqual => actual != expected,
            Comparison::Less => actual < expected,
            Comparison::LessOrEqual => actual <= expected,
            Comparison::Greater => actual > expected,
            Comparison::GreaterOrEqual => actual >= expected,
        }
    }
}

/// `stat <comparison> value`.
///
/// ```
/// use ccg_solver::triggers::{Comparison, Condition};
///
/// let dead = Condition::new("Life", Comparison::LessOrEqual, 0);
/// assert!(dead.holds(0));
/// assert!(dead.holds(-2));
/// assert!(!dead.holds(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Condition {
    /// Stat the condition reads.
    pub stat: String,
    /// Operator.
    pub comparison: Comparison,
    /// Right-hand side.
    pub value: i64,
}

impl Condition {
    pub fn new(stat: impl Into<String>, comparison: Comparison, value: i64) -> Self {
        Self {
            stat: stat.into(),
            comparison,
            value,
        }
    }

    /// Evaluate against the stat's current effective value.
    #[must_use]
    pub fn holds(&self, actual: i64) -> bool {
        self.comparison.compare(actual, self.value)
    }
}
