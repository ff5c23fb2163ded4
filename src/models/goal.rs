//! Savings goal
//!
//! A single non-negative target treated as an absolute monthly amount. The
//! goal is never scaled by the display period.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{TallyError, TallyResult};

/// Non-negative savings target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct SavingsGoal(Money);

impl SavingsGoal {
    /// Create a goal, rejecting negative amounts
    pub fn new(amount: Money) -> TallyResult<Self> {
        if amount.is_negative() {
            return Err(TallyError::invalid_goal(amount.as_decimal().to_string()));
        }
        Ok(Self(amount))
    }

    /// A goal of zero, for which progress is always 0%
    pub const fn none() -> Self {
        Self(Money::zero())
    }

    /// Parse a user-supplied goal
    ///
    /// Non-numeric or negative input is rejected with `InvalidGoal`.
    pub fn parse(input: &str) -> TallyResult<Self> {
        let amount = Money::parse(input).map_err(|_| TallyError::invalid_goal(input.trim()))?;
        if amount.is_negative() {
            return Err(TallyError::invalid_goal(input.trim()));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Money {
        self.0
    }

    /// Whether a positive target is set
    pub fn is_set(&self) -> bool {
        self.0.is_positive()
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Negative goals are rejected when loaded, same as when parsed.
impl<'de> Deserialize<'de> for SavingsGoal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let amount = Money::deserialize(deserializer)?;
        SavingsGoal::new(amount).map_err(serde::de::Error::custom)
    }
}
