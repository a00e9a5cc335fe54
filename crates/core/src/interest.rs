//! # Interest Module
//!
//! Interest calculation strategies. Each account owns one strategy,
//! picked at creation time; the calculation itself is a pure function
//! of the balance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interest calculation strategy.
///
/// A strategy is stateless: `calculate` depends only on the balance
/// passed in. Rates are `Decimal` constants, never floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestStrategy {
    /// 5% of the balance
    Savings,
    /// 1% of the balance
    Checking,
}

impl InterestStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterestStrategy::Savings => "savings",
            InterestStrategy::Checking => "checking",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "savings" => Some(InterestStrategy::Savings),
            "checking" => Some(InterestStrategy::Checking),
            _ => None,
        }
    }

    /// Annual interest rate for this strategy
    pub fn rate(&self) -> Decimal {
        match self {
            // 0.05
            InterestStrategy::Savings => Decimal::new(5, 2),
            // 0.01
            InterestStrategy::Checking => Decimal::new(1, 2),
        }
    }

    /// Interest owed on `balance`. Pure, no side effects.
    pub fn calculate(&self, balance: Decimal) -> Decimal {
        balance * self.rate()
    }
}

impl fmt::Display for InterestStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
