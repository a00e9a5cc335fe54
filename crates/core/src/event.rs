//! # Event Module
//!
//! Notifications emitted by account operations. Operations return an
//! `AccountEvent` instead of printing; the CLI renders events to the
//! user. An insufficient-funds outcome is an event, not an error.

use crate::account::AccountKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of an account operation, reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountEvent {
    /// A new account was created and is ready for registration
    Opened { kind: AccountKind, number: u32 },
    /// Deposit applied, balance is the new balance
    Deposited {
        kind: AccountKind,
        number: u32,
        amount: Decimal,
        balance: Decimal,
    },
    /// Withdrawal applied, balance is the new balance
    Withdrawn {
        kind: AccountKind,
        number: u32,
        amount: Decimal,
        balance: Decimal,
    },
    /// Withdrawal refused, balance is unchanged
    InsufficientFunds {
        kind: AccountKind,
        number: u32,
        requested: Decimal,
        balance: Decimal,
    },
    /// Interest credited, balance is the new balance
    InterestPaid {
        number: u32,
        interest: Decimal,
        balance: Decimal,
    },
}

impl fmt::Display for AccountEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountEvent::Opened { kind, number } => {
                write!(f, "Created {} with account number {}", kind.label(), number)
            }
            AccountEvent::Deposited {
                kind,
                number,
                amount,
                balance,
            } => write!(
                f,
                "{} kr deposited into {} {}. New balance: {} kr.",
                amount,
                kind.label(),
                number,
                balance
            ),
            AccountEvent::Withdrawn {
                kind,
                number,
                amount,
                balance,
            } => write!(
                f,
                "{} kr withdrawn from {} {}. New balance: {} kr.",
                amount,
                kind.label(),
                number,
                balance
            ),
            AccountEvent::InsufficientFunds {
                kind,
                number,
                requested,
                balance,
            } => write!(
                f,
                "Not enough funds in {} {} to withdraw {} kr (balance: {} kr).",
                kind.label(),
                number,
                requested,
                balance
            ),
            AccountEvent::InterestPaid {
                number,
                interest,
                balance,
            } => write!(
                f,
                "Interest of {} kr paid to account number {}. New balance: {} kr.",
                interest, number, balance
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_event_display() {
        let event = AccountEvent::Deposited {
            kind: AccountKind::Savings,
            number: 1234567890,
            amount: dec!(500),
            balance: dec!(500),
        };
        assert_eq!(
            event.to_string(),
            "500 kr deposited into savings account 1234567890. New balance: 500 kr."
        );

        let event = AccountEvent::InsufficientFunds {
            kind: AccountKind::Checking,
            number: 1237894560,
            requested: dec!(1500),
            balance: dec!(1000),
        };
        assert_eq!(
            event.to_string(),
            "Not enough funds in checking account 1237894560 to withdraw 1500 kr (balance: 1000 kr)."
        );
    }

    #[test]
    fn test_event_serialization() {
        let event = AccountEvent::InterestPaid {
            number: 1234567890,
            interest: dec!(15),
            balance: dec!(315),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "interest_paid": {
                    "number": 1234567890u32,
                    "interest": "15",
                    "balance": "315",
                }
            })
        );
    }
}
