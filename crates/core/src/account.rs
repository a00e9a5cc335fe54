//! # Account Module
//!
//! Account is the central entity of the simulation. An account is a
//! tagged variant (`AccountKind`) over shared fields rather than a
//! class hierarchy, and owns the `InterestStrategy` assigned to it at
//! creation.

use crate::error::{CoreError, CoreResult};
use crate::event::AccountEvent;
use crate::interest::InterestStrategy;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of account, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Savings,
    Checking,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings => "savings",
            AccountKind::Checking => "checking",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "savings" => Some(AccountKind::Savings),
            "checking" => Some(AccountKind::Checking),
            _ => None,
        }
    }

    /// Human label used in notifications
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Savings => "savings account",
            AccountKind::Checking => "checking account",
        }
    }

    /// The interest strategy a new account of this kind receives
    pub fn default_strategy(&self) -> InterestStrategy {
        match self {
            AccountKind::Savings => InterestStrategy::Savings,
            AccountKind::Checking => InterestStrategy::Checking,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A bank account.
///
/// The account number identifies the account in the `Bank` registry
/// and is never reassigned. The balance changes only through
/// `deposit`, `withdraw`, and `pay_interest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account number (registry key)
    pub number: u32,
    /// Kind tag, fixed at creation
    pub kind: AccountKind,
    /// Current balance in kronor
    pub balance: Decimal,
    /// Interest strategy, assigned once at creation
    pub strategy: InterestStrategy,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create an account with a zero balance and the kind's default
    /// interest strategy.
    pub fn new(kind: AccountKind, number: u32) -> Self {
        Self {
            number,
            kind,
            balance: Decimal::ZERO,
            strategy: kind.default_strategy(),
            created_at: Utc::now(),
        }
    }

    /// Factory over the kind strings `"savings"` and `"checking"`.
    ///
    /// Any other string is rejected with `CoreError::InvalidAccountType`
    /// and no account is constructed.
    pub fn create(kind: &str, number: u32) -> CoreResult<Self> {
        let kind = AccountKind::from_str(kind)
            .ok_or_else(|| CoreError::InvalidAccountType(kind.to_string()))?;
        Ok(Self::new(kind, number))
    }

    /// Add `amount` to the balance unconditionally.
    ///
    /// The amount is not validated; a negative amount reduces the
    /// balance. See the deposit tests for the pinned behavior.
    pub fn deposit(&mut self, amount: Decimal) -> AccountEvent {
        self.balance += amount;
        AccountEvent::Deposited {
            kind: self.kind,
            number: self.number,
            amount,
            balance: self.balance,
        }
    }

    /// Subtract `amount` from the balance if it is covered.
    ///
    /// An uncovered withdrawal leaves the balance unchanged and
    /// reports `InsufficientFunds`; it is never an error.
    pub fn withdraw(&mut self, amount: Decimal) -> AccountEvent {
        if self.balance >= amount {
            self.balance -= amount;
            AccountEvent::Withdrawn {
                kind: self.kind,
                number: self.number,
                amount,
                balance: self.balance,
            }
        } else {
            AccountEvent::InsufficientFunds {
                kind: self.kind,
                number: self.number,
                requested: amount,
                balance: self.balance,
            }
        }
    }

    /// Credit the interest the account's strategy computes on the
    /// current balance.
    pub fn pay_interest(&mut self) -> AccountEvent {
        let interest = self.strategy.calculate(self.balance);
        self.balance += interest;
        AccountEvent::InterestPaid {
            number: self.number,
            interest,
            balance: self.balance,
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (balance: {} kr)",
            self.kind.label(),
            self.number,
            self.balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_account_creation() {
        let account = Account::new(AccountKind::Savings, 1234567890);

        assert_eq!(account.number, 1234567890);
        assert_eq!(account.kind, AccountKind::Savings);
        assert_eq!(account.balance, Decimal::ZERO);
        assert_eq!(account.strategy, InterestStrategy::Savings);
    }

    #[test]
    fn test_factory_kind_strings() {
        let savings = Account::create("savings", 1).unwrap();
        assert_eq!(savings.kind, AccountKind::Savings);
        assert_eq!(savings.strategy, InterestStrategy::Savings);

        let checking = Account::create("checking", 2).unwrap();
        assert_eq!(checking.kind, AccountKind::Checking);
        assert_eq!(checking.strategy, InterestStrategy::Checking);
    }

    #[test]
    fn test_factory_rejects_unknown_kind() {
        let result = Account::create("loan", 3);
        assert!(matches!(
            result,
            Err(CoreError::InvalidAccountType(ref kind)) if kind == "loan"
        ));
    }

    #[test]
    fn test_deposit_then_withdraw_restores_balance() {
        let mut account = Account::new(AccountKind::Checking, 1);
        account.deposit(dec!(250));
        let before = account.balance;

        account.deposit(dec!(75));
        account.withdraw(dec!(75));

        assert_eq!(account.balance, before);
    }

    #[test]
    fn test_withdraw_insufficient_leaves_balance() {
        let mut account = Account::new(AccountKind::Savings, 1);
        account.deposit(dec!(100));

        let event = account.withdraw(dec!(101));

        assert!(matches!(event, AccountEvent::InsufficientFunds { .. }));
        assert_eq!(account.balance, dec!(100));
    }

    // deposit does not validate the amount, so a negative deposit
    // shrinks the balance. Known gap, pinned here rather than fixed.
    #[test]
    fn test_deposit_accepts_negative_amount() {
        let mut account = Account::new(AccountKind::Savings, 1);
        account.deposit(dec!(100));
        account.deposit(dec!(-40));
        assert_eq!(account.balance, dec!(60));
    }

    #[test]
    fn test_interest_on_1000() {
        let mut savings = Account::new(AccountKind::Savings, 1);
        savings.deposit(dec!(1000));
        let event = savings.pay_interest();
        assert_eq!(savings.balance, dec!(1050));
        assert!(
            matches!(event, AccountEvent::InterestPaid { interest, .. } if interest == dec!(50))
        );

        let mut checking = Account::new(AccountKind::Checking, 2);
        checking.deposit(dec!(1000));
        let event = checking.pay_interest();
        assert_eq!(checking.balance, dec!(1010));
        assert!(
            matches!(event, AccountEvent::InterestPaid { interest, .. } if interest == dec!(10))
        );
    }

    #[test]
    fn test_savings_scenario() {
        let mut account = Account::create("savings", 1234567890).unwrap();

        account.deposit(dec!(500));
        assert_eq!(account.balance, dec!(500));

        account.withdraw(dec!(200));
        assert_eq!(account.balance, dec!(300));

        account.pay_interest();
        assert_eq!(account.balance, dec!(315));
    }

    #[test]
    fn test_checking_scenario() {
        let mut account = Account::create("checking", 1237894560).unwrap();

        account.deposit(dec!(1000));
        assert_eq!(account.balance, dec!(1000));

        let event = account.withdraw(dec!(1500));
        assert!(matches!(event, AccountEvent::InsufficientFunds { .. }));
        assert_eq!(account.balance, dec!(1000));

        account.pay_interest();
        assert_eq!(account.balance, dec!(1010));
    }
}
