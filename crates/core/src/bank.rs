//! # Bank Module
//!
//! The account registry. A `Bank` is constructed by the process entry
//! point and passed to whoever needs it; there is no global instance.

use crate::account::Account;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Registry of accounts keyed by account number.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Bank {
    accounts: HashMap<u32, Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account under its number.
    ///
    /// Registering a second account under the same number silently
    /// replaces the first; the registry performs no uniqueness check.
    pub fn add_account(&mut self, account: Account) {
        self.accounts.insert(account.number, account);
    }

    /// Look up an account. A miss is `None`, never an error.
    pub fn get_account(&self, number: u32) -> Option<&Account> {
        self.accounts.get(&number)
    }

    /// Look up a mutable account.
    pub fn get_account_mut(&mut self, number: u32) -> Option<&mut Account> {
        self.accounts.get_mut(&number)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
