//! The scripted session: two deposits, two withdrawals, two interest
//! payments, one status line per operation.

use anyhow::{Context, Result};
use minibank_core::{Account, AccountEvent, Bank, CoreError};
use rust_decimal::Decimal;
use std::io::BufRead;
use tracing::debug;

/// Run the fixed script against `input`.
///
/// The bank is constructed here and handed back so callers (and tests)
/// can inspect the final state.
pub fn run(input: &mut impl BufRead, savings_number: u32, checking_number: u32) -> Result<Bank> {
    let mut bank = Bank::new();

    let savings = Account::create("savings", savings_number)?;
    let checking = Account::create("checking", checking_number)?;
    println!(
        "{}",
        AccountEvent::Opened {
            kind: savings.kind,
            number: savings.number
        }
    );
    println!(
        "{}",
        AccountEvent::Opened {
            kind: checking.kind,
            number: checking.number
        }
    );
    bank.add_account(savings);
    bank.add_account(checking);
    debug!(savings = savings_number, checking = checking_number, "accounts registered");

    let amount = read_amount(
        input,
        "Make a deposit into the savings account. How much would you like to deposit?",
    )?;
    println!("{}", account_mut(&mut bank, savings_number)?.deposit(amount));

    let amount = read_amount(
        input,
        "Make a deposit into the checking account. How much would you like to deposit?",
    )?;
    println!("{}", account_mut(&mut bank, checking_number)?.deposit(amount));

    let balance = account(&bank, savings_number)?.balance;
    let amount = read_amount(
        input,
        &format!(
            "Make a withdrawal from the savings account (balance: {balance} kr). How much would you like to withdraw?"
        ),
    )?;
    println!("{}", account_mut(&mut bank, savings_number)?.withdraw(amount));

    let balance = account(&bank, checking_number)?.balance;
    let amount = read_amount(
        input,
        &format!(
            "Make a withdrawal from the checking account (balance: {balance} kr). How much would you like to withdraw?"
        ),
    )?;
    println!("{}", account_mut(&mut bank, checking_number)?.withdraw(amount));

    println!("{}", account_mut(&mut bank, savings_number)?.pay_interest());
    println!("{}", account_mut(&mut bank, checking_number)?.pay_interest());

    Ok(bank)
}

fn account(bank: &Bank, number: u32) -> Result<&Account, CoreError> {
    bank.get_account(number)
        .ok_or(CoreError::AccountNotFound(number))
}

fn account_mut(bank: &mut Bank, number: u32) -> Result<&mut Account, CoreError> {
    bank.get_account_mut(number)
        .ok_or(CoreError::AccountNotFound(number))
}

/// Prompt for one whole-number amount, in kronor.
///
/// A line that does not parse as an integer is fatal; there is no
/// re-prompt.
fn read_amount(input: &mut impl BufRead, prompt: &str) -> Result<Decimal> {
    println!("{prompt}");
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read amount from input")?;
    let value: i64 = line
        .trim()
        .parse()
        .with_context(|| format!("expected a whole number, got {:?}", line.trim()))?;
    debug!(amount = value, "amount read");
    Ok(Decimal::from(value))
}
