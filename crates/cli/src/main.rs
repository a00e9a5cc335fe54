//! Minibank CLI - in-memory bank-account simulation
//!
//! Runs a fixed interactive script: opens a savings and a checking
//! account, reads four amounts from stdin (savings deposit, checking
//! deposit, savings withdrawal, checking withdrawal), then pays
//! interest on both accounts and exits.

use anyhow::Result;
use clap::Parser;

mod session;

/// Minibank - a scripted banking simulation
#[derive(Parser)]
#[command(name = "minibank")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Account number for the savings account
    #[arg(long, default_value_t = 1234567890)]
    pub savings_number: u32,

    /// Account number for the checking account
    #[arg(long, default_value_t = 1237894560)]
    pub checking_number: u32,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    session::run(&mut input, cli.savings_number, cli.checking_number)?;

    Ok(())
}
