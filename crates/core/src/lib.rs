//! Minibank Core - Domain types
//!
//! This crate contains the fundamental types for the Minibank
//! simulation:
//! - `Account` / `AccountKind`: bank accounts and their construction
//! - `InterestStrategy`: per-kind interest calculation
//! - `Bank`: the in-memory account registry
//! - `AccountEvent`: notifications emitted by account operations

pub mod account;
pub mod bank;
pub mod error;
pub mod event;
pub mod interest;

pub use account::{Account, AccountKind};
pub use bank::Bank;
pub use error::{CoreError, CoreResult};
pub use event::AccountEvent;
pub use interest::InterestStrategy;
