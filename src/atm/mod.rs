//! ATM core module.
//!
//! This module contains the account and authentication logic including:
//! - `Session` - Owns the credential and account for one run, applies ledger operations
//! - `Account` - Balance and append-only transaction log
//! - `Authenticator` / `AuthSession` - Username then PIN attempt counting and lockout
//! - `Amount` / `Pin` - Validated user input
//! - `Error` types - Ledger, amount and setup errors

mod account;
mod amount;
mod auth;
mod credential;
mod error;
mod session;
mod statement;
mod transaction;

pub(crate) use rust_decimal::Decimal;

pub use account::Account;
pub use amount::Amount;
pub use auth::{Attempt, AuthSession, Authenticator, LoginOutcome, LoginPhase, LoginPrompt};
pub use credential::{Credential, Pin};
pub use error::{AmountError, InvalidPin, LedgerError, SetupError};
pub use session::{Session, SessionConfig};
pub(crate) use statement::format_currency;
pub use statement::{Statement, STATEMENT_LENGTH};
pub use transaction::{Transaction, TransactionKind};
