//! Single-user console ATM simulator.
//!
//! The `atm` core holds the account ledger and the login state machine;
//! the `console` layer drives it over any line-oriented reader and writer.

mod atm;
mod console;

pub use atm::{
    Account, Amount, AmountError, Attempt, AuthSession, Authenticator, Credential, InvalidPin,
    LedgerError, LoginOutcome, LoginPhase, LoginPrompt, Pin, Session, SessionConfig, SetupError,
    Statement, Transaction, TransactionKind, STATEMENT_LENGTH,
};
pub use console::{Atm, Console, ExitReason, MenuCommand};
