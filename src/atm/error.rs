use crate::atm::Decimal;

/// Errors produced while parsing a user-entered amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Invalid amount entered. Please enter a number.")]
    NotANumber(String),

    #[error("Amount must be positive, got {0}")]
    NotPositive(Decimal),
}

/// A PIN that is not exactly four ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("New PIN must be exactly 4 digits.")]
pub struct InvalidPin;

/// Recoverable errors from ledger operations.
/// The operation is aborted and the session state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("{0}")]
    InvalidAmount(#[from] AmountError),

    #[error("Insufficient funds: balance is {available}, requested {requested}")]
    InsufficientFunds {
        available: Decimal,
        requested: Decimal,
    },

    #[error("Balance would overflow")]
    BalanceOverflow,

    #[error("Incorrect current PIN.")]
    WrongPin,

    #[error("{0}")]
    InvalidPinFormat(#[from] InvalidPin),

    #[error("New PINs do not match.")]
    PinMismatch,
}

/// Invalid seed values for a `Session`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("Username must not be empty")]
    EmptyUsername,

    #[error("Invalid PIN: {0}")]
    InvalidPin(#[from] InvalidPin),

    #[error("Opening balance must not be negative, got {0}")]
    NegativeOpeningBalance(Decimal),

    #[error("At least one login attempt must be allowed")]
    NoLoginAttempts,
}
