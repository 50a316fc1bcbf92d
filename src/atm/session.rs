use std::io;

use super::auth::DEFAULT_MAX_ATTEMPTS;
use super::error::{LedgerError, SetupError};
use super::transaction::{ATM_DEPOSIT_NOTE, ATM_WITHDRAWAL_NOTE};
use super::{
    Account, Amount, Authenticator, Credential, Decimal, LoginOutcome, LoginPrompt, Pin, Statement,
};

pub(crate) const DEMO_USERNAME: &str = "user123";
pub(crate) const DEMO_PIN: &str = "1234";
pub(crate) const DEMO_OPENING_BALANCE: Decimal = Decimal::from_parts(500_000, 0, 0, false, 2);

/// Seed values for a `Session`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub username: String,
    pub pin: String,
    pub opening_balance: Decimal,
    pub max_login_attempts: u8,
}

impl Default for SessionConfig {
    /// The demo account: `user123` / `1234` with 5000.00
    fn default() -> Self {
        Self {
            username: DEMO_USERNAME.to_owned(),
            pin: DEMO_PIN.to_owned(),
            opening_balance: DEMO_OPENING_BALANCE,
            max_login_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// The state of one ATM run.
///
/// Owns the credential, the account and the authenticator.
/// Every ledger operation validates fully before mutating, so a failed
/// operation leaves the session exactly as it was.
#[derive(Debug, Clone)]
pub struct Session {
    credential: Credential,
    account: Account,
    authenticator: Authenticator,
}

impl Session {
    /// Create a `Session` from validated seed values
    pub fn new(config: &SessionConfig) -> Result<Self, SetupError> {
        if config.username.trim().is_empty() {
            return Err(SetupError::EmptyUsername);
        }
        let pin: Pin = config.pin.parse()?;
        if config.opening_balance < Decimal::ZERO {
            return Err(SetupError::NegativeOpeningBalance(config.opening_balance));
        }
        if config.max_login_attempts == 0 {
            return Err(SetupError::NoLoginAttempts);
        }

        log::debug!(
            "Session initialized for user {} with opening balance {}",
            config.username,
            config.opening_balance
        );
        Ok(Self {
            credential: Credential::new(config.username.clone(), pin),
            account: Account::open(config.opening_balance),
            authenticator: Authenticator::new(config.max_login_attempts),
        })
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn balance(&self) -> Decimal {
        self.account.balance()
    }

    /// Run the username/PIN sequence against this session's credential
    pub fn attempt_login<P: LoginPrompt>(&self, prompt: &mut P) -> io::Result<LoginOutcome> {
        self.authenticator.attempt_login(&self.credential, prompt)
    }

    /// Balance plus the most recent transactions
    pub fn statement(&self) -> Statement<'_> {
        self.account.statement()
    }
}

// =============================================================================
// Ledger Operations
// =============================================================================

impl Session {
    /// Withdraw the amount entered as text. Returns the new balance.
    pub fn withdraw(&mut self, input: &str) -> Result<Decimal, LedgerError> {
        log::trace!("[withdraw] input={input:?}");
        let amount: Amount = input.parse()?;

        let available = self.account.balance();
        if amount.value() > available {
            log::warn!("[withdraw] refused: requested {amount}, balance {available}");
            return Err(LedgerError::InsufficientFunds {
                available,
                requested: amount.value(),
            });
        }

        self.account.withdraw(amount, ATM_WITHDRAWAL_NOTE);

        log::debug!(
            "[withdraw] amount={} -> new_balance={}",
            amount,
            self.account.balance()
        );
        Ok(self.account.balance())
    }

    /// Deposit the amount entered as text. Returns the new balance.
    pub fn deposit(&mut self, input: &str) -> Result<Decimal, LedgerError> {
        log::trace!("[deposit] input={input:?}");
        let amount: Amount = input.parse()?;

        if self.account.balance().checked_add(amount.value()).is_none() {
            log::warn!("[deposit] refused: {amount} would overflow the balance");
            return Err(LedgerError::BalanceOverflow);
        }

        self.account.deposit(amount, ATM_DEPOSIT_NOTE);

        log::debug!(
            "[deposit] amount={} -> new_balance={}",
            amount,
            self.account.balance()
        );
        Ok(self.account.balance())
    }

    /// Check a candidate against the current PIN without changing anything
    pub fn verify_pin(&self, candidate: &str) -> Result<(), LedgerError> {
        if self.credential.pin().matches(candidate) {
            Ok(())
        } else {
            Err(LedgerError::WrongPin)
        }
    }

    /// Replace the PIN. Checks, in order: current PIN, new PIN format, confirmation.
    /// Not recorded in the transaction log.
    pub fn change_pin(
        &mut self,
        old_pin: &str,
        new_pin: &str,
        confirm_pin: &str,
    ) -> Result<(), LedgerError> {
        self.verify_pin(old_pin).inspect_err(|_| {
            log::warn!("[change_pin] refused: current PIN incorrect");
        })?;

        let pin = new_pin.parse::<Pin>().inspect_err(|_| {
            log::warn!("[change_pin] refused: new PIN has invalid format");
        })?;

        if new_pin != confirm_pin {
            log::warn!("[change_pin] refused: confirmation does not match");
            return Err(LedgerError::PinMismatch);
        }

        self.credential.replace_pin(pin);
        log::info!("[change_pin] PIN changed for user {}", self.credential.username());
        Ok(())
    }
}

impl Default for Session {
    /// A session seeded with the demo account
    fn default() -> Self {
        Self {
            credential: Credential::new(DEMO_USERNAME.to_owned(), demo_pin()),
            account: Account::open(DEMO_OPENING_BALANCE),
            authenticator: Authenticator::default(),
        }
    }
}

fn demo_pin() -> Pin {
    match DEMO_PIN.parse() {
        Ok(pin) => pin,
        Err(_) => unreachable!("demo PIN is four digits"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atm::{AmountError, InvalidPin, TransactionKind};
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_session_is_demo_account() {
        let session = Session::default();

        assert_eq!(session.credential().username(), "user123");
        assert!(session.credential().pin().matches("1234"));
        assert_eq!(session.balance(), dec!(5000.00));
        assert_eq!(session.account().transactions().len(), 1);
    }

    #[test]
    fn test_default_config_builds_demo_session() {
        let session = Session::new(&SessionConfig::default()).unwrap();
        assert_eq!(session.account(), Session::default().account());
    }

    #[test]
    fn test_new_rejects_bad_pin() {
        let config = SessionConfig {
            pin: "12345".to_owned(),
            ..SessionConfig::default()
        };
        assert_eq!(
            Session::new(&config).unwrap_err(),
            SetupError::InvalidPin(InvalidPin)
        );
    }

    #[test]
    fn test_new_rejects_negative_opening_balance() {
        let config = SessionConfig {
            opening_balance: dec!(-1),
            ..SessionConfig::default()
        };
        assert_eq!(
            Session::new(&config).unwrap_err(),
            SetupError::NegativeOpeningBalance(dec!(-1))
        );
    }

    #[test]
    fn test_new_rejects_blank_username_and_zero_attempts() {
        let blank = SessionConfig {
            username: "  ".to_owned(),
            ..SessionConfig::default()
        };
        assert_eq!(Session::new(&blank).unwrap_err(), SetupError::EmptyUsername);

        let no_attempts = SessionConfig {
            max_login_attempts: 0,
            ..SessionConfig::default()
        };
        assert_eq!(
            Session::new(&no_attempts).unwrap_err(),
            SetupError::NoLoginAttempts
        );
    }

    #[test]
    fn test_deposit_credits_and_logs() {
        let mut session = Session::default();

        assert_eq!(session.deposit("250.00"), Ok(dec!(5250)));
        let last = session.account().transactions().last().unwrap();
        assert_eq!(last.kind(), TransactionKind::Deposit);
        assert_eq!(last.amount(), dec!(250));
        assert_eq!(last.note(), "ATM Deposit");
    }

    #[test]
    fn test_withdraw_debits_and_logs() {
        let mut session = Session::default();

        assert_eq!(session.withdraw("1000"), Ok(dec!(4000)));
        let last = session.account().transactions().last().unwrap();
        assert_eq!(last.kind(), TransactionKind::Withdraw);
        assert_eq!(last.note(), "ATM Withdrawal");
    }

    #[test]
    fn test_withdraw_exact_balance() {
        let mut session = Session::default();
        assert_eq!(session.withdraw("5000"), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_withdraw_more_than_balance_is_refused() {
        let mut session = Session::default();

        assert_eq!(
            session.withdraw("5000.01"),
            Err(LedgerError::InsufficientFunds {
                available: dec!(5000),
                requested: dec!(5000.01),
            })
        );
        assert_eq!(session.balance(), dec!(5000));
        assert_eq!(session.account().transactions().len(), 1);
    }

    #[test]
    fn test_invalid_amounts_leave_state_unchanged() {
        let mut session = Session::default();

        for input in ["0", "-5", "abc", ""] {
            assert!(matches!(
                session.deposit(input),
                Err(LedgerError::InvalidAmount(_))
            ));
            assert!(matches!(
                session.withdraw(input),
                Err(LedgerError::InvalidAmount(_))
            ));
        }
        assert_eq!(session.balance(), dec!(5000));
        assert_eq!(session.account().transactions().len(), 1);
    }

    #[test]
    fn test_invalid_amount_is_checked_before_funds() {
        let mut session = Session::default();
        assert_eq!(
            session.withdraw("-99999"),
            Err(LedgerError::InvalidAmount(AmountError::NotPositive(dec!(-99999))))
        );
    }

    #[test]
    fn test_deposit_overflow_is_refused() {
        let mut session = Session::default();

        assert_eq!(
            session.deposit(&Decimal::MAX.to_string()),
            Err(LedgerError::BalanceOverflow)
        );
        assert_eq!(session.balance(), dec!(5000));
    }

    #[test]
    fn test_scenario_deposit_then_withdrawals() {
        let mut session = Session::default();

        assert_eq!(session.deposit("250.00"), Ok(dec!(5250.00)));
        assert_eq!(session.account().transactions().len(), 2);

        assert!(matches!(
            session.withdraw("6000.00"),
            Err(LedgerError::InsufficientFunds { .. })
        ));
        assert_eq!(session.balance(), dec!(5250.00));

        assert_eq!(session.withdraw("250.00"), Ok(dec!(5000.00)));
        assert_eq!(session.account().transactions().len(), 3);
    }

    #[test]
    fn test_change_pin_success() {
        let mut session = Session::default();

        assert_eq!(session.change_pin("1234", "4321", "4321"), Ok(()));
        assert!(session.credential().pin().matches("4321"));
        assert_eq!(session.account().transactions().len(), 1);
    }

    #[test]
    fn test_change_pin_wrong_old_pin() {
        let mut session = Session::default();

        assert_eq!(
            session.change_pin("0000", "4321", "4321"),
            Err(LedgerError::WrongPin)
        );
        assert!(session.credential().pin().matches("1234"));
    }

    #[test]
    fn test_change_pin_invalid_format() {
        let mut session = Session::default();

        assert_eq!(
            session.change_pin("1234", "12a4", "12a4"),
            Err(LedgerError::InvalidPinFormat(InvalidPin))
        );
        assert!(session.credential().pin().matches("1234"));
    }

    #[test]
    fn test_change_pin_mismatch() {
        let mut session = Session::default();

        assert_eq!(
            session.change_pin("1234", "4321", "4322"),
            Err(LedgerError::PinMismatch)
        );
        assert!(session.credential().pin().matches("1234"));
    }

    #[test]
    fn test_change_pin_checks_old_pin_first() {
        let mut session = Session::default();
        assert_eq!(
            session.change_pin("9999", "bad", "other"),
            Err(LedgerError::WrongPin)
        );
    }

    #[test]
    fn test_statement_balance_matches_log() {
        let mut session = Session::default();
        for _ in 0..4 {
            session.deposit("10").unwrap();
        }
        session.withdraw("15").unwrap();

        let statement = session.statement();
        let logged: Decimal = session
            .account()
            .transactions()
            .iter()
            .map(|tx| tx.signed_amount())
            .sum();
        assert_eq!(statement.balance(), logged);
        assert_eq!(statement.recent().len(), 5);
        assert_eq!(statement.total_count(), 6);
        assert_eq!(
            statement.recent().last().unwrap().kind(),
            TransactionKind::Withdraw
        );
    }
}
