//! Console front end.
//!
//! Thin presentation layer over the ATM core:
//! - `Atm` - Banner, login, then the main menu loop until a terminal state
//! - `Console` - Prompting and printing over any `BufRead`/`Write` pair
//! - `MenuCommand` - The five menu choices

mod menu;
mod prompt;

use std::io::{self, BufRead, Write};

use crate::atm::{
    format_currency, AmountError, Decimal, LedgerError, LoginOutcome, LoginPhase, Pin, Session,
    Transaction,
};

pub use menu::MenuCommand;
pub use prompt::Console;

const RULE_WIDTH: usize = 40;

/// Why the ATM stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user chose Exit from the menu.
    UserExit,
    /// Login attempts were exhausted.
    Locked,
    /// Input ended before the user chose Exit.
    InputClosed,
}

impl ExitReason {
    /// Process exit code for this terminal state
    pub fn exit_code(self) -> u8 {
        match self {
            ExitReason::UserExit => 0,
            ExitReason::InputClosed => 1,
            ExitReason::Locked => 2,
        }
    }
}

/// Outcome of one menu command.
enum Flow {
    Continue,
    Exit(ExitReason),
}

/// Interactive ATM: owns the session and talks to the user through a `Console`.
#[derive(Debug)]
pub struct Atm<R, W> {
    session: Session,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Atm<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            console: Console::new(input, output),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.console.into_output())
    }

    /// Run the whole interaction: banner, login, then the menu loop.
    pub fn run(&mut self) -> io::Result<ExitReason> {
        log::info!("ATM session started");
        let reason = match self.login()? {
            LoginOutcome::Success => self.menu_loop()?,
            LoginOutcome::Locked(_) => ExitReason::Locked,
            LoginOutcome::Abandoned => ExitReason::InputClosed,
        };
        log::info!("ATM session ended: {reason:?}");
        Ok(reason)
    }

    fn login(&mut self) -> io::Result<LoginOutcome> {
        let double_rule = "=".repeat(RULE_WIDTH);
        self.console.say(&double_rule)?;
        self.console.say("      WELCOME TO THE ATM SIMULATOR")?;
        self.console.say(&double_rule)?;

        let outcome = self.session.attempt_login(&mut self.console)?;
        match outcome {
            LoginOutcome::Success => self.console.say("\nSign In Successful! Welcome back.")?,
            LoginOutcome::Locked(LoginPhase::Username) => {
                self.console.say("Too many invalid attempts. Exiting.")?;
            }
            LoginOutcome::Locked(LoginPhase::Pin) => {
                self.console
                    .say("Too many invalid attempts. Access denied. Exiting.")?;
            }
            LoginOutcome::Abandoned => {}
        }
        Ok(outcome)
    }

    fn menu_loop(&mut self) -> io::Result<ExitReason> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.console.prompt("Enter your command (1-5): ")? else {
                return Ok(ExitReason::InputClosed);
            };

            let Some(command) = MenuCommand::from_choice(&choice) else {
                log::trace!("[menu] rejected choice {choice:?}");
                self.console
                    .say("\nInvalid choice. Please enter a number between 1 and 5.")?;
                continue;
            };

            log::trace!("[menu] {command:?}");
            if let Flow::Exit(reason) = self.dispatch(command)? {
                return Ok(reason);
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let hash_rule = "#".repeat(RULE_WIDTH);
        self.console.say(format_args!("\n{hash_rule}"))?;
        self.console.say("        MAIN MENU")?;
        self.console.say(&hash_rule)?;
        for command in MenuCommand::ALL {
            self.console
                .say(format_args!("{}. {}", command.key(), command.label()))?;
        }
        self.console.say(&hash_rule)
    }

    fn dispatch(&mut self, command: MenuCommand) -> io::Result<Flow> {
        match command {
            MenuCommand::Statement => {
                let statement = self.session.statement();
                self.console.say(format_args!("\n{statement}\n"))?;
                Ok(Flow::Continue)
            }
            MenuCommand::Withdraw => self.withdraw(),
            MenuCommand::Deposit => self.deposit(),
            MenuCommand::ChangePin => self.change_pin(),
            MenuCommand::Exit => {
                self.console
                    .say("\nThank you for using the ATM Simulator. Goodbye!")?;
                Ok(Flow::Exit(ExitReason::UserExit))
            }
        }
    }

    fn withdraw(&mut self) -> io::Result<Flow> {
        let Some(input) = self.console.prompt("Enter amount to withdraw: $")? else {
            return Ok(Flow::Exit(ExitReason::InputClosed));
        };

        match self.session.withdraw(&input) {
            Ok(balance) => {
                // The log entry holds the parsed amount
                let amount = self.last_amount();
                self.console
                    .say(format_args!("\nSUCCESS! Withdrew {}.", format_currency(amount)))?;
                self.console
                    .say(format_args!("New Balance: {}", format_currency(balance)))?;
            }
            Err(e) => self.report(&e, "Withdrawal")?,
        }
        Ok(Flow::Continue)
    }

    fn deposit(&mut self) -> io::Result<Flow> {
        let Some(input) = self.console.prompt("Enter amount to deposit (lodge): $")? else {
            return Ok(Flow::Exit(ExitReason::InputClosed));
        };

        match self.session.deposit(&input) {
            Ok(balance) => {
                let amount = self.last_amount();
                self.console
                    .say(format_args!("\nSUCCESS! Deposited {}.", format_currency(amount)))?;
                self.console
                    .say(format_args!("New Balance: {}", format_currency(balance)))?;
            }
            Err(e) => self.report(&e, "Deposit")?,
        }
        Ok(Flow::Continue)
    }

    /// Ask for each PIN in turn, stopping at the first failed check.
    fn change_pin(&mut self) -> io::Result<Flow> {
        let Some(old_pin) = self.console.prompt("Enter current PIN: ")? else {
            return Ok(Flow::Exit(ExitReason::InputClosed));
        };
        if let Err(e) = self.session.verify_pin(&old_pin) {
            self.report(&e, "PIN change")?;
            return Ok(Flow::Continue);
        }

        let Some(new_pin) = self.console.prompt("Enter new 4-digit PIN: ")? else {
            return Ok(Flow::Exit(ExitReason::InputClosed));
        };
        if let Err(e) = new_pin.parse::<Pin>() {
            self.report(&LedgerError::from(e), "PIN change")?;
            return Ok(Flow::Continue);
        }

        let Some(confirm_pin) = self.console.prompt("Confirm new PIN: ")? else {
            return Ok(Flow::Exit(ExitReason::InputClosed));
        };
        match self.session.change_pin(&old_pin, &new_pin, &confirm_pin) {
            Ok(()) => self
                .console
                .say("\nSUCCESS! Your PIN has been successfully changed.")?,
            Err(e) => self.report(&e, "PIN change")?,
        }
        Ok(Flow::Continue)
    }

    fn last_amount(&self) -> Decimal {
        self.session
            .account()
            .transactions()
            .last()
            .map_or(Decimal::ZERO, Transaction::amount)
    }

    fn report(&mut self, error: &LedgerError, operation: &str) -> io::Result<()> {
        log::debug!("[{operation}] failed: {error}");
        match error {
            LedgerError::InvalidAmount(AmountError::NotPositive(_)) => self
                .console
                .say(format_args!("\nERROR: {operation} amount must be positive.")),
            LedgerError::InsufficientFunds { .. } => {
                self.console.say("\nERROR: Insufficient funds.")
            }
            LedgerError::BalanceOverflow => self
                .console
                .say("\nAn unexpected error occurred: amount too large for this account."),
            other => self.console.say(format_args!("\nERROR: {other}")),
        }
    }
}
