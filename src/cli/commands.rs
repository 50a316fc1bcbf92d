pub(crate) use clap::Parser;
use rust_decimal::Decimal;

use atm_simulator::SessionConfig;

#[derive(Parser, Debug)]
#[command(
    name = "atm-simulator",
    author,
    version,
    about = "A single-user console ATM simulator",
    long_about = None,
    after_help = "EXIT STATUS:\n    0  exited from the menu\n    1  input closed before exit\n    2  locked out after too many invalid sign-in attempts"
)]
pub struct Args {
    /// Username accepted at sign-in
    #[arg(long, value_name = "NAME", default_value = "user123")]
    pub username: String,

    /// Four-digit PIN accepted at sign-in
    #[arg(long, value_name = "PIN", default_value = "1234")]
    pub pin: String,

    /// Balance the account opens with, recorded as the initial deposit
    #[arg(long, value_name = "AMOUNT", default_value = "5000.00")]
    pub opening_balance: Decimal,

    /// Attempts allowed for each of username and PIN before lockout
    #[arg(
        long,
        value_name = "N",
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(1..)
    )]
    pub max_attempts: u8,
}

impl From<Args> for SessionConfig {
    fn from(args: Args) -> Self {
        SessionConfig {
            username: args.username,
            pin: args.pin,
            opening_balance: args.opening_balance,
            max_login_attempts: args.max_attempts,
        }
    }
}
