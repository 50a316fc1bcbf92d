//! Scripted walk through the ATM console against the demo account.
//!
//! Run with: `cargo run --example scripted`

use atm_simulator::{Atm, Session};
use std::io::Cursor;

fn main() {
    // Initialize logger (optional, but shows what's happening)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    // Sign in, deposit, try to overdraw, withdraw, change the PIN, show the statement, exit
    let script = "user123
1234
3
250.00
2
6000
2
250
4
1234
4321
4321
1
5
";

    let mut atm = Atm::new(Session::default(), Cursor::new(script), std::io::stdout());
    let reason = atm.run().expect("Failed to run the scripted session");

    println!("\n=== Session ended: {reason:?} (exit code {}) ===", reason.exit_code());
}
