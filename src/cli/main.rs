mod commands;

use std::process::ExitCode;

use anyhow::{Context, Result};
use atm_simulator::{Atm, Session, SessionConfig};
use commands::{Args, Parser};

fn main() -> Result<ExitCode> {
    // Parse the CLI arguments
    let args = Args::parse();

    // Initialize logger with default level of warn (can be overridden with RUST_LOG)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 1. Build the session from the seed values
    let config = SessionConfig::from(args);
    let session = Session::new(&config).context("Invalid account configuration")?;

    // 2. Run the console against stdin/stdout
    let stdin = std::io::stdin();
    let mut atm = Atm::new(session, stdin.lock(), std::io::stdout());
    let reason = atm.run().context("Console I/O failed")?;

    log::info!("Exiting with {reason:?}");
    Ok(ExitCode::from(reason.exit_code()))
}
