//! Keystone CLI - key material, encrypted configuration and credential tokens.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging for the configured deployment environment.
//! - Run the selected command and map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Cryptography or configuration merging (see `keystone-crypto` and
//!   `keystone-config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Results go to stdout; logs and error messages go to stderr.

mod args;
mod commands;
mod dispatch;
mod error;
mod logging;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use keystone_config::load_dotenv;

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    logging::init(logging::app_env());

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
