//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code mapping (see `error` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Keygen { key_size } => commands::keygen::run(key_size),
        Commands::Encrypt { args } => commands::crypt::run_encrypt(args),
        Commands::Decrypt { args } => commands::crypt::run_decrypt(args),
        Commands::Token { command } => commands::token::run(command),
        Commands::Config { command } => commands::config::run(command),
    }
}
