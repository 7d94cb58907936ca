//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variable fallbacks.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "keystone")]
#[command(about = "Keystone - key material, encrypted configuration and credential tokens", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  keystone keygen > .env\n  keystone encrypt config.json --output config.enc\n  keystone config show --encrypted-file config.enc\n  keystone token issue\n  keystone token verify --digest \"$DIGEST\" --token \"$TOKEN\"\n"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a random AES key and nonce
    Keygen {
        /// Key size in bytes (16, 24 or 32)
        #[arg(long, default_value = "32", value_parser = commands::keygen::parse_key_size)]
        key_size: keystone_crypto::KeySize,
    },

    /// Encrypt a configuration file
    Encrypt {
        #[command(flatten)]
        args: commands::crypt::EncryptArgs,
    },

    /// Decrypt an encrypted configuration file
    Decrypt {
        #[command(flatten)]
        args: commands::crypt::DecryptArgs,
    },

    /// Issue and verify credential tokens
    Token {
        #[command(subcommand)]
        command: commands::token::TokenCommand,
    },

    /// Inspect layered configuration
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommand,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_keygen_rejects_unsupported_key_size() {
        let result = Cli::try_parse_from(["keystone", "keygen", "--key-size", "20"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_keygen_defaults_to_256_bit_keys() {
        let cli = Cli::try_parse_from(["keystone", "keygen"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Keygen {
                key_size: keystone_crypto::KeySize::Aes256
            }
        ));
    }
}
