//! Layered configuration inspection.
//!
//! Responsibilities:
//! - Merge plain file, environment and encrypted file into a `BaseConfig`,
//!   in that order, and print the result with secrets redacted.
//!
//! Invariants:
//! - The encrypted file is opened with key material accumulated by the
//!   readers before it (plain file, then environment).
//! - Without `--file`, the platform config path is read when it exists.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Subcommand;
use keystone_config::constants::DEFAULT_ENV_PREFIX;
use keystone_config::{BaseConfig, Chain, Reader, from_encrypted_file, from_env, from_file};
use keystone_crypto::{CryptoError, KeyMaterial};

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the merged configuration with secrets redacted
    Show {
        /// Prefix for environment variables (`{PREFIX}_VERSION`, ...)
        #[arg(long, default_value = DEFAULT_ENV_PREFIX)]
        prefix: String,

        /// Plain JSON or YAML configuration file
        #[arg(long, env = "KEYSTONE_CONFIG_PATH", value_name = "FILE")]
        file: Option<PathBuf>,

        /// Encrypted configuration file, applied last
        #[arg(long, value_name = "FILE")]
        encrypted_file: Option<PathBuf>,

        /// Fail when a given file does not exist
        #[arg(long)]
        required: bool,
    },

    /// Print the default configuration file path
    Path,
}

pub fn run(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show {
            prefix,
            file,
            encrypted_file,
            required,
        } => run_show(&prefix, file, encrypted_file, required),
        ConfigCommand::Path => {
            println!("{}", default_config_path()?.display());
            Ok(())
        }
    }
}

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/keystone/config.json`
/// - macOS: `~/Library/Application Support/keystone/config.json`
/// - Windows: `%AppData%\keystone\config\config.json`
fn default_config_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", "keystone")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join("config.json"))
}

fn run_show(
    prefix: &str,
    file: Option<PathBuf>,
    encrypted_file: Option<PathBuf>,
    required: bool,
) -> Result<()> {
    let (file, file_optional) = match file {
        Some(path) => (path, !required),
        None => (default_config_path()?, true),
    };

    let mut config = BaseConfig::default();
    Chain::new()
        .then(from_file(&file, file_optional))
        .then(from_env(prefix, BaseConfig::env_bindings())?)
        .read(&mut config)
        .context("Failed to load configuration")?;

    if let Some(path) = encrypted_file {
        let cipher = config
            .crypto
            .cipher()
            .context("Invalid key material for encrypted configuration")?
            .ok_or_else(|| {
                anyhow::Error::new(CryptoError::InvalidKeyMaterial {
                    material: KeyMaterial::Key,
                    reason: "not configured".to_string(),
                })
                .context(format!(
                    "Encrypted configuration needs {p}_CRYPTO_KEY and {p}_CRYPTO_NONCE or crypto.key and crypto.nonce",
                    p = prefix.trim_end_matches('_').to_ascii_uppercase()
                ))
            })?;

        from_encrypted_file(&path, !required, Arc::new(cipher))
            .read(&mut config)
            .context("Failed to load encrypted configuration")?;
    }

    println!("{}", serde_json::to_string_pretty(&config.redacted())?);
    Ok(())
}
