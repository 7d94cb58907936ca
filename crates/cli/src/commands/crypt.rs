//! Whole-file encryption and decryption.
//!
//! Responsibilities:
//! - Seal a plaintext configuration file for `EncryptedFileReader`.
//! - Open a sealed file to a file or stdout.
//!
//! Invariants:
//! - Key material comes from `--key`/`--nonce` or `KEYSTONE_CRYPTO_KEY` /
//!   `KEYSTONE_CRYPTO_NONCE`; both halves are required.
//! - Plaintext buffers are zeroized after use.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use keystone_config::CryptoSettings;
use keystone_crypto::{AuthenticatedCipher, CryptoError, KeyMaterial};
use secrecy::SecretString;
use zeroize::Zeroizing;

#[derive(Args)]
pub struct KeyMaterialArgs {
    /// Base64 AES key (16, 24 or 32 bytes once decoded)
    #[arg(long, env = "KEYSTONE_CRYPTO_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Base64 nonce (12 bytes once decoded)
    #[arg(long, env = "KEYSTONE_CRYPTO_NONCE", hide_env_values = true)]
    pub nonce: Option<String>,
}

impl KeyMaterialArgs {
    fn cipher(self) -> Result<AuthenticatedCipher> {
        let settings = CryptoSettings {
            key: self.key.map(|k| SecretString::new(k.into())),
            nonce: self.nonce.map(|n| SecretString::new(n.into())),
        };

        settings
            .cipher()
            .context("Invalid key material")?
            .ok_or_else(|| {
                anyhow::Error::new(CryptoError::InvalidKeyMaterial {
                    material: KeyMaterial::Key,
                    reason: "not configured".to_string(),
                })
                .context("Pass --key and --nonce or set KEYSTONE_CRYPTO_KEY and KEYSTONE_CRYPTO_NONCE")
            })
    }
}

#[derive(Args)]
pub struct EncryptArgs {
    /// Plaintext configuration file
    pub input: PathBuf,

    /// Where to write the sealed file
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    #[command(flatten)]
    pub material: KeyMaterialArgs,
}

#[derive(Args)]
pub struct DecryptArgs {
    /// Sealed configuration file
    pub input: PathBuf,

    /// Where to write the plaintext (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub material: KeyMaterialArgs,
}

pub fn run_encrypt(args: EncryptArgs) -> Result<()> {
    let cipher = args.material.cipher()?;

    let plaintext = Zeroizing::new(
        std::fs::read(&args.input)
            .with_context(|| format!("Failed to read {}", args.input.display()))?,
    );
    let sealed = cipher.encrypt(&plaintext).context("Failed to encrypt")?;

    std::fs::write(&args.output, sealed)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    tracing::info!(
        input = %args.input.display(),
        output = %args.output.display(),
        "Encrypted configuration file"
    );
    Ok(())
}

pub fn run_decrypt(args: DecryptArgs) -> Result<()> {
    let cipher = args.material.cipher()?;

    let sealed = std::fs::read(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let plaintext = Zeroizing::new(
        cipher
            .decrypt(&sealed)
            .with_context(|| format!("Failed to decrypt {}", args.input.display()))?,
    );

    match &args.output {
        Some(path) => std::fs::write(path, plaintext.as_slice())
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&plaintext).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")?;
        }
    }

    tracing::info!(input = %args.input.display(), "Decrypted configuration file");
    Ok(())
}
