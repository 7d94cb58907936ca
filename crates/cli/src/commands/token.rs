//! Credential token commands.

use std::io::BufRead;

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use keystone_crypto::constants::{
    DEFAULT_ITERATIONS, DEFAULT_MEMORY_KIB, DEFAULT_PARALLELISM, DEFAULT_TOKEN_LENGTH,
};
use keystone_crypto::{Token, TokenHasher};
use secrecy::SecretString;
use serde::Serialize;
use zeroize::Zeroizing;

#[derive(Subcommand)]
pub enum TokenCommand {
    /// Generate a token and the digest to store for it
    Issue {
        /// Number of random bytes behind the token (at least 16)
        #[arg(long, default_value_t = DEFAULT_TOKEN_LENGTH)]
        length: usize,

        #[command(flatten)]
        cost: CostArgs,
    },

    /// Check a token against a stored digest (exit code 2 on mismatch)
    Verify {
        /// Digest printed by `token issue`
        #[arg(long)]
        digest: String,

        /// Raw token; read from stdin when neither this nor KEYSTONE_TOKEN is set
        #[arg(long, env = "KEYSTONE_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },
}

/// Argon2id cost used for new digests.
#[derive(Args)]
pub struct CostArgs {
    /// Memory cost in KiB
    #[arg(long, default_value_t = DEFAULT_MEMORY_KIB)]
    memory_kib: u32,

    /// Number of passes
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Degree of parallelism
    #[arg(long, default_value_t = DEFAULT_PARALLELISM)]
    parallelism: u32,
}

#[derive(Serialize)]
struct IssuedToken<'a> {
    token: &'a str,
    digest: &'a str,
}

pub fn run(command: TokenCommand) -> Result<()> {
    match command {
        TokenCommand::Issue { length, cost } => run_issue(length, cost),
        TokenCommand::Verify { digest, token } => run_verify(&digest, token),
    }
}

fn run_issue(length: usize, cost: CostArgs) -> Result<()> {
    let hasher = TokenHasher::with_cost(cost.memory_kib, cost.iterations, cost.parallelism)
        .context("Invalid digest cost")?;
    let token = Token::random_with_length(length).context("Failed to generate token")?;
    let digest = hasher.digest(&token).context("Failed to digest token")?;

    let output = Zeroizing::new(serde_json::to_string_pretty(&IssuedToken {
        token: token.expose_secret(),
        digest: &digest,
    })?);
    println!("{}", output.as_str());

    tracing::info!(length, "Issued token");
    Ok(())
}

fn run_verify(digest: &str, token: Option<String>) -> Result<()> {
    let token = match token {
        Some(raw) => Token::from(SecretString::new(raw.into())),
        None => read_token(std::io::stdin().lock())?,
    };

    TokenHasher::default()
        .validate(&token, digest)
        .context("Token verification failed")?;

    println!("valid");
    Ok(())
}

fn read_token(mut reader: impl BufRead) -> Result<Token> {
    let mut line = Zeroizing::new(String::new());
    reader
        .read_line(&mut line)
        .context("Failed to read token from stdin")?;

    let raw = line.trim();
    if raw.is_empty() {
        bail!("No token given: pass --token, set KEYSTONE_TOKEN or pipe it on stdin");
    }
    Ok(Token::new(raw))
}
