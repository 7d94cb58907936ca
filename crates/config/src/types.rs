//! Configuration types for keystone services.
//!
//! Responsibilities:
//! - Define `BaseConfig`, the destination shipped with the readers, and its
//!   environment binding table.
//! - Define the all-optional patch types file readers deserialize into.
//! - Provide a redacted view for display.
//!
//! Invariants:
//! - Crypto material is held as `SecretString` and only leaves through
//!   `CryptoSettings::cipher` or an explicit `expose_secret`.
//! - `redacted()` never contains secret values.

use std::fmt;
use std::str::FromStr;

use keystone_crypto::{AuthenticatedCipher, CryptoError, KeyMaterial};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::REDACTED;
use crate::loader::{EnvBindings, Overlay};

/// Module for deserializing optional secrets from configuration documents.
mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| SecretString::new(s.into())))
    }
}

/// Deployment environment a service runs in.
///
/// The set is closed: names other than `development`, `staging` and
/// `production` (any case) are rejected, so a misspelled `env` fails the
/// load instead of silently running with non-production behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AppEnv {
    #[default]
    Development,
    Staging,
    Production,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown environment, expected one of: development, staging, production")]
pub struct UnknownAppEnv;

impl AppEnv {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppEnv {
    type Err = UnknownAppEnv;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            _ => Err(UnknownAppEnv),
        }
    }
}

impl TryFrom<String> for AppEnv {
    type Error = UnknownAppEnv;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Key material for encrypted configuration files.
#[derive(Debug, Clone, Default)]
pub struct CryptoSettings {
    pub key: Option<SecretString>,
    pub nonce: Option<SecretString>,
}

impl CryptoSettings {
    /// Builds a cipher once both key and nonce are configured.
    ///
    /// Returns `Ok(None)` when neither is set. Only one of them being set is
    /// an `InvalidKeyMaterial` error naming the missing half.
    pub fn cipher(&self) -> Result<Option<AuthenticatedCipher>, CryptoError> {
        match (&self.key, &self.nonce) {
            (None, None) => Ok(None),
            (Some(key), Some(nonce)) => {
                AuthenticatedCipher::new(key.expose_secret(), nonce.expose_secret()).map(Some)
            }
            (None, Some(_)) => Err(not_configured(KeyMaterial::Key)),
            (Some(_), None) => Err(not_configured(KeyMaterial::Nonce)),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.key.is_some() && self.nonce.is_some()
    }
}

fn not_configured(material: KeyMaterial) -> CryptoError {
    CryptoError::InvalidKeyMaterial {
        material,
        reason: "not configured".to_string(),
    }
}

/// Base configuration shared by keystone services.
#[derive(Debug, Clone, Default)]
pub struct BaseConfig {
    pub env: AppEnv,
    pub version: String,
    pub crypto: CryptoSettings,
}

impl BaseConfig {
    /// Environment binding table: `env`, `version`, `crypto_key`, `crypto_nonce`.
    pub fn env_bindings() -> EnvBindings<BaseConfig> {
        EnvBindings::new()
            .bind("env", |c: &mut BaseConfig| &mut c.env)
            .bind("version", |c: &mut BaseConfig| &mut c.version)
            .bind_secret("crypto_key", |c: &mut BaseConfig| &mut c.crypto.key)
            .bind_secret("crypto_nonce", |c: &mut BaseConfig| &mut c.crypto.nonce)
    }

    /// A serializable view with secrets replaced by a marker.
    pub fn redacted(&self) -> RedactedConfig<'_> {
        RedactedConfig {
            env: self.env,
            version: &self.version,
            crypto: RedactedCrypto {
                key: self.crypto.key.as_ref().map(|_| REDACTED),
                nonce: self.crypto.nonce.as_ref().map(|_| REDACTED),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RedactedConfig<'a> {
    pub env: AppEnv,
    pub version: &'a str,
    pub crypto: RedactedCrypto,
}

#[derive(Debug, Serialize)]
pub struct RedactedCrypto {
    pub key: Option<&'static str>,
    pub nonce: Option<&'static str>,
}

/// Fields of a `BaseConfig` document; absent or null keys are `None`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BaseConfigPatch {
    pub env: Option<AppEnv>,
    pub version: Option<String>,
    pub crypto: Option<CryptoPatch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CryptoPatch {
    #[serde(deserialize_with = "secret_string::deserialize_option")]
    pub key: Option<SecretString>,
    #[serde(deserialize_with = "secret_string::deserialize_option")]
    pub nonce: Option<SecretString>,
}

impl Overlay for CryptoSettings {
    type Patch = CryptoPatch;

    fn overlay(&mut self, patch: CryptoPatch) {
        if let Some(key) = patch.key {
            self.key = Some(key);
        }
        if let Some(nonce) = patch.nonce {
            self.nonce = Some(nonce);
        }
    }
}

impl Overlay for BaseConfig {
    type Patch = BaseConfigPatch;

    fn overlay(&mut self, patch: BaseConfigPatch) {
        if let Some(env) = patch.env {
            self.env = env;
        }
        if let Some(version) = patch.version {
            self.version = version;
        }
        if let Some(crypto) = patch.crypto {
            self.crypto.overlay(crypto);
        }
    }
}
