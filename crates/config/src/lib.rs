//! Layered configuration loading for keystone services.
//!
//! This crate provides readers that populate a caller-owned destination from
//! environment variables, plain configuration files and encrypted
//! configuration files. Readers are applied in the order the caller chooses;
//! later readers override the fields they set.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    Chain, ConfigError, EncryptedFileReader, EnvBindings, EnvReader, FileFormat, FileReader,
    FormatError, Lookup, MapLookup, OsLookup, Overlay, Reader, env_var_or_none, from_encrypted_file,
    from_env, from_file, load_dotenv, load_dotenv_from,
};
pub use types::{
    AppEnv, BaseConfig, BaseConfigPatch, CryptoPatch, CryptoSettings, RedactedConfig, RedactedCrypto,
    UnknownAppEnv,
};
