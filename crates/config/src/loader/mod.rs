//! Configuration readers for environment variables and files.
//!
//! Responsibilities:
//! - Define the `Reader` seam and the `Chain` that applies readers in order.
//! - Read environment variables through an explicit binding table.
//! - Read plain and encrypted configuration files into a destination patch.
//! - Load `.env` files into the process environment on request.
//!
//! Does NOT handle:
//! - Deciding which readers run or in which order (the caller's wiring).
//! - Key management for encrypted files (the caller supplies a `Crypto`).
//!
//! Invariants / Assumptions:
//! - Every reader only writes fields present in its own source, so later
//!   readers override earlier ones field by field.
//! - Readers are one-shot and stateless beyond what they capture when built.
//! - `load_dotenv()` must be called explicitly; `DOTENV_DISABLED` skips it.

mod bindings;
mod dotenv;
mod encrypted;
mod env;
mod error;
mod file;
mod lookup;
mod overlay;
mod reader;

pub use bindings::EnvBindings;
pub use dotenv::{load_dotenv, load_dotenv_from};
pub use encrypted::{EncryptedFileReader, from_encrypted_file};
pub use env::{EnvReader, from_env};
pub use error::ConfigError;
pub use file::{FileFormat, FileReader, FormatError, from_file};
pub use lookup::{Lookup, MapLookup, OsLookup, env_var_or_none};
pub use overlay::Overlay;
pub use reader::{Chain, Reader};
