//! CLI command implementations.

pub mod config;
pub mod crypt;
pub mod keygen;
pub mod token;
