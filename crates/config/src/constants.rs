//! Centralized constants for keystone configuration loading.

/// Environment prefix used by the keystone CLI.
pub const DEFAULT_ENV_PREFIX: &str = "KEYSTONE";

/// Separator placed between the prefix and an upper-cased field tag.
pub const ENV_SEPARATOR: char = '_';

/// Variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Placeholder printed instead of secret values.
pub const REDACTED: &str = "[REDACTED]";
