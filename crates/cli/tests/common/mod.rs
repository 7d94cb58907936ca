//! Shared test utilities for keystone CLI integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using these helpers are hermetic by default:
//!   no `.env` loading, no `KEYSTONE_*` variables from the host, and a
//!   platform config directory that does not exist.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;

use assert_cmd::Command;

/// Low digest cost so token tests stay fast.
pub const FAST_COST: [&str; 6] = ["--memory-kib", "1024", "--iterations", "1", "--parallelism", "1"];

/// Returns a hermetic `keystone` command for integration testing.
pub fn keystone_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("keystone");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    for (key, _) in std::env::vars() {
        if key.starts_with("KEYSTONE_") {
            cmd.env_remove(&key);
        }
    }
    cmd.env_remove("RUST_LOG");
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/keystone-test-config");

    cmd
}

/// Runs `keystone keygen` and returns its `NAME=value` lines as a map.
pub fn keygen(key_size: &str) -> HashMap<String, String> {
    let output = keystone_cmd()
        .args(["keygen", "--key-size", key_size])
        .output()
        .unwrap();
    assert!(output.status.success());

    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Encrypts `input` into `output` with the given material.
pub fn encrypt(material: &HashMap<String, String>, input: &Path, output: &Path) {
    keystone_cmd()
        .env("KEYSTONE_CRYPTO_KEY", &material["KEYSTONE_CRYPTO_KEY"])
        .env("KEYSTONE_CRYPTO_NONCE", &material["KEYSTONE_CRYPTO_NONCE"])
        .arg("encrypt")
        .arg(input)
        .arg("--output")
        .arg(output)
        .assert()
        .success();
}
