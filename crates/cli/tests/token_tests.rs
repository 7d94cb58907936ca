//! Integration tests for `keystone token issue` and `keystone token verify`.

mod common;

use common::{FAST_COST, keystone_cmd};
use predicates::prelude::*;

fn issue() -> (String, String) {
    let output = keystone_cmd()
        .args(["token", "issue"])
        .args(FAST_COST)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    (
        json["token"].as_str().unwrap().to_string(),
        json["digest"].as_str().unwrap().to_string(),
    )
}

#[test]
fn test_issue_prints_token_and_digest() {
    let (token, digest) = issue();

    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(!digest.contains(&token));
}

#[test]
fn test_verify_with_flag() {
    let (token, digest) = issue();

    keystone_cmd()
        .args(["token", "verify", "--digest", digest.as_str(), "--token", token.as_str()])
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn test_verify_from_env_and_stdin() {
    let (token, digest) = issue();

    keystone_cmd()
        .env("KEYSTONE_TOKEN", &token)
        .args(["token", "verify", "--digest", digest.as_str()])
        .assert()
        .success();

    keystone_cmd()
        .args(["token", "verify", "--digest", digest.as_str()])
        .write_stdin(format!("{}\n", token))
        .assert()
        .success();
}

#[test]
fn test_verify_wrong_token_exits_2() {
    let (_, digest) = issue();
    let (other_token, _) = issue();

    keystone_cmd()
        .args(["token", "verify", "--digest", digest.as_str(), "--token", other_token.as_str()])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Token verification failed"))
        .stderr(predicate::str::contains(&other_token).not());
}

#[test]
fn test_verify_malformed_digest_exits_5() {
    keystone_cmd()
        .args(["token", "verify", "--digest", "not-a-digest", "--token", "abc"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Malformed digest"));
}

#[test]
fn test_issue_rejects_short_length() {
    keystone_cmd()
        .args(["token", "issue", "--length", "8"])
        .args(FAST_COST)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("at least 16"));
}

#[test]
fn test_issue_rejects_oversized_length() {
    keystone_cmd()
        .args(["token", "issue", "--length", "1000000000000"])
        .args(FAST_COST)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("at most 1024"));
}

#[test]
fn test_verify_without_token_fails() {
    let (_, digest) = issue();

    keystone_cmd()
        .args(["token", "verify", "--digest", digest.as_str()])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No token given"));
}
