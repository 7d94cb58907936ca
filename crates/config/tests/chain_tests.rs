//! Integration tests for reader chains over `BaseConfig`.
//!
//! These tests wire environment, plain file and encrypted file readers the
//! way a service does at startup and check the merged result.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use keystone_config::{
    AppEnv, BaseConfig, Chain, ConfigError, EnvReader, MapLookup, Reader, from_encrypted_file,
    from_env, from_file,
};
use keystone_crypto::{AuthenticatedCipher, Crypto, CryptoError};
use secrecy::ExposeSecret;
use serial_test::serial;
use tempfile::TempDir;

fn env_reader(lookup: MapLookup) -> EnvReader<BaseConfig, MapLookup> {
    EnvReader::with_lookup("APP", BaseConfig::env_bindings(), lookup).unwrap()
}

fn cipher(key: &[u8]) -> AuthenticatedCipher {
    AuthenticatedCipher::from_bytes(key, &[11u8; 12]).unwrap()
}

#[test]
fn test_env_value_kept_when_optional_file_is_absent() {
    let temp_dir = TempDir::new().unwrap();
    let env = env_reader(MapLookup::new().with("APP_VERSION", "3.0.0"));
    let file = from_file(temp_dir.path().join("absent.json"), true);

    let mut config = BaseConfig::default();
    Chain::new().then(env).then(file).read(&mut config).unwrap();

    assert_eq!(config.version, "3.0.0");
    assert!(config.crypto.key.is_none());
    assert_eq!(config.env, AppEnv::Development);
}

#[test]
fn test_missing_required_file_leaves_destination_unmodified() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.json");
    let mut config = BaseConfig {
        version: "seed".to_string(),
        ..BaseConfig::default()
    };

    let err = from_file(&path, false).read(&mut config).unwrap_err();

    assert!(matches!(err, ConfigError::FileMissing { .. }));
    assert_eq!(err.path(), Some(path.as_path()));
    assert_eq!(config.version, "seed");
}

#[test]
fn test_chain_stops_at_first_error() {
    let temp_dir = TempDir::new().unwrap();
    let env = env_reader(MapLookup::new().with("APP_VERSION", "after-error"));
    let mut config = BaseConfig::default();

    let result = Chain::new()
        .then(from_file(temp_dir.path().join("absent.json"), false))
        .then(env)
        .read(&mut config);

    assert!(matches!(result, Err(ConfigError::FileMissing { .. })));
    assert!(config.version.is_empty());
}

#[test]
fn test_later_file_overrides_env_for_present_keys_only() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, r#"{"version": "from-file"}"#).unwrap();

    let env = env_reader(
        MapLookup::new()
            .with("APP_VERSION", "from-env")
            .with("APP_ENV", "staging")
            .with("APP_CRYPTO_KEY", "env-key"),
    );

    let mut config = BaseConfig::default();
    Chain::new()
        .then(env)
        .then(from_file(&path, false))
        .read(&mut config)
        .unwrap();

    assert_eq!(config.version, "from-file");
    assert_eq!(config.env, AppEnv::Staging);
    assert_eq!(config.crypto.key.unwrap().expose_secret(), "env-key");
}

#[test]
fn test_yaml_file_with_nested_section() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yml");
    std::fs::write(
        &path,
        "env: production\nversion: \"4.2.0\"\ncrypto:\n  nonce: yaml-nonce\n",
    )
    .unwrap();

    let mut config = BaseConfig::default();
    from_file(&path, false).read(&mut config).unwrap();

    assert!(config.env.is_production());
    assert_eq!(config.version, "4.2.0");
    assert!(config.crypto.key.is_none());
    assert_eq!(config.crypto.nonce.unwrap().expose_secret(), "yaml-nonce");
}

#[test]
fn test_invalid_env_value_names_variable() {
    let env = env_reader(MapLookup::new().with("APP_ENV", "moon"));
    let err = env.read(&mut BaseConfig::default()).unwrap_err();

    assert!(matches!(err, ConfigError::EnvBinding { ref var, .. } if var == "APP_ENV"));
    assert!(!err.to_string().contains("moon"));
}

#[test]
fn test_encrypted_file_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.enc");
    let sealer = cipher(&[1u8; 32]);
    std::fs::write(&path, sealer.encrypt(br#"{"version":"1.2.3"}"#).unwrap()).unwrap();

    let mut config = BaseConfig::default();
    from_encrypted_file(&path, false, Arc::new(cipher(&[1u8; 32])))
        .read(&mut config)
        .unwrap();
    assert_eq!(config.version, "1.2.3");

    let mut untouched = BaseConfig::default();
    let err = from_encrypted_file(&path, false, Arc::new(cipher(&[2u8; 32])))
        .read(&mut untouched)
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Decryption {
            source: CryptoError::AuthenticationFailed,
            ..
        }
    ));
    assert!(untouched.version.is_empty());
}

#[test]
fn test_cipher_built_from_accumulated_settings() {
    let temp_dir = TempDir::new().unwrap();
    let key = STANDARD.encode([7u8; 16]);
    let nonce = STANDARD.encode([8u8; 12]);

    let sealed_path = temp_dir.path().join("secrets.enc");
    let sealer = AuthenticatedCipher::new(&key, &nonce).unwrap();
    std::fs::write(&sealed_path, sealer.encrypt(br#"{"version":"sealed"}"#).unwrap()).unwrap();

    let mut config = BaseConfig::default();
    env_reader(
        MapLookup::new()
            .with("APP_CRYPTO_KEY", key.as_str())
            .with("APP_CRYPTO_NONCE", nonce.as_str()),
    )
    .read(&mut config)
    .unwrap();

    let decryptor: Arc<dyn Crypto> = Arc::new(config.crypto.cipher().unwrap().unwrap());
    from_encrypted_file(&sealed_path, false, decryptor)
        .read(&mut config)
        .unwrap();

    assert_eq!(config.version, "sealed");
}

#[test]
#[serial]
fn test_process_environment_prefix_scenario() {
    temp_env::with_vars(
        [
            ("APP_CRYPTO_KEY", Some("abc123")),
            ("APP_CRYPTO_NONCE", None::<&str>),
            ("APP_VERSION", None),
            ("APP_ENV", None),
        ],
        || {
            let mut config = BaseConfig::default();
            from_env("APP", BaseConfig::env_bindings())
                .unwrap()
                .read(&mut config)
                .unwrap();

            assert_eq!(config.crypto.key.unwrap().expose_secret(), "abc123");
            assert!(config.crypto.nonce.is_none());
        },
    );
}

#[test]
fn test_closure_reader_in_chain() {
    let mut config = BaseConfig::default();

    Chain::new()
        .then(|c: &mut BaseConfig| -> Result<(), ConfigError> {
            c.version = "defaults".to_string();
            Ok(())
        })
        .then(env_reader(MapLookup::new()))
        .read(&mut config)
        .unwrap();

    assert_eq!(config.version, "defaults");
}
