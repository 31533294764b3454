//! Configuration resolution tests
//!
//! Covers the CLI → environment → TOML → compiled default priority order and
//! graceful handling of missing config files.
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate PICKEM_* variables are marked with #[serial].

use pickem_common::config::{
    load_toml_config, CliOverrides, CompiledDefaults, ServiceConfig, TomlConfig, ENV_DATA_FILE,
    ENV_HOST, ENV_LOG_LEVEL, ENV_PORT,
};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

fn clear_env() {
    for var in [ENV_DATA_FILE, ENV_HOST, ENV_PORT, ENV_LOG_LEVEL] {
        env::remove_var(var);
    }
}

#[test]
fn test_compiled_defaults() {
    let defaults = CompiledDefaults::for_current_platform();
    assert!(defaults.data_file.ends_with("db.json"));
    assert_eq!(defaults.host, "127.0.0.1");
    assert_eq!(defaults.port, 5000);
    assert_eq!(defaults.log_level, "info");
}

#[test]
#[serial]
fn test_no_overrides_uses_defaults() {
    clear_env();

    let config = ServiceConfig::resolve_with(CliOverrides::default(), TomlConfig::default()).unwrap();
    let defaults = CompiledDefaults::for_current_platform();

    assert_eq!(config.data_file, defaults.data_file);
    assert_eq!(config.listen_addr(), "127.0.0.1:5000");
    assert_eq!(config.log_level, "info");
}

#[test]
#[serial]
fn test_toml_overrides_defaults() {
    clear_env();

    let toml_config: TomlConfig = toml::from_str(
        r#"
        data_file = "/tmp/pickem-toml/db.json"
        port = 6001

        [logging]
        level = "debug"
        "#,
    )
    .unwrap();

    let config = ServiceConfig::resolve_with(CliOverrides::default(), toml_config).unwrap();
    assert_eq!(config.data_file, PathBuf::from("/tmp/pickem-toml/db.json"));
    assert_eq!(config.port, 6001);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.log_level, "debug");
}

#[test]
#[serial]
fn test_env_overrides_toml() {
    clear_env();
    env::set_var(ENV_DATA_FILE, "/tmp/pickem-env/db.json");
    env::set_var(ENV_PORT, "7002");

    let toml_config = TomlConfig {
        data_file: Some(PathBuf::from("/tmp/pickem-toml/db.json")),
        port: Some(6001),
        ..Default::default()
    };
    let config = ServiceConfig::resolve_with(CliOverrides::default(), toml_config).unwrap();

    assert_eq!(config.data_file, PathBuf::from("/tmp/pickem-env/db.json"));
    assert_eq!(config.port, 7002);

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env();
    env::set_var(ENV_DATA_FILE, "/tmp/pickem-env/db.json");
    env::set_var(ENV_HOST, "0.0.0.0");

    let cli = CliOverrides {
        data_file: Some(PathBuf::from("/tmp/pickem-cli/db.json")),
        port: Some(8003),
        ..Default::default()
    };
    let config = ServiceConfig::resolve_with(cli, TomlConfig::default()).unwrap();

    assert_eq!(config.data_file, PathBuf::from("/tmp/pickem-cli/db.json"));
    assert_eq!(config.port, 8003);
    // Host not given on the CLI, so the environment wins
    assert_eq!(config.host, "0.0.0.0");

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_port_is_config_error() {
    clear_env();
    env::set_var(ENV_PORT, "not-a-port");

    let result = ServiceConfig::resolve_with(CliOverrides::default(), TomlConfig::default());
    assert!(matches!(result, Err(pickem_common::Error::Config(_))));

    clear_env();
}

#[test]
fn test_missing_toml_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_toml_config(&dir.path().join("absent.toml")).unwrap();
    assert!(config.data_file.is_none());
    assert!(config.port.is_none());
}

#[test]
fn test_malformed_toml_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = \"not a number\"").unwrap();

    assert!(matches!(
        load_toml_config(&path),
        Err(pickem_common::Error::Config(_))
    ));
}

#[test]
#[serial]
fn test_resolve_reads_explicit_config_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "host = \"10.0.0.5\"\nport = 9004\n").unwrap();

    let cli = CliOverrides {
        config: Some(path),
        ..Default::default()
    };
    let config = ServiceConfig::resolve(cli).unwrap();
    assert_eq!(config.listen_addr(), "10.0.0.5:9004");
}
