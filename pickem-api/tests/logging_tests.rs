//! Subscriber setup tests
//!
//! The global subscriber can only be installed once per process, so the whole
//! lifecycle is exercised in a single test.

use pickem_api::logging;
use pickem_common::config::load_toml_config;
use tracing::Level;

#[test]
fn test_subscriber_installed_before_config_and_level_applied_after() {
    std::env::remove_var("RUST_LOG");
    std::env::remove_var("PICKEM_LOG_LEVEL");

    let handle = logging::init(None).expect("Should install subscriber");
    assert!(tracing::dispatcher::has_been_set());
    assert!(!handle.is_from_env());

    // Config notices are warn/info from pickem_common and must not be dropped
    assert!(tracing::enabled!(target: "pickem_common::config", Level::WARN));
    assert!(tracing::enabled!(target: "pickem_common::config", Level::INFO));
    let dir = tempfile::tempdir().unwrap();
    let config = load_toml_config(&dir.path().join("missing.toml")).unwrap();
    assert!(config.data_file.is_none());

    handle.apply_level("error").unwrap();
    assert!(!tracing::enabled!(target: "pickem_common::config", Level::WARN));
    assert!(tracing::enabled!(target: "pickem_common::config", Level::ERROR));

    assert!(handle.apply_level("chatty").is_err());

    // Installing twice is an error, not a panic
    assert!(logging::init(Some("debug")).is_err());
}
