use crate::config::env::try_load_dotenv;
use crate::config::{CONFIG_FILE_NAME, ClientConfig};
use crate::error::ConfigError;
use crate::{API_BASE_URL_ENV, DEFAULT_API_BASE_URL};

use std::time::Duration;

use serial_test::serial;
use tempfile::TempDir;

fn set_base_url_env(value: &str) {
    // SAFETY: tests touching the environment are #[serial]
    unsafe { std::env::set_var(API_BASE_URL_ENV, value) };
}

fn clear_base_url_env() {
    // SAFETY: see set_base_url_env
    unsafe { std::env::remove_var(API_BASE_URL_ENV) };
}

/// **VALUE**: Verifies a fresh install works with no config file at all.
///
/// **BUG THIS CATCHES**: Would catch treating a missing file as an error.
#[test]
#[serial]
fn given_no_config_file_when_loaded_then_defaults_used() {
    // GIVEN
    clear_base_url_env();
    let dir = TempDir::new().unwrap();

    // WHEN
    let config = ClientConfig::load(dir.path()).unwrap();

    // THEN
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.base_url().unwrap().as_str(), "http://localhost:5409/");
    assert_eq!(config.cache_ttl(), Duration::from_secs(10));
}

#[test]
#[serial]
fn given_env_override_when_loaded_then_env_wins_over_file() {
    // GIVEN: A file with one URL and the env var with another
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[api]\nbase_url = \"http://file.example.com\"\n",
    )
    .unwrap();
    set_base_url_env("  https://env.example.com/api  ");

    // WHEN
    let config = ClientConfig::load(dir.path());
    clear_base_url_env();

    // THEN
    assert_eq!(config.unwrap().api.base_url, "https://env.example.com/api");
}

#[test]
#[serial]
fn given_blank_env_override_when_loaded_then_file_value_kept() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[api]\nbase_url = \"http://file.example.com\"\n",
    )
    .unwrap();
    set_base_url_env("   ");

    let config = ClientConfig::load(dir.path());
    clear_base_url_env();

    assert_eq!(config.unwrap().api.base_url, "http://file.example.com");
}

#[test]
fn given_partial_file_when_loaded_then_missing_fields_defaulted() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[cache]\nttl_secs = 30\n").unwrap();

    let config = ClientConfig::load_file(dir.path()).unwrap();

    assert_eq!(config.cache.ttl_secs, 30);
    assert_eq!(config.api.request_timeout_secs, 30);
    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn given_invalid_toml_when_loaded_then_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[api\nbase_url =").unwrap();

    let err = ClientConfig::load_file(dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn given_config_when_saved_then_loads_back_equal() {
    // GIVEN
    let dir = TempDir::new().unwrap();
    let mut config = ClientConfig::default();
    config.cache.max_entries = Some(16);
    config.api.base_url = "https://console.example.com".to_string();

    // WHEN
    config.save(dir.path()).unwrap();
    let loaded = ClientConfig::load_file(dir.path()).unwrap();

    // THEN
    assert_eq!(loaded, config);
    assert!(!dir.path().join(format!("{CONFIG_FILE_NAME}.tmp")).exists());
}

#[test]
fn given_invalid_values_when_validated_then_validation_error() {
    let cases: Vec<Box<dyn Fn(&mut ClientConfig)>> = vec![
        Box::new(|c| c.api.base_url = "not a url".to_string()),
        Box::new(|c| c.api.base_url = "ftp://files.example.com".to_string()),
        Box::new(|c| c.api.request_timeout_secs = 0),
        Box::new(|c| c.cache.ttl_secs = 0),
        Box::new(|c| c.cache.max_entries = Some(0)),
        Box::new(|c| c.version = 99),
    ];

    for mutate in cases {
        let mut config = ClientConfig::default();
        mutate(&mut config);

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::ValidationError { .. }), "{err}");
    }
}

#[test]
fn given_explicit_storage_dir_when_resolved_then_it_is_used() {
    let mut config = ClientConfig::default();
    config.storage.dir = Some("/tmp/console-state".into());

    assert_eq!(
        config.storage_dir().unwrap(),
        std::path::PathBuf::from("/tmp/console-state")
    );
}

/// Run `f` with the working directory set to `dir`, restoring it afterwards.
fn in_dir<R>(dir: &std::path::Path, f: impl FnOnce() -> R) -> R {
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir).unwrap();
    let result = f();
    std::env::set_current_dir(previous).unwrap();
    result
}

/// **VALUE**: Verifies the `.env` outcome survives until the host can log it.
///
/// **BUG THIS CATCHES**: Would catch the loader reporting only through log
/// lines emitted before any logger exists, leaving a broken `.env` invisible.
#[test]
#[serial]
fn given_malformed_env_file_when_loaded_then_outcome_carries_parse_error() {
    // GIVEN
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".env"), "NOT A VALID LINE\n").unwrap();

    // WHEN
    let outcome = in_dir(dir.path(), try_load_dotenv);

    // THEN
    assert!(!outcome.loaded);
    assert!(outcome.error.is_some());
}

#[test]
#[serial]
fn given_valid_env_file_when_loaded_then_path_reported_and_variables_set() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".env"), "ACCESS_CORE_DOTENV_MARKER=loaded\n").unwrap();

    let outcome = in_dir(dir.path(), try_load_dotenv);

    assert!(outcome.loaded);
    assert!(outcome.error.is_none());
    assert_eq!(outcome.path.unwrap().file_name().unwrap(), ".env");
    assert_eq!(std::env::var("ACCESS_CORE_DOTENV_MARKER").unwrap(), "loaded");
    // SAFETY: see set_base_url_env
    unsafe { std::env::remove_var("ACCESS_CORE_DOTENV_MARKER") };
}
