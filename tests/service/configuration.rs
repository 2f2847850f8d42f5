//! Builder and TOML configuration.

use crate::common::*;
use lifeboard::{Config, Error, Lifeboard, DEFAULT_MAX_FINAL_ATTEMPTS};
use tempfile::TempDir;

#[test]
fn default_service_uses_default_budget() {
    let boards = memory_service();
    assert_eq!(boards.max_final_attempts(), DEFAULT_MAX_FINAL_ATTEMPTS);
}

#[test]
fn builder_overrides_budget() {
    let boards = Lifeboard::builder().max_final_attempts(42).open().unwrap();
    assert_eq!(boards.max_final_attempts(), 42);
}

#[test]
fn zero_budget_is_a_config_error() {
    let err = Lifeboard::builder().max_final_attempts(0).open().err().unwrap();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn config_file_selects_directory_and_budget() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("boards");
    let file = dir.path().join("lifeboard.toml");
    std::fs::write(
        &file,
        format!(
            "max_final_attempts = 3\ndata_dir = {:?}\n",
            data.to_str().unwrap()
        ),
    )
    .unwrap();

    let config = Config::load(&file).unwrap();
    let boards = Lifeboard::builder().config(config).open().unwrap();
    assert_eq!(boards.max_final_attempts(), 3);

    let id = boards.upload(&glider()).unwrap();
    assert!(data.join(format!("{}.json", id)).is_file());
    assert!(boards.final_state(&id).unwrap_err().is_not_stabilized());
}

#[test]
fn missing_config_file_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
