//! Tests for finding `tictactoe.toml` in the working directory.
//!
//! Kept to a single test in its own binary because it changes the process
//! working directory.

use std::fs;
use tictactoe::{DEFAULT_CONFIG_FILE, Mark, Settings};

#[test]
fn test_load_without_path_uses_working_directory() {
    let original = std::env::current_dir().unwrap();
    let dir = tempfile::tempdir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let defaults = Settings::load(None).unwrap();

    fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "cross_symbol = '#'\nlog_filter = 'warn'\n",
    )
    .unwrap();
    let found = Settings::load(None).unwrap();

    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "cross_symbol = 'O'\n").unwrap();
    let invalid = Settings::load(None);

    std::env::set_current_dir(original).unwrap();

    assert_eq!(defaults, Settings::default());
    assert_eq!(found.symbol(Mark::Cross), '#');
    assert_eq!(found.log_filter(), "warn");
    assert!(invalid.unwrap_err().message.contains("must differ"));
}
