//! Shared test fixtures for engine and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use quizstyle::models::{ColorSlot, Configuration, FontCatalog, FontSubset, Palette};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the quizstyle binary
pub fn quizstyle_bin() -> String {
    std::env::var("CARGO_BIN_EXE_quizstyle")
        .unwrap_or_else(|_| "target/release/quizstyle".to_string())
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(quizstyle_bin());
    cmd.env("QUIZSTYLE_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary in a fresh temporary config directory.
pub fn run_isolated(args: &[&str]) -> Output {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, temp_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON, panicking with stderr on failure.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

/// Default configuration over the built-in catalog.
pub fn default_configuration() -> Configuration {
    let catalog = FontCatalog::builtin().expect("built-in catalog");
    Configuration::new(Palette::default(), FontSubset::full(&catalog))
        .expect("built-in catalog has both roles")
}

/// Default configuration with the given color slots.
pub fn configuration_with(
    background: ColorSlot,
    options: ColorSlot,
    check_answer: ColorSlot,
) -> Configuration {
    let mut config = default_configuration();
    config.set_background(background);
    config.set_options(options);
    config.set_check_answer(check_answer);
    config
}

/// Writes a minimal two-font-per-role catalog and returns its path.
pub fn write_small_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("catalog.json");
    let json = r#"{
  "display": [
    { "name": "Alpha", "family": "Alpha, serif", "weight": 700, "size": "2rem" },
    { "name": "Beta", "family": "Beta, sans-serif", "weight": 600, "size": "2rem" }
  ],
  "body": [
    { "name": "Gamma", "family": "Gamma, sans-serif", "weight": 400, "size": "1rem" },
    { "name": "Alpha Text", "family": "Alpha, serif", "weight": 400, "size": "1rem" }
  ]
}"#;
    std::fs::write(&path, json).expect("Failed to write catalog");
    path
}
