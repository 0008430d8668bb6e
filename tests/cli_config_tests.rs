//! End-to-end tests for `quizstyle config` commands.

use std::fs;

mod fixtures;
use fixtures::*;
use tempfile::TempDir;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let output = run_isolated(&["config", "show"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Layout: fullscreen"));
    assert!(stdout.contains("(built-in)"));
}

#[test]
fn test_config_show_json_schema() {
    let result = stdout_json(&run_isolated(&["config", "show", "--json"]));

    assert!(result["ui"].is_object(), "Should have ui object");
    assert_eq!(result["ui"]["layout"], "fullscreen");
    assert_eq!(result["ui"]["question_text"], "Question");
    assert_eq!(result["palette"]["grey"], "#F3F4F6");
    assert_eq!(result["palette"]["accent1"], "#3B82F6");
    assert!(result["fonts"].is_object());
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_requires_an_option() {
    let output = run_isolated(&["config", "set"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("At least one configuration option"));
}

#[test]
fn test_config_set_persists() {
    let temp_dir = TempDir::new().unwrap();

    let output = isolated_command(
        &[
            "config",
            "set",
            "--layout",
            "half",
            "--question",
            "Capital of France?",
            "--grey",
            "#E5E7EB",
        ],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(temp_dir.path().join("config.toml").exists());

    let output = isolated_command(&["config", "show", "--json"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    let result = stdout_json(&output);
    assert_eq!(result["ui"]["layout"], "half");
    assert_eq!(result["ui"]["question_text"], "Capital of France?");
    assert_eq!(result["palette"]["grey"], "#E5E7EB");

    // The configured grey and question feed resolution
    let output = isolated_command(&["resolve", "--json"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    let result = stdout_json(&output);
    assert_eq!(result["background"], "#E5E7EB");
    assert_eq!(result["title"]["text"], "Capital of France?");
}

#[test]
fn test_config_set_blank_question_rejected() {
    let output = run_isolated(&["config", "set", "--question", "   "]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_dark_grey_rejected() {
    let temp_dir = TempDir::new().unwrap();

    let output = isolated_command(&["config", "set", "--grey", "#333333"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_font_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_small_catalog(temp_dir.path());

    let output = isolated_command(
        &["config", "set", "--font-catalog", catalog.to_str().unwrap()],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let output = isolated_command(&["fonts", "--json"], temp_dir.path())
        .output()
        .expect("Failed to execute command");
    let result = stdout_json(&output);
    assert_eq!(result["display"].as_array().unwrap().len(), 2);
    assert_eq!(result["display"][0]["name"], "Alpha");
}

#[test]
fn test_config_set_invalid_font_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.json");
    fs::write(&path, r#"{ "display": [], "body": [] }"#).unwrap();

    let output = isolated_command(
        &["config", "set", "--font-catalog", path.to_str().unwrap()],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_invalid_file_is_validation_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.toml"), "[ui]\nlayout = \"wide\"\n").unwrap();

    let output = isolated_command(&["resolve"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
}

// ============================================================================
// Path Command Tests
// ============================================================================

#[test]
fn test_config_path_honors_override() {
    let temp_dir = TempDir::new().unwrap();

    let output = isolated_command(&["config", "path"], temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = temp_dir.path().join("config.toml");
    assert_eq!(stdout.trim(), expected.to_string_lossy());
}
