//! Branding and application identity configuration.
//!
//! This module centralizes all branding-related strings (names, paths) to make
//! future rebranding easier.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "QuizStyle";

/// The binary/executable name (lowercase, no spaces).
///
/// Used in:
/// - Cargo.toml package name
/// - Binary executable name
/// - Command examples in help text
pub const APP_BINARY_NAME: &str = "quizstyle";

/// The directory name for application data (config, catalogs).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "QuizStyle";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "QUIZSTYLE_CONFIG_DIR";

/// Short description for help text.
pub const APP_DESCRIPTION: &str = "Brand kit and style generator for quiz-question previews";
