//! QuizStyle Library
//!
//! This library derives accessible, visually consistent styles for a
//! quiz-question preview: palette resolution, font pairing, contrast-based
//! text colors, hover/border/divider derivation, and the "new brand kit" and
//! "randomize style" strategies.
//!
//! # Example
//!
//! ```
//! use quizstyle::engine::resolve_style;
//! use quizstyle::models::{Configuration, FontCatalog, FontSubset, Palette};
//!
//! let catalog = FontCatalog::builtin().unwrap();
//! let config = Configuration::new(Palette::default(), FontSubset::full(&catalog)).unwrap();
//! let style = resolve_style(&config);
//! assert_eq!(style.check_answer_button.border.to_string(), "none");
//! ```

// Module declarations
pub mod branding;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod random;
