//! CLI command handlers for QuizStyle.
//!
//! This module provides headless, scriptable access to the style engine
//! for automation and testing.

pub mod brand_kit;
pub mod common;
pub mod config;
pub mod fonts;
pub mod resolve;
pub mod shuffle;

// Re-export types used by main.rs and tests
pub use brand_kit::BrandKitArgs;
pub use common::ExitCode;
pub use config::ConfigArgs;
pub use fonts::FontsArgs;
pub use resolve::ResolveArgs;
pub use shuffle::ShuffleArgs;
