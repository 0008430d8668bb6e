//! Data models for colors, palettes, fonts, and the widget configuration.
//!
//! This module contains the core data structures used throughout the application.
//! Models are designed to be independent of rendering and CLI concerns.

pub mod configuration;
pub mod font;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use configuration::{Configuration, LayoutMode};
pub use font::{FontCatalog, FontPair, FontRole, FontSpec, FontSubset};
pub use palette::{ColorRef, ColorSlot, Palette, NEUTRAL_GREY};
pub use rgb::RgbColor;
