//! The style engine.
//!
//! - [`derive`]: pure derivation of text, hover, border and divider colors
//! - [`fonts`]: font subset sampling and pairing
//! - [`strategies`]: "new brand kit" and "randomize style"

pub mod derive;
pub mod fonts;
pub mod strategies;

pub use derive::{
    border_for, divider_color_for, hover_color_for, resolve_style, text_color_for, Border,
    ButtonStyle, Edges, LayoutMetrics, ResolvedStyle, TextAlign, TitleStyle,
};
pub use fonts::{pair_fonts, sample_fonts, sample_subset};
pub use strategies::{new_brand_kit, randomize_style, BrandKit, StyleShuffle};
