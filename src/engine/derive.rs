//! Style derivation: from resolved colors to render-ready element styles.
//!
//! Every function here is pure. The light/dark split is always
//! [`RgbColor::is_light`] (luminance above 0.5).

use serde::Serialize;
use std::fmt;

use crate::models::{Configuration, FontSpec, LayoutMode, RgbColor};

/// Darkening applied to light colors on hover.
pub const HOVER_DARKEN: f64 = 0.2;
/// Brightening applied to dark colors on hover.
pub const HOVER_BRIGHTEN: f64 = 0.8;
/// Adjustment used for synthesized borders, in either direction.
pub const BORDER_STEP: f64 = 0.8;
/// Width of a synthesized border in pixels.
pub const BORDER_WIDTH: u8 = 2;
/// Adjustment used for a divider derived from the background.
pub const DIVIDER_STEP: f64 = 0.4;

/// Title size override in half layout.
pub const HALF_TITLE_SIZE: &str = "1.5rem";
/// Option button size override in half layout.
pub const HALF_OPTION_SIZE: &str = "0.875rem";

/// Border of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum Border {
    /// No border
    None,
    /// Solid border
    Solid {
        /// Width in pixels
        width: u8,
        /// Border color
        color: RgbColor,
    },
}

impl Border {
    /// Border color, if any.
    #[must_use]
    pub const fn color(&self) -> Option<RgbColor> {
        match self {
            Self::None => None,
            Self::Solid { color, .. } => Some(*color),
        }
    }

    /// True when a border is drawn.
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Solid { .. })
    }
}

impl fmt::Display for Border {
    /// CSS shorthand (`none` or `2px solid #RRGGBB`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Solid { width, color } => write!(f, "{width}px solid {color}"),
        }
    }
}

/// Horizontal alignment of the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Centered
    Center,
    /// Left-aligned
    Left,
}

/// Margin offsets in pixels, in CSS order; offsets may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edges {
    /// Top offset
    pub top: i16,
    /// Right offset
    pub right: i16,
    /// Bottom offset
    pub bottom: i16,
    /// Left offset
    pub left: i16,
}

impl Edges {
    /// Builds edges from top, right, bottom and left offsets.
    #[must_use]
    pub const fn new(top: i16, right: i16, bottom: i16, left: i16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl fmt::Display for Edges {
    /// CSS shorthand with unitless zeros (`16px 0 -20px 0`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges = [self.top, self.right, self.bottom, self.left];
        for (i, edge) in edges.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if edge == 0 {
                f.write_str("0")?;
            } else {
                write!(f, "{edge}px")?;
            }
        }
        Ok(())
    }
}

/// Spacing and grid parameters handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LayoutMetrics {
    /// Preview width in pixels
    pub preview_width: u16,
    /// Preview height in pixels
    pub preview_height: u16,
    /// Preview padding in pixels
    pub padding: u16,
    /// Number of option grid columns
    pub grid_columns: u8,
    /// Gap between option buttons in pixels
    pub grid_gap: u16,
    /// Space below the option grid in pixels
    pub grid_bottom_margin: u16,
    /// Title alignment
    pub title_align: TextAlign,
    /// Margin around the title
    pub title_margin: Edges,
    /// Option button padding on every side in pixels; `None` keeps the
    /// renderer's stylesheet padding
    pub option_padding: Option<u16>,
}

impl LayoutMetrics {
    /// Metrics for a layout mode.
    #[must_use]
    pub const fn for_layout(layout: LayoutMode) -> Self {
        match layout {
            LayoutMode::Fullscreen => Self {
                preview_width: 800,
                preview_height: 450,
                padding: 32,
                grid_columns: 2,
                grid_gap: 16,
                grid_bottom_margin: 96,
                title_align: TextAlign::Center,
                title_margin: Edges::new(32, 0, 0, 0),
                option_padding: None,
            },
            LayoutMode::Half => Self {
                preview_width: 400,
                preview_height: 450,
                padding: 32,
                grid_columns: 1,
                grid_gap: 12,
                grid_bottom_margin: 64,
                title_align: TextAlign::Left,
                title_margin: Edges::new(16, 0, -20, 0),
                option_padding: Some(16),
            },
        }
    }
}

/// Resolved question title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleStyle {
    /// Question text
    pub text: String,
    /// Title font, with any layout size override applied
    pub font: FontSpec,
    /// Text color on the page background
    pub color: RgbColor,
}

/// Resolved button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonStyle {
    /// Button font, with any layout size override applied
    pub font: FontSpec,
    /// Fill color
    pub background: RgbColor,
    /// Label color
    pub text: RgbColor,
    /// Fill color on hover
    pub hover: RgbColor,
    /// Border, synthesized when the fill matches the page background
    pub border: Border,
}

/// Everything a renderer needs to paint the preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedStyle {
    /// Layout the style was resolved for
    pub layout: LayoutMode,
    /// Page background
    pub background: RgbColor,
    /// Question title
    pub title: TitleStyle,
    /// Option buttons
    pub option_button: ButtonStyle,
    /// Check-answer button
    pub check_answer_button: ButtonStyle,
    /// Divider above the check-answer button
    pub divider: RgbColor,
    /// Spacing and grid parameters
    pub metrics: LayoutMetrics,
}

/// White or black, whichever contrasts more with the background.
///
/// Both ratios are computed; a tie goes to black.
#[must_use]
pub fn text_color_for(background: RgbColor) -> RgbColor {
    let on_white = background.contrast(&RgbColor::WHITE);
    let on_black = background.contrast(&RgbColor::BLACK);
    if on_white > on_black {
        RgbColor::WHITE
    } else {
        RgbColor::BLACK
    }
}

/// Hover fill: light colors darken slightly, dark colors brighten strongly.
#[must_use]
pub fn hover_color_for(color: RgbColor) -> RgbColor {
    if color.is_light() {
        color.darken(HOVER_DARKEN)
    } else {
        color.brighten(HOVER_BRIGHTEN)
    }
}

/// Synthesizes a border when an element would vanish into its background.
///
/// Only exact equality counts; near-equal colors get no border.
#[must_use]
pub fn border_for(element: RgbColor, background: RgbColor) -> Border {
    if element != background {
        return Border::None;
    }

    let color = if element.is_light() {
        element.darken(BORDER_STEP)
    } else {
        element.brighten(BORDER_STEP)
    };

    Border::Solid {
        width: BORDER_WIDTH,
        color,
    }
}

/// Divider color: an existing button border (options first), else a shade of the background.
#[must_use]
pub fn divider_color_for(
    options_border: &Border,
    check_answer_border: &Border,
    background: RgbColor,
) -> RgbColor {
    if let Some(color) = options_border.color().or_else(|| check_answer_border.color()) {
        return color;
    }

    if background.is_light() {
        background.darken(DIVIDER_STEP)
    } else {
        background.brighten(DIVIDER_STEP)
    }
}

fn button_style(font: FontSpec, fill: RgbColor, background: RgbColor) -> ButtonStyle {
    ButtonStyle {
        font,
        background: fill,
        text: text_color_for(fill),
        hover: hover_color_for(fill),
        border: border_for(fill, background),
    }
}

/// Resolves a configuration into a full style.
///
/// Pure: the same configuration always yields the same style.
#[must_use]
pub fn resolve_style(config: &Configuration) -> ResolvedStyle {
    let palette = &config.palette;
    let background = config.background.resolve(palette);
    let options = config.options.resolve(palette);
    let check_answer = config.check_answer.resolve(palette);

    let pair = &config.font_pair;
    let (title_font, option_font) = match config.layout {
        LayoutMode::Fullscreen => (pair.title.clone(), pair.body.clone()),
        LayoutMode::Half => (
            pair.title.with_size(HALF_TITLE_SIZE),
            pair.body.with_size(HALF_OPTION_SIZE),
        ),
    };

    let option_button = button_style(option_font, options, background);
    let check_answer_button = button_style(pair.body.clone(), check_answer, background);
    let divider = divider_color_for(
        &option_button.border,
        &check_answer_button.border,
        background,
    );

    ResolvedStyle {
        layout: config.layout,
        background,
        title: TitleStyle {
            text: config.question_text.clone(),
            font: title_font,
            color: text_color_for(background),
        },
        option_button,
        check_answer_button,
        divider,
        metrics: LayoutMetrics::for_layout(config.layout),
    }
}
