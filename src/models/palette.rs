//! Color slots, the brand-kit palette, and slot resolution.
//!
//! A slot names a color *role* (`Grey`, `Accent 1`, ...). The palette maps
//! those roles to concrete values. White and Black are pure constants; Grey and
//! the three accents are minted together by [`Palette::generate`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::RgbColor;
use crate::error::StyleError;
use crate::random::RandomSource;

/// Saturation shared by the three triadic accents.
pub const ACCENT_SATURATION: f64 = 0.7;
/// Lightness shared by the three triadic accents.
pub const ACCENT_LIGHTNESS: f64 = 0.5;

/// A named color role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSlot {
    /// Pure white
    White,
    /// Pure black
    Black,
    /// Generated near-neutral grey
    Grey,
    /// First triadic accent (base hue)
    #[serde(rename = "Accent 1")]
    Accent1,
    /// Second triadic accent (base hue + 120°)
    #[serde(rename = "Accent 2")]
    Accent2,
    /// Third triadic accent (base hue + 240°)
    #[serde(rename = "Accent 3")]
    Accent3,
}

impl ColorSlot {
    /// Every slot, in the order a picker would list them.
    pub const ALL: [Self; 6] = [
        Self::White,
        Self::Grey,
        Self::Black,
        Self::Accent1,
        Self::Accent2,
        Self::Accent3,
    ];

    /// Neutral slots used for backgrounds and option buttons.
    pub const NEUTRALS: [Self; 3] = [Self::White, Self::Grey, Self::Black];

    /// Accent slots.
    pub const ACCENTS: [Self; 3] = [Self::Accent1, Self::Accent2, Self::Accent3];

    /// Human-readable slot name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
            Self::Grey => "Grey",
            Self::Accent1 => "Accent 1",
            Self::Accent2 => "Accent 2",
            Self::Accent3 => "Accent 3",
        }
    }

    /// Looks up a slot by name, ignoring case, spaces, dashes and underscores.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "white" => Some(Self::White),
            "black" => Some(Self::Black),
            "grey" | "gray" => Some(Self::Grey),
            "accent1" => Some(Self::Accent1),
            "accent2" => Some(Self::Accent2),
            "accent3" => Some(Self::Accent3),
            _ => None,
        }
    }
}

impl fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A configured color: either a palette slot or a literal value.
///
/// Literals are the permissive passthrough for callers that inject a color
/// directly instead of naming a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorRef {
    /// A palette slot, resolved against the current palette
    Slot(ColorSlot),
    /// A concrete color, passed through unchanged
    Literal(RgbColor),
}

impl ColorRef {
    /// Resolves this reference against a palette.
    #[must_use]
    pub fn resolve(&self, palette: &Palette) -> RgbColor {
        match self {
            Self::Slot(slot) => palette.resolve(*slot),
            Self::Literal(color) => *color,
        }
    }
}

impl From<ColorSlot> for ColorRef {
    fn from(slot: ColorSlot) -> Self {
        Self::Slot(slot)
    }
}

impl From<RgbColor> for ColorRef {
    fn from(color: RgbColor) -> Self {
        Self::Literal(color)
    }
}

impl FromStr for ColorRef {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(slot) = ColorSlot::from_name(s) {
            return Ok(Self::Slot(slot));
        }
        RgbColor::from_hex(s)
            .map(Self::Literal)
            .map_err(|_| StyleError::InvalidColorRef(s.to_string()))
    }
}

impl fmt::Display for ColorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slot(slot) => slot.fmt(f),
            Self::Literal(color) => color.fmt(f),
        }
    }
}

/// Light neutral behind the Grey slot unless configuration overrides it.
pub const NEUTRAL_GREY: RgbColor = RgbColor::new(0xF3, 0xF4, 0xF6);

/// The brand-kit palette.
///
/// White and Black are not stored: they are always pure. The Grey slot
/// resolves to a fixed light neutral; the grey minted with a brand kit is kept
/// alongside it as palette data and never feeds the slot. The remaining
/// entries are private so they can only be replaced as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    grey: RgbColor,
    generated_grey: RgbColor,
    accent1: RgbColor,
    accent2: RgbColor,
    accent3: RgbColor,
}

impl Palette {
    /// Builds a palette from explicit neutral and accent values.
    #[must_use]
    pub const fn new(grey: RgbColor, accents: [RgbColor; 3]) -> Self {
        Self {
            grey,
            generated_grey: grey,
            accent1: accents[0],
            accent2: accents[1],
            accent3: accents[2],
        }
    }

    /// Builds the triadic palette for a base hue and a generated grey tone.
    ///
    /// Accents sit at `base_hue`, `base_hue + 120` and `base_hue + 240`. The
    /// Grey slot keeps [`NEUTRAL_GREY`].
    #[must_use]
    pub fn triadic(base_hue: f64, generated_grey: RgbColor) -> Self {
        let accent = |offset: f64| {
            RgbColor::from_hsl(base_hue + offset, ACCENT_SATURATION, ACCENT_LIGHTNESS)
        };
        Self {
            generated_grey,
            ..Self::new(NEUTRAL_GREY, [accent(0.0), accent(120.0), accent(240.0)])
        }
    }

    /// Mints a fresh brand-kit palette.
    ///
    /// Draws a base hue for the triadic accents, then an independent
    /// low-saturation grey tone with lightness in 0.3-0.7.
    pub fn generate<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let base_hue = rng.range(0.0, 360.0);

        let hue = rng.range(0.0, 20.0);
        let saturation = rng.range(0.05, 0.10);
        let lightness = rng.range(0.3, 0.7);
        let generated_grey = RgbColor::from_hsl(hue, saturation, lightness);

        tracing::debug!(base_hue, generated_grey = %generated_grey, "generated brand kit palette");
        Self::triadic(base_hue, generated_grey)
    }

    /// Returns this palette with a different Grey slot neutral.
    #[must_use]
    pub const fn with_grey(self, grey: RgbColor) -> Self {
        Self { grey, ..self }
    }

    /// Resolves a slot to its concrete color.
    #[must_use]
    pub const fn resolve(&self, slot: ColorSlot) -> RgbColor {
        match slot {
            ColorSlot::White => RgbColor::WHITE,
            ColorSlot::Black => RgbColor::BLACK,
            ColorSlot::Grey => self.grey,
            ColorSlot::Accent1 => self.accent1,
            ColorSlot::Accent2 => self.accent2,
            ColorSlot::Accent3 => self.accent3,
        }
    }

    /// The neutral the Grey slot resolves to.
    #[must_use]
    pub const fn grey(&self) -> RgbColor {
        self.grey
    }

    /// The grey tone minted with the brand kit.
    #[must_use]
    pub const fn generated_grey(&self) -> RgbColor {
        self.generated_grey
    }

    /// The three accents in slot order.
    #[must_use]
    pub const fn accents(&self) -> [RgbColor; 3] {
        [self.accent1, self.accent2, self.accent3]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(
            NEUTRAL_GREY,
            [
                RgbColor::new(0x3B, 0x82, 0xF6),
                RgbColor::new(0x10, 0xB9, 0x81),
                RgbColor::new(0x8B, 0x5C, 0xF6),
            ],
        )
    }
}
