//! RGB color handling with hex parsing, contrast math, HSL/HSV conversion and
//! lightness adjustment.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL/HSV conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lab lightness moved per unit of `darken`/`brighten` amount.
const LAB_STEP: f64 = 18.0;

// D65 reference white
const XN: f64 = 0.950_470;
const YN: f64 = 1.0;
const ZN: f64 = 1.088_830;

const T0: f64 = 4.0 / 29.0;
const T1: f64 = 6.0 / 29.0;
const T2: f64 = 3.0 * T1 * T1;
const T3: f64 = T1 * T1 * T1;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Serializes as a `#RRGGBB` string so colors read naturally in TOML and JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Pure white (#FFFFFF).
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure black (#000000).
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use quizstyle::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#F3F4F6").unwrap();
    /// assert_eq!(color, RgbColor::new(243, 244, 246));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Relative luminance in `[0, 1]` using the sRGB transfer curve.
    ///
    /// # Examples
    ///
    /// ```
    /// use quizstyle::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::WHITE.luminance(), 1.0);
    /// assert_eq!(RgbColor::BLACK.luminance(), 0.0);
    /// ```
    #[must_use]
    pub fn luminance(&self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// Returns true when luminance is above the 0.5 light/dark threshold.
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.luminance() > 0.5
    }

    /// Contrast ratio between two colors, from 1 (identical) to 21 (black on white).
    #[must_use]
    pub fn contrast(&self, other: &Self) -> f64 {
        let a = self.luminance();
        let b = other.luminance();
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        (hi + 0.05) / (lo + 0.05)
    }

    /// Creates an `RgbColor` from HSL (Hue, Saturation, Lightness).
    ///
    /// # Arguments
    ///
    /// * `h` - Hue in degrees, wrapped modulo 360
    /// * `s` - Saturation (0.0-1.0, will be clamped)
    /// * `l` - Lightness (0.0-1.0, will be clamped)
    ///
    /// # Examples
    ///
    /// ```
    /// use quizstyle::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hsl(0.0, 1.0, 0.5), RgbColor::new(255, 0, 0));
    /// assert_eq!(RgbColor::from_hsl(480.0, 1.0, 0.5), RgbColor::new(0, 255, 0));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(360.0);
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        Self::from_chroma(h, c, l - c / 2.0)
    }

    /// Converts the color to HSL.
    ///
    /// Returns `(h, s, l)` with hue in `[0, 360)` (0.0 for grayscale) and
    /// saturation/lightness in `[0, 1]`.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return (0.0, 0.0, l);
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == r {
            60.0 * (((g - b) / delta).rem_euclid(6.0))
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        (h.rem_euclid(360.0), s, l)
    }

    /// Creates an `RgbColor` from HSV (Hue, Saturation, Value).
    ///
    /// Hue wraps modulo 360; saturation and value clamp to `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quizstyle::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hsv(120.0, 1.0, 1.0), RgbColor::new(0, 255, 0));
    /// assert_eq!(RgbColor::from_hsv(0.0, 0.0, 1.0), RgbColor::WHITE);
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let h = h.rem_euclid(360.0);
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let c = v * s;
        Self::from_chroma(h, c, v - c)
    }

    /// Converts the color to HSV.
    ///
    /// Returns `(h, s, v)` with hue in `[0, 360)` (0.0 for grayscale) and
    /// saturation/value in `[0, 1]`.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn to_hsv(&self) -> (f64, f64, f64) {
        let (h, _, _) = self.to_hsl();
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let v = r.max(g).max(b);
        let s = if v == 0.0 { 0.0 } else { (v - r.min(g).min(b)) / v };

        (h, s, v)
    }

    // Maps hue, chroma and the lightness offset `m` back to channels.
    #[allow(clippy::many_single_char_names)]
    fn from_chroma(h: f64, c: f64, m: f64) -> Self {
        let h_prime = h / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());

        let (r, g, b) = if h_prime < 1.0 {
            (c, x, 0.0)
        } else if h_prime < 2.0 {
            (x, c, 0.0)
        } else if h_prime < 3.0 {
            (0.0, c, x)
        } else if h_prime < 4.0 {
            (0.0, x, c)
        } else if h_prime < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self {
            r: unit_to_channel(r + m),
            g: unit_to_channel(g + m),
            b: unit_to_channel(b + m),
        }
    }

    /// Returns a darker color by lowering Lab lightness by `18 * amount`.
    ///
    /// Channels clamp at the valid range, so repeated darkening settles on black.
    #[must_use]
    pub fn darken(&self, amount: f64) -> Self {
        let (l, a, b) = self.to_lab();
        Self::from_lab(l - LAB_STEP * amount, a, b)
    }

    /// Returns a lighter color; the inverse direction of [`RgbColor::darken`].
    #[must_use]
    pub fn brighten(&self, amount: f64) -> Self {
        self.darken(-amount)
    }

    fn to_lab(&self) -> (f64, f64, f64) {
        let r = srgb_to_linear(self.r);
        let g = srgb_to_linear(self.g);
        let b = srgb_to_linear(self.b);

        let x = xyz_to_lab((0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b) / XN);
        let y = xyz_to_lab((0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b) / YN);
        let z = xyz_to_lab((0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b) / ZN);

        let l = (116.0 * y - 16.0).max(0.0);
        (l, 500.0 * (x - y), 200.0 * (y - z))
    }

    fn from_lab(l: f64, a: f64, b: f64) -> Self {
        let fy = (l + 16.0) / 116.0;
        let fx = fy + a / 500.0;
        let fz = fy - b / 200.0;

        let x = XN * lab_to_xyz(fx);
        let y = YN * lab_to_xyz(fy);
        let z = ZN * lab_to_xyz(fz);

        Self {
            r: linear_to_srgb(3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z),
            g: linear_to_srgb(-0.969_266_0 * x + 1.876_010_8 * y + 0.041_556_0 * z),
            b: linear_to_srgb(0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z),
        }
    }
}

fn unit_to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(value: f64) -> u8 {
    let c = if value <= 0.003_04 {
        12.92 * value
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    };
    unit_to_channel(c)
}

fn xyz_to_lab(t: f64) -> f64 {
    if t > T3 {
        t.cbrt()
    } else {
        t / T2 + T0
    }
}

fn lab_to_xyz(t: f64) -> f64 {
    if t > T1 {
        t * t * t
    } else {
        T2 * (t - T0)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::WHITE
    }
}
