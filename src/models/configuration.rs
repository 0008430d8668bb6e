//! The widget configuration: the only state that survives between renders.
//!
//! Everything a renderer paints is derived from a [`Configuration`] by
//! [`crate::engine::resolve_style`]. Randomization strategies produce whole
//! replacement values that are applied here in a single assignment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ColorRef, ColorSlot, FontPair, FontRole, FontSpec, FontSubset, Palette};
use crate::engine::strategies::{BrandKit, StyleShuffle};
use crate::error::StyleError;

/// Question text shown before the user edits it.
pub const DEFAULT_QUESTION_TEXT: &str = "Question";

/// Preview layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Wide preview with a two-column option grid
    #[default]
    Fullscreen,
    /// Narrow preview with a single option column and smaller type
    Half,
}

impl LayoutMode {
    /// Lowercase name used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fullscreen => "fullscreen",
            Self::Half => "half",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fullscreen" | "full" => Ok(Self::Fullscreen),
            "half" | "halfscreen" => Ok(Self::Half),
            _ => Err(StyleError::InvalidLayout(s.to_string())),
        }
    }
}

/// Mutable widget state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Current brand-kit palette
    pub palette: Palette,
    /// Fonts currently offered for selection
    pub fonts: FontSubset,
    /// Selected title/body fonts
    pub font_pair: FontPair,
    /// Page background color
    pub background: ColorRef,
    /// Option button color
    pub options: ColorRef,
    /// Check-answer button color
    pub check_answer: ColorRef,
    /// Question title text
    pub question_text: String,
    /// Preview layout
    pub layout: LayoutMode,
}

impl Configuration {
    /// Creates a configuration with the default slots and the first font of each role.
    pub fn new(palette: Palette, fonts: FontSubset) -> Result<Self, StyleError> {
        let title = fonts
            .display
            .first()
            .cloned()
            .ok_or(StyleError::EmptyFontRole(FontRole::Display))?;
        let body = fonts
            .body
            .first()
            .cloned()
            .ok_or(StyleError::EmptyFontRole(FontRole::Body))?;

        Ok(Self {
            palette,
            fonts,
            font_pair: FontPair { title, body },
            background: ColorSlot::Grey.into(),
            options: ColorSlot::Grey.into(),
            check_answer: ColorSlot::Black.into(),
            question_text: DEFAULT_QUESTION_TEXT.to_string(),
            layout: LayoutMode::default(),
        })
    }

    /// Replaces palette, fonts and color slots with a generated brand kit.
    ///
    /// The Grey slot neutral is configuration and survives the swap.
    pub fn apply_brand_kit(&mut self, kit: BrandKit) {
        let BrandKit {
            palette,
            fonts,
            font_pair,
            background,
            options,
            check_answer,
        } = kit;

        *self = Self {
            palette: palette.with_grey(self.palette.grey()),
            fonts,
            font_pair,
            background: background.into(),
            options: options.into(),
            check_answer: check_answer.into(),
            question_text: std::mem::take(&mut self.question_text),
            layout: self.layout,
        };
    }

    /// Replaces the three color slots with a shuffle result.
    pub fn apply_shuffle(&mut self, shuffle: StyleShuffle) {
        let StyleShuffle {
            background,
            options,
            check_answer,
        } = shuffle;

        (self.background, self.options, self.check_answer) =
            (background.into(), options.into(), check_answer.into());
    }

    /// Selects the title font by family from the offered display fonts.
    pub fn select_title_font(&mut self, family: &str) -> Result<(), StyleError> {
        self.font_pair.title = self.find_font(FontRole::Display, family)?;
        Ok(())
    }

    /// Selects the body font by family from the offered body fonts.
    pub fn select_body_font(&mut self, family: &str) -> Result<(), StyleError> {
        self.font_pair.body = self.find_font(FontRole::Body, family)?;
        Ok(())
    }

    fn find_font(&self, role: FontRole, family: &str) -> Result<FontSpec, StyleError> {
        self.fonts
            .find(role, family)
            .cloned()
            .ok_or_else(|| StyleError::FontNotInSubset {
                role,
                family: family.to_string(),
            })
    }

    /// Sets the page background.
    pub fn set_background(&mut self, color: impl Into<ColorRef>) {
        self.background = color.into();
    }

    /// Sets the option button color.
    pub fn set_options(&mut self, color: impl Into<ColorRef>) {
        self.options = color.into();
    }

    /// Sets the check-answer button color.
    pub fn set_check_answer(&mut self, color: impl Into<ColorRef>) {
        self.check_answer = color.into();
    }

    /// Sets the preview layout.
    pub fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
    }

    /// Sets the question title text.
    pub fn set_question_text(&mut self, text: impl Into<String>) {
        self.question_text = text.into();
    }
}
