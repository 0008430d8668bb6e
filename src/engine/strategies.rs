//! Randomization strategies over a [`Configuration`].
//!
//! Both strategies return a complete value that the caller applies in one step
//! ([`Configuration::apply_brand_kit`], [`Configuration::apply_shuffle`]), so a
//! renderer never sees a new palette with a stale font pair.

use serde::Serialize;
use tracing::debug;

use super::fonts::{pair_fonts, sample_subset};
use crate::error::StyleError;
use crate::models::{ColorSlot, Configuration, FontCatalog, FontPair, FontSubset, Palette};
use crate::random::RandomSource;

/// Probability that the check-answer button takes a neutral color.
pub const CHECK_ANSWER_NEUTRAL_CHANCE: f64 = 0.7;

/// Background choices after a light background.
pub const DARK_BACKGROUNDS: [ColorSlot; 1] = [ColorSlot::Black];
/// Background choices after a dark background.
pub const LIGHT_BACKGROUNDS: [ColorSlot; 2] = [ColorSlot::White, ColorSlot::Grey];

/// A freshly generated palette, font selection and slot assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandKit {
    /// New palette
    pub palette: Palette,
    /// New font subsets
    pub fonts: FontSubset,
    /// New font pair drawn from `fonts`
    pub font_pair: FontPair,
    /// Page background slot
    pub background: ColorSlot,
    /// Option button slot
    pub options: ColorSlot,
    /// Check-answer button slot
    pub check_answer: ColorSlot,
}

/// New color slots produced by [`randomize_style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleShuffle {
    /// Page background slot
    pub background: ColorSlot,
    /// Option button slot
    pub options: ColorSlot,
    /// Check-answer button slot
    pub check_answer: ColorSlot,
}

fn pick_slot<R: RandomSource + ?Sized>(rng: &mut R, slots: &[ColorSlot]) -> ColorSlot {
    slots[rng.index(slots.len())]
}

fn draw_check_answer<R: RandomSource + ?Sized>(rng: &mut R) -> ColorSlot {
    if rng.chance(CHECK_ANSWER_NEUTRAL_CHANCE) {
        pick_slot(rng, &ColorSlot::NEUTRALS)
    } else {
        pick_slot(rng, &ColorSlot::ACCENTS)
    }
}

/// Generates a new brand kit: palette, font subsets, font pair and slots.
///
/// Background and options are uniform over the neutrals; the check-answer
/// button is neutral 70% of the time and an accent otherwise.
pub fn new_brand_kit<R: RandomSource + ?Sized>(
    catalog: &FontCatalog,
    rng: &mut R,
) -> Result<BrandKit, StyleError> {
    let palette = Palette::generate(rng);
    let fonts = sample_subset(catalog, rng);
    let font_pair = pair_fonts(&fonts, rng)?;

    let background = pick_slot(rng, &ColorSlot::NEUTRALS);
    let options = pick_slot(rng, &ColorSlot::NEUTRALS);
    let check_answer = draw_check_answer(rng);

    debug!(
        %background,
        %options,
        %check_answer,
        title = %font_pair.title.name,
        body = %font_pair.body.name,
        "new brand kit"
    );

    Ok(BrandKit {
        palette,
        fonts,
        font_pair,
        background,
        options,
        check_answer,
    })
}

/// Reassigns the color slots, flipping the background between light and dark.
///
/// A light background (luminance above 0.5) is followed by Black; a dark one
/// by White or Grey. Options and check-answer are drawn as in
/// [`new_brand_kit`] with no constraint on their previous values.
pub fn randomize_style<R: RandomSource + ?Sized>(
    config: &Configuration,
    rng: &mut R,
) -> StyleShuffle {
    let current = config.background.resolve(&config.palette);
    let candidates: &[ColorSlot] = if current.is_light() {
        &DARK_BACKGROUNDS
    } else {
        &LIGHT_BACKGROUNDS
    };

    let background = pick_slot(rng, candidates);
    let options = pick_slot(rng, &ColorSlot::NEUTRALS);
    let check_answer = draw_check_answer(rng);

    debug!(from = %config.background, %background, %options, %check_answer, "randomized style");

    StyleShuffle {
        background,
        options,
        check_answer,
    }
}
