//! Font subset sampling and title/body pairing.

use tracing::debug;

use crate::error::StyleError;
use crate::models::font::SUBSET_SIZE;
use crate::models::{FontCatalog, FontPair, FontRole, FontSpec, FontSubset};
use crate::random::{pick, RandomSource};

/// Draws up to `count` fonts uniformly without replacement.
///
/// Uses a partial Fisher-Yates shuffle, so the result order is itself random.
pub fn sample_fonts<R: RandomSource + ?Sized>(
    fonts: &[FontSpec],
    count: usize,
    rng: &mut R,
) -> Vec<FontSpec> {
    let mut pool: Vec<&FontSpec> = fonts.iter().collect();
    let take = count.min(pool.len());

    for i in 0..take {
        let j = i + rng.index(pool.len() - i);
        pool.swap(i, j);
    }

    pool.into_iter().take(take).cloned().collect()
}

/// Samples a fresh subset of both roles from the catalog.
pub fn sample_subset<R: RandomSource + ?Sized>(catalog: &FontCatalog, rng: &mut R) -> FontSubset {
    FontSubset {
        display: sample_fonts(&catalog.display, SUBSET_SIZE, rng),
        body: sample_fonts(&catalog.body, SUBSET_SIZE, rng),
    }
}

/// Pairs a random title font with a random body font.
///
/// When both share a family the body font is redrawn among body fonts of a
/// different family. With no such font the same-family pair is kept.
pub fn pair_fonts<R: RandomSource + ?Sized>(
    subset: &FontSubset,
    rng: &mut R,
) -> Result<FontPair, StyleError> {
    let title = pick(rng, &subset.display).ok_or(StyleError::EmptyFontRole(FontRole::Display))?;
    let mut body = pick(rng, &subset.body).ok_or(StyleError::EmptyFontRole(FontRole::Body))?;

    if title.family == body.family {
        let others: Vec<&FontSpec> = subset
            .body
            .iter()
            .filter(|font| font.family != title.family)
            .collect();

        match pick(rng, &others) {
            Some(other) => body = *other,
            None => debug!(family = %title.family, "no alternative body font, keeping same family"),
        }
    }

    Ok(FontPair {
        title: title.clone(),
        body: body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceSource;
    use std::collections::HashSet;

    fn font(name: &str, family: &str) -> FontSpec {
        FontSpec {
            name: name.to_string(),
            family: family.to_string(),
            weight: 400,
            size: "1rem".to_string(),
        }
    }

    #[test]
    fn test_sample_without_replacement() {
        let catalog = FontCatalog::builtin().unwrap();
        let mut rng = SequenceSource::new(vec![0.9, 0.1, 0.5, 0.3]);
        let sample = sample_fonts(&catalog.display, 3, &mut rng);

        assert_eq!(sample.len(), 3);
        let families: HashSet<&str> = sample.iter().map(|f| f.family.as_str()).collect();
        assert_eq!(families.len(), 3);
        for font in &sample {
            assert!(catalog.display.contains(font));
        }
    }

    #[test]
    fn test_sample_is_capped_by_catalog_size() {
        let fonts = vec![font("A", "a"), font("B", "b")];
        let mut rng = SequenceSource::new(vec![0.5]);
        assert_eq!(sample_fonts(&fonts, 3, &mut rng).len(), 2);
        assert!(sample_fonts(&[], 3, &mut rng).is_empty());
    }

    #[test]
    fn test_sample_follows_draws() {
        let fonts = vec![font("A", "a"), font("B", "b"), font("C", "c"), font("D", "d")];
        // i=0 swaps with 0 + floor(0.99 * 4) = 3, i=1 keeps position 1
        let mut rng = SequenceSource::new(vec![0.99, 0.0]);
        let names: Vec<String> = sample_fonts(&fonts, 2, &mut rng)
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["D", "B"]);
    }

    #[test]
    fn test_sample_subset_sizes() {
        let catalog = FontCatalog::builtin().unwrap();
        let mut rng = SequenceSource::new(vec![0.2, 0.7, 0.4]);
        let subset = sample_subset(&catalog, &mut rng);
        assert_eq!(subset.display.len(), SUBSET_SIZE);
        assert_eq!(subset.body.len(), SUBSET_SIZE);
    }

    #[test]
    fn test_pair_avoids_same_family() {
        let subset = FontSubset {
            display: vec![font("Lora Display", "Lora, serif")],
            body: vec![
                font("Lora", "Lora, serif"),
                font("Inter", "Inter, sans-serif"),
                font("Roboto", "Roboto, sans-serif"),
            ],
        };
        // display 0, body 0 (same family), redraw picks the second alternative
        let mut rng = SequenceSource::new(vec![0.0, 0.0, 0.6]);
        let pair = pair_fonts(&subset, &mut rng).unwrap();

        assert_eq!(pair.title.family, "Lora, serif");
        assert_eq!(pair.body.name, "Roboto");
        assert!(!pair.is_same_family());
    }

    #[test]
    fn test_pair_keeps_distinct_draw() {
        let subset = FontSubset {
            display: vec![font("Oswald", "Oswald, sans-serif")],
            body: vec![font("Inter", "Inter, sans-serif"), font("Lora", "Lora, serif")],
        };
        let mut rng = SequenceSource::new(vec![0.0, 0.9]);
        let pair = pair_fonts(&subset, &mut rng).unwrap();
        assert_eq!(pair.body.name, "Lora");
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn test_pair_falls_back_to_same_family() {
        let subset = FontSubset {
            display: vec![font("Lora Display", "Lora, serif")],
            body: vec![font("Lora", "Lora, serif")],
        };
        let mut rng = SequenceSource::new(vec![0.3]);
        let pair = pair_fonts(&subset, &mut rng).unwrap();
        assert!(pair.is_same_family());
    }

    #[test]
    fn test_pair_rejects_empty_roles() {
        let mut rng = SequenceSource::new(vec![0.3]);
        let no_display = FontSubset {
            display: vec![],
            body: vec![font("Inter", "Inter, sans-serif")],
        };
        assert_eq!(
            pair_fonts(&no_display, &mut rng),
            Err(StyleError::EmptyFontRole(FontRole::Display))
        );

        let no_body = FontSubset {
            display: vec![font("Inter", "Inter, sans-serif")],
            body: vec![],
        };
        assert_eq!(
            pair_fonts(&no_body, &mut rng),
            Err(StyleError::EmptyFontRole(FontRole::Body))
        );
    }
}
