//! Font catalog data structures.
//!
//! The built-in catalog is a curated list of display (title) and body fonts,
//! embedded as JSON. A catalog file with the same shape can replace it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Number of fonts per role kept in a sampled subset.
pub const SUBSET_SIZE: usize = 3;

/// A single font definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontSpec {
    /// Display label (e.g., "Playfair Display").
    pub name: String,
    /// CSS font-family value (e.g., "Playfair Display, serif").
    pub family: String,
    /// Font weight (e.g., 400, 600).
    pub weight: u16,
    /// CSS font size (e.g., "2.25rem").
    pub size: String,
}

impl FontSpec {
    /// Returns a copy with a different size.
    #[must_use]
    pub fn with_size(&self, size: &str) -> Self {
        Self {
            size: size.to_string(),
            ..self.clone()
        }
    }
}

/// Which list a font belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    /// Title fonts
    Display,
    /// Button and option text fonts
    Body,
}

impl fmt::Display for FontRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Display => f.write_str("display"),
            Self::Body => f.write_str("body"),
        }
    }
}

/// The full set of fonts available to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontCatalog {
    /// Fonts usable for the question title.
    pub display: Vec<FontSpec>,
    /// Fonts usable for buttons.
    pub body: Vec<FontSpec>,
}

impl FontCatalog {
    /// Loads the catalog embedded in the binary.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed or a role is empty.
    pub fn builtin() -> Result<Self> {
        let json_data = include_str!("../data/font_catalog.json");
        let catalog: Self =
            serde_json::from_str(json_data).context("Failed to parse built-in font catalog")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads a catalog from a JSON file and validates it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read font catalog: {}", path.display()))?;
        let catalog: Self = serde_json::from_str(&content)
            .context(format!("Failed to parse font catalog: {}", path.display()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks that both roles have at least one font.
    pub fn validate(&self) -> Result<()> {
        if self.display.is_empty() {
            anyhow::bail!("Font catalog has no display fonts");
        }
        if self.body.is_empty() {
            anyhow::bail!("Font catalog has no body fonts");
        }
        Ok(())
    }

    /// Fonts for one role.
    #[must_use]
    pub fn role(&self, role: FontRole) -> &[FontSpec] {
        match role {
            FontRole::Display => &self.display,
            FontRole::Body => &self.body,
        }
    }
}

/// The fonts currently offered for selection, drawn from a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSubset {
    /// Offered title fonts.
    pub display: Vec<FontSpec>,
    /// Offered body fonts.
    pub body: Vec<FontSpec>,
}

impl FontSubset {
    /// Offers the whole catalog.
    #[must_use]
    pub fn full(catalog: &FontCatalog) -> Self {
        Self {
            display: catalog.display.clone(),
            body: catalog.body.clone(),
        }
    }

    /// Fonts for one role.
    #[must_use]
    pub fn role(&self, role: FontRole) -> &[FontSpec] {
        match role {
            FontRole::Display => &self.display,
            FontRole::Body => &self.body,
        }
    }

    /// Finds a font in a role by its family.
    #[must_use]
    pub fn find(&self, role: FontRole, family: &str) -> Option<&FontSpec> {
        self.role(role).iter().find(|font| font.family == family)
    }
}

/// Title and body fonts used together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPair {
    /// Font for the question title.
    pub title: FontSpec,
    /// Font for option and check-answer buttons.
    pub body: FontSpec,
}

impl FontPair {
    /// True when both fonts share a family.
    #[must_use]
    pub fn is_same_family(&self) -> bool {
        self.title.family == self.body.family
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog() {
        let catalog = FontCatalog::builtin().expect("Failed to load catalog");
        assert_eq!(catalog.display.len(), 7);
        assert_eq!(catalog.body.len(), 7);
        catalog.validate().unwrap();

        let playfair = &catalog.display[0];
        assert_eq!(playfair.name, "Playfair Display");
        assert_eq!(playfair.family, "Playfair Display, serif");
        assert_eq!(playfair.weight, 600);
        assert_eq!(playfair.size, "2.5rem");
    }

    #[test]
    fn test_builtin_families_are_unique_per_role() {
        let catalog = FontCatalog::builtin().unwrap();
        for role in [FontRole::Display, FontRole::Body] {
            let fonts = catalog.role(role);
            for (i, a) in fonts.iter().enumerate() {
                for b in &fonts[i + 1..] {
                    assert_ne!(a.family, b.family, "duplicate family in {role}");
                }
            }
        }
    }

    #[test]
    fn test_load_custom_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fonts.json");
        fs::write(
            &path,
            r#"{
                "display": [{ "name": "Serif", "family": "Georgia, serif", "weight": 700, "size": "2rem" }],
                "body": [{ "name": "Sans", "family": "Arial, sans-serif", "weight": 400, "size": "1rem" }]
            }"#,
        )
        .unwrap();

        let catalog = FontCatalog::load(&path).unwrap();
        assert_eq!(catalog.display[0].family, "Georgia, serif");
        assert_eq!(catalog.body[0].weight, 400);
    }

    #[test]
    fn test_load_rejects_empty_role() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fonts.json");
        fs::write(&path, r#"{ "display": [], "body": [] }"#).unwrap();

        let err = FontCatalog::load(&path).unwrap_err();
        assert!(err.to_string().contains("no display fonts"));
    }

    #[test]
    fn test_subset_find_by_family() {
        let subset = FontSubset::full(&FontCatalog::builtin().unwrap());
        let lora = subset.find(FontRole::Body, "Lora, serif").unwrap();
        assert_eq!(lora.name, "Lora");
        assert!(subset.find(FontRole::Display, "Comic Sans").is_none());
    }

    #[test]
    fn test_with_size_keeps_family() {
        let font = FontCatalog::builtin().unwrap().display[1].clone();
        let smaller = font.with_size("1.5rem");
        assert_eq!(smaller.family, font.family);
        assert_eq!(smaller.size, "1.5rem");
    }
}
