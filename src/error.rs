//! Error type for the style engine.
//!
//! Engine inputs come from closed sets, so the only failures are violated
//! preconditions (an empty font role) and unparseable user input at the edge.

use thiserror::Error;

use crate::models::FontRole;

/// Errors raised by the style engine and configuration selectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A font role has nothing to pick from.
    #[error("no {0} fonts to choose from")]
    EmptyFontRole(FontRole),

    /// A selected font family is not in the offered subset.
    #[error("font family '{family}' is not offered in the current {role} fonts")]
    FontNotInSubset {
        /// Role the font was requested for
        role: FontRole,
        /// Requested family
        family: String,
    },

    /// A color string is neither a slot name nor a hex color.
    #[error("'{0}' is neither a color slot nor a #RRGGBB color")]
    InvalidColorRef(String),

    /// A layout name is not recognized.
    #[error("unknown layout '{0}', expected 'fullscreen' or 'half'")]
    InvalidLayout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        assert_eq!(
            StyleError::EmptyFontRole(FontRole::Body).to_string(),
            "no body fonts to choose from"
        );

        let err = StyleError::FontNotInSubset {
            role: FontRole::Display,
            family: "Lora, serif".to_string(),
        };
        assert!(err.to_string().contains("'Lora, serif'"));
        assert!(err.to_string().contains("display"));
    }
}
