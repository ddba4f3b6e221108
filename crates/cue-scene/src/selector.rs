//! Minimal selectors for addressing stage elements.
//!
//! Two forms are supported, matching how the motion layer addresses content:
//! `#id` for a single element and `.class` for a group. A bare name is
//! treated as an id.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::element::Element;

/// A parsed selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Selector {
    /// Matches the single element with this id.
    Id(String),
    /// Matches every element carrying this class.
    Class(String),
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if let Some(class) = trimmed.strip_prefix('.') {
            Self::Class(class.to_string())
        } else if let Some(id) = trimmed.strip_prefix('#') {
            Self::Id(id.to_string())
        } else {
            Self::Id(trimmed.to_string())
        }
    }

    /// Whether this selector matches the given element.
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Id(id) => element.id == *id,
            Self::Class(class) => element.has_class(class),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
        }
    }
}

impl From<&str> for Selector {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!(Selector::parse("#hero-title"), Selector::Id("hero-title".into()));
        assert_eq!(Selector::parse(".feature-card"), Selector::Class("feature-card".into()));
        assert_eq!(Selector::parse("video-player"), Selector::Id("video-player".into()));
    }

    #[test]
    fn test_matching() {
        let el = Element::new("card-1").class("feature-card");

        assert!(Selector::parse("#card-1").matches(&el));
        assert!(Selector::parse(".feature-card").matches(&el));
        assert!(!Selector::parse("#card-2").matches(&el));
        assert!(!Selector::parse(".showcase-card").matches(&el));
    }

    #[test]
    fn test_display_round_trip() {
        for s in ["#hero-title", ".feature-card"] {
            assert_eq!(Selector::parse(s).to_string(), s);
        }
    }
}
