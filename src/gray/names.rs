//! The fixed set of base-gray palettes and theme-name normalization.

use std::fmt;
use std::str::FromStr;

/// Base-gray palettes offered by the interactive picker, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrayName {
    Zinc,
    Gray,
    Slate,
    Neutral,
    Stone,
}

impl GrayName {
    pub const ALL: [GrayName; 5] = [
        GrayName::Zinc,
        GrayName::Gray,
        GrayName::Slate,
        GrayName::Neutral,
        GrayName::Stone,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zinc => "zinc",
            Self::Gray => "gray",
            Self::Slate => "slate",
            Self::Neutral => "neutral",
            Self::Stone => "stone",
        }
    }
}

impl fmt::Display for GrayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrayName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_theme_name(s).to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|gray| gray.as_str() == normalized)
            .ok_or_else(|| format!("unknown base gray `{}`", s.trim()))
    }
}

/// Picker labels for every base gray.
pub fn available_gray_names() -> Vec<String> {
    GrayName::ALL
        .iter()
        .map(|gray| gray.as_str().to_string())
        .collect()
}

/// Strip surrounding whitespace and one trailing `.css` from a theme name.
pub fn normalize_theme_name(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_suffix(".css")
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}
