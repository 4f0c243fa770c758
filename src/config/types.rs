//! Config data types shared by loaders, resolvers, and persistence helpers.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const THEME_KEY: &str = "theme";
const CSS_KEY: &str = "css";

/// Per-project `justd.json` contents.
///
/// Held as the parsed JSON object so a rewrite keeps every key, including
/// ones other commands own, in the order the file had them. Only `theme` and
/// `css` are read or replaced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectConfig {
    entries: Map<String, Value>,
}

impl ProjectConfig {
    /// Active theme name, without the `.css` suffix.
    pub fn theme(&self) -> Option<&str> {
        self.string_entry(THEME_KEY)
    }

    /// Stylesheet path as the user wrote it.
    pub fn css(&self) -> Option<&str> {
        self.string_entry(CSS_KEY)
    }

    /// Replace `theme`, keeping its position when the key already exists.
    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.entries
            .insert(THEME_KEY.to_string(), Value::String(theme.into()));
    }

    /// Replace `css`, keeping its position when the key already exists.
    pub fn set_css(&mut self, css: impl Into<String>) {
        self.entries
            .insert(CSS_KEY.to_string(), Value::String(css.into()));
    }

    /// Top-level keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn string_entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }
}

/// Per-user tool config. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Fallback stylesheet path when the project config has none.
    pub css: Option<String>,
    /// Base URL of the theme repository.
    pub themes_url: Option<String>,
}

/// Tool config plus the file it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedToolConfig {
    pub config: ToolConfig,
    /// `None` when no file was found and built-in defaults apply.
    pub path: Option<PathBuf>,
}

/// Process-level overrides read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeOverrides {
    /// `JUSTD_THEMES_URL`.
    pub themes_url: Option<String>,
    /// `JUSTD_FETCH_TIMEOUT_SECS`, clamped to at least one second.
    pub fetch_timeout_secs: Option<u64>,
}

/// The single resolved view of both config files for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// Theme currently recorded for the project.
    pub current_theme: String,
    /// Stylesheet path that will be overwritten.
    pub css_path: String,
    /// Base URL stylesheet fetches are built from.
    pub themes_url: String,
}
