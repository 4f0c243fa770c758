//! Precedence chain producing one [`EffectiveConfig`] per run.
//!
//! - `current_theme`: project `theme` > `"default"`
//! - `css_path`: project `css` > tool `css` > detected layout candidate
//! - `themes_url`: `JUSTD_THEMES_URL` > tool `themes_url` > built-in URL

use super::defaults::{DEFAULT_THEMES_URL, DEFAULT_THEME_NAME};
use super::{EffectiveConfig, ProjectConfig, RuntimeOverrides, ToolConfig};

/// Resolve both config files and env overrides into one value.
///
/// `detect_css` only runs when neither config declares a stylesheet path.
pub fn resolve_effective_config<FDetect>(
    project: &ProjectConfig,
    tool: &ToolConfig,
    overrides: &RuntimeOverrides,
    detect_css: FDetect,
) -> EffectiveConfig
where
    FDetect: FnOnce() -> String,
{
    let current_theme = first_non_empty([project.theme()])
        .unwrap_or(DEFAULT_THEME_NAME)
        .to_string();
    let css_path = match first_non_empty([project.css(), tool.css.as_deref()]) {
        Some(path) => path.to_string(),
        None => detect_css(),
    };
    let themes_url = first_non_empty([overrides.themes_url.as_deref(), tool.themes_url.as_deref()])
        .unwrap_or(DEFAULT_THEMES_URL)
        .to_string();

    EffectiveConfig {
        current_theme,
        css_path,
        themes_url,
    }
}

fn first_non_empty<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
}
