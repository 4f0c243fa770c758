//! Config-path helpers.

use std::path::{Path, PathBuf};

use super::defaults::{PROJECT_CONFIG_FILE, TOOL_CONFIG_DIR, TOOL_CONFIG_FILE};

/// Return `justd.json` inside `project_dir`.
pub fn project_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(PROJECT_CONFIG_FILE)
}

/// Tool config location under a config root (`<root>/justd/config.json`).
pub(super) fn tool_config_path_in(root: &Path) -> PathBuf {
    root.join(TOOL_CONFIG_DIR).join(TOOL_CONFIG_FILE)
}

/// Resolve a stylesheet path from config against the project directory.
///
/// Absolute paths are returned as-is.
pub fn resolve_css_target(project_dir: &Path, css_path: &str) -> PathBuf {
    let candidate = Path::new(css_path);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        project_dir.join(candidate)
    }
}

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
