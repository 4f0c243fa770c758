//! Default configuration constants.
//!
//! Keeping defaults in one module lets callers share the same literals.

/// Project config file name, looked up in the project directory.
pub const PROJECT_CONFIG_FILE: &str = "justd.json";
/// Per-user tool config directory under the config root.
pub(super) const TOOL_CONFIG_DIR: &str = "justd";
/// Per-user tool config file name.
pub(super) const TOOL_CONFIG_FILE: &str = "config.json";
/// Theme name reported when the project config does not record one.
pub const DEFAULT_THEME_NAME: &str = "default";
/// Base URL of the remote theme repository.
pub const DEFAULT_THEMES_URL: &str =
    "https://raw.githubusercontent.com/justdlabs/themes/main/src/themes";
/// Default timeout for stylesheet fetches.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;
/// Command users run to create `justd.json`.
pub const INIT_COMMAND: &str = "justd init";
