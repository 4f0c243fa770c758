//! Configuration for the gray switcher.
//!
//! Two JSON files feed one run:
//! - the project config `justd.json` (read and rewritten),
//! - the per-user tool config `$XDG_CONFIG_HOME/justd/config.json`
//!   (or `--config <path>`), read-only.
//!
//! Both are folded, together with `JUSTD_*` env overrides, into a single
//! [`EffectiveConfig`] by [`resolve_effective_config`].

mod defaults;
mod detect;
mod env;
mod loader;
mod paths;
mod persist;
mod resolve;
mod sources;
mod types;

pub use defaults::{
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_THEMES_URL, DEFAULT_THEME_NAME, INIT_COMMAND,
    PROJECT_CONFIG_FILE,
};
pub use detect::possibility_css_path;
pub use env::{load_runtime_overrides, FETCH_TIMEOUT_ENV, THEMES_URL_ENV};
pub use loader::load_tool_config;
pub use paths::{config_root_dir, project_config_path, resolve_css_target};
pub use persist::{
    load_project_config, persist_project_config, render_project_config, write_atomic,
};
pub use resolve::resolve_effective_config;
pub use types::{EffectiveConfig, LoadedToolConfig, ProjectConfig, RuntimeOverrides, ToolConfig};
