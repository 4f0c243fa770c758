//! Tool-config loading pipeline.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

use super::paths::config_root_dir;
use super::sources::read_tool_config_text;
use super::{LoadedToolConfig, ToolConfig};

/// Load the per-user tool config.
///
/// `path_override` is an explicit config file path (from `--config`); it must
/// exist. Without it, a missing global file yields built-in defaults.
pub fn load_tool_config(path_override: Option<&Path>) -> Result<LoadedToolConfig, ConfigError> {
    load_tool_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        config_root_dir,
    )
}

pub(super) fn load_tool_config_from_sources<FRead, FRoot>(
    path_override: Option<&Path>,
    read_file: FRead,
    config_root: FRoot,
) -> Result<LoadedToolConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_tool_config_text(path_override, &read_file, &config_root)?;
    let config: ToolConfig = match text {
        Some(text) if !text.trim().is_empty() => serde_json::from_str(&text)?,
        _ => ToolConfig::default(),
    };
    debug!(source = ?source, "loaded tool config");
    Ok(LoadedToolConfig {
        config,
        path: source.path().map(Path::to_path_buf),
    })
}
