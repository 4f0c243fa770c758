//! Tool-config source discovery.
//!
//! Source order: explicit `--config` path > global per-user file > built-in
//! defaults. Only the explicit path must exist.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::paths::tool_config_path_in;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ToolConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from the per-user config root.
    Global(PathBuf),
    /// No file found; built-in defaults apply.
    BuiltInDefaults,
}

impl ToolConfigSource {
    pub(super) fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Global(path) => Some(path),
            Self::BuiltInDefaults => None,
        }
    }
}

/// Read tool-config text from the highest-precedence available source.
pub(super) fn read_tool_config_text<FRead, FRoot>(
    path_override: Option<&Path>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(Option<String>, ToolConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(path) = path_override {
        let text = read_file(path)?;
        return Ok((Some(text), ToolConfigSource::Explicit(path.to_path_buf())));
    }

    if let Some(root) = config_root() {
        let global = tool_config_path_in(&root);
        match read_file(&global) {
            Ok(text) => return Ok((Some(text), ToolConfigSource::Global(global))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(ConfigError::Io(e)),
        }
    }

    Ok((None, ToolConfigSource::BuiltInDefaults))
}
