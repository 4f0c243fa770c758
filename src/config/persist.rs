//! Project-config load/persist and atomic file replacement.
//!
//! Every write goes to a sibling temp file first and is renamed over the
//! target, so readers see either the old or the new contents. A symlinked
//! target is written through: the file the link points at is replaced and the
//! link stays.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ConfigError;

use super::ProjectConfig;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);
const MAX_SYMLINK_HOPS: usize = 40;

/// Parse `justd.json`. Malformed JSON is an error.
pub fn load_project_config(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Render `justd.json` as 2-space-indented JSON with a trailing newline.
pub fn render_project_config(config: &ProjectConfig) -> Result<String, ConfigError> {
    let mut text = serde_json::to_string_pretty(config)?;
    text.push('\n');
    Ok(text)
}

/// Replace `justd.json` with `config`.
pub fn persist_project_config(path: &Path, config: &ProjectConfig) -> Result<(), ConfigError> {
    let text = render_project_config(config)?;
    write_atomic(path, text.as_bytes())?;
    Ok(())
}

/// Replace `path` with `contents` via temp-file-then-rename.
///
/// Parent directories are created as needed. An existing target keeps its
/// permissions. On failure the target is left untouched and the temp file is
/// removed.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let target = resolve_write_target(path)?;
    let parent = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let temp = temp_sibling_path(&parent, &target);
    // create_new so two writers never share a temp file.
    let mut file = OpenOptions::new().write(true).create_new(true).open(&temp)?;
    let written = file
        .write_all(contents)
        .and_then(|_| copy_existing_permissions(&target, &file))
        .and_then(|_| file.sync_all());
    drop(file);
    if let Err(e) = written {
        let _ = fs::remove_file(&temp);
        return Err(e);
    }

    if let Err(e) = fs::rename(&temp, &target) {
        let _ = fs::remove_file(&temp);
        return Err(e);
    }
    Ok(())
}

/// Follow symlinks so the rename lands on the real file.
///
/// A dangling link resolves to the path it names, which is then created.
fn resolve_write_target(path: &Path) -> io::Result<PathBuf> {
    let mut current = path.to_path_buf();
    for _ in 0..MAX_SYMLINK_HOPS {
        match fs::symlink_metadata(&current) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let link = fs::read_link(&current)?;
                current = match current.parent() {
                    Some(dir) if link.is_relative() => dir.join(link),
                    _ => link,
                };
            }
            Ok(_) => return Ok(current),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(current),
            Err(e) => return Err(e),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::Other,
        format!("too many levels of symbolic links: {}", path.display()),
    ))
}

fn copy_existing_permissions(target: &Path, temp: &fs::File) -> io::Result<()> {
    match fs::metadata(target) {
        Ok(meta) => temp.set_permissions(meta.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

fn temp_sibling_path(parent: &Path, target: &Path) -> PathBuf {
    let file_name = target
        .file_name()
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_else(|| "justd".to_string());
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    parent.join(format!(".{file_name}.{}.{suffix}.tmp", std::process::id()))
}
