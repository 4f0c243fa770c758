//! Interactive base-gray picker.
//!
//! [`ThemePicker::change_gray`] is the standalone "pick, fetch, overwrite"
//! operation. [`ThemePicker::resolve_gray`] stops before the write and hands
//! the fetched content back, so callers that persist more state fetch once.

use std::path::Path;

use tracing::{debug, info};

use crate::config::write_atomic;
use crate::error::GrayError;
use crate::tui::settings::PICKER_PAGE_SIZE;

use super::names::available_gray_names;
use super::source::theme_url;
use super::GrayIo;

/// Picker title shown above the gray list.
pub const GRAY_PICKER_TITLE: &str = "Pick your desired base gray:";

/// A chosen theme name together with its fetched stylesheet bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGray {
    pub name: String,
    pub content: Vec<u8>,
}

/// Picks a base gray and fetches its stylesheet from one repository.
#[derive(Clone, Copy)]
pub struct ThemePicker<'a> {
    io: GrayIo<'a>,
    themes_url: &'a str,
}

impl<'a> ThemePicker<'a> {
    pub fn new(io: GrayIo<'a>, themes_url: &'a str) -> Self {
        Self { io, themes_url }
    }

    /// Pick a gray, fetch it, and overwrite `css_location` with the body.
    ///
    /// Returns `None` without touching the file when the user cancels. On a
    /// fetch failure the file is left as it was.
    pub async fn change_gray(&self, css_location: &Path) -> Result<Option<String>, GrayError> {
        let Some(resolved) = self.resolve_gray().await? else {
            return Ok(None);
        };
        write_atomic(css_location, &resolved.content).map_err(GrayError::Write)?;
        info!(
            theme = %resolved.name,
            path = %css_location.display(),
            bytes = resolved.content.len(),
            "wrote stylesheet"
        );
        Ok(Some(resolved.name))
    }

    /// Pick a gray and fetch its stylesheet without writing anything.
    pub async fn resolve_gray(&self) -> Result<Option<ResolvedGray>, GrayError> {
        let Some(name) = self.pick_gray()? else {
            debug!("gray picker cancelled");
            return Ok(None);
        };
        let content = self.fetch(&name).await?;
        Ok(Some(ResolvedGray { name, content }))
    }

    /// Ask the user for one of the base grays.
    pub fn pick_gray(&self) -> Result<Option<String>, GrayError> {
        let names = available_gray_names();
        let selected = self
            .io
            .prompter
            .select(GRAY_PICKER_TITLE, &names, PICKER_PAGE_SIZE)
            .map_err(GrayError::Prompt)?;
        Ok(selected.and_then(|index| names.get(index).cloned()))
    }

    /// Fetch the stylesheet for `name` with a spinner while the request runs.
    pub async fn fetch(&self, name: &str) -> Result<Vec<u8>, GrayError> {
        let url = theme_url(self.themes_url, name);
        debug!(%url, "fetching stylesheet");
        let mut progress = self
            .io
            .renderer
            .progress(&format!("Fetching {name} stylesheet..."));
        let result = self.io.source.fetch_stylesheet(&url).await;
        progress.finish();
        Ok(result?)
    }
}
