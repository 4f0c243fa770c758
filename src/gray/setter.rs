//! The `justd gray` flow.
//!
//! Steps run strictly in order and each one finishes before the next:
//! precondition, config load, CSS-path resolution, confirmation, theme
//! resolution (one fetch), CSS write, `justd.json` write.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{
    load_project_config, load_tool_config, persist_project_config, possibility_css_path,
    project_config_path, resolve_css_target, resolve_effective_config, write_atomic,
    EffectiveConfig, ProjectConfig, RuntimeOverrides,
};
use crate::error::GrayError;

use super::names::{available_gray_names, normalize_theme_name, GrayName};
use super::picker::{ResolvedGray, ThemePicker};
use super::GrayIo;

/// Question used to confirm or override the stylesheet location.
pub const CSS_PATH_PROMPT: &str = "Where is your global CSS file?";

/// Inputs of one `justd gray` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrayRequest {
    /// Skip the confirmation and the interactive CSS-path question.
    pub override_confirmation: bool,
    /// Theme to apply without showing the picker. Blank counts as absent.
    pub selected_theme: Option<String>,
}

/// How a `justd gray` run ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrayOutcome {
    /// Stylesheet and `justd.json` both updated.
    Changed {
        theme: String,
        css_path: String,
        config_path: PathBuf,
    },
    /// The user declined the override confirmation.
    Canceled,
    /// `justd.json` does not exist; nothing was read or written.
    MissingProjectConfig { path: PathBuf },
    /// Neither the argument nor the picker produced a theme.
    NoGraySelected,
}

/// Orchestrates theme changes for one project directory.
pub struct GraySetter<'a> {
    io: GrayIo<'a>,
    project_dir: PathBuf,
    tool_config_path: Option<PathBuf>,
    overrides: RuntimeOverrides,
}

impl<'a> GraySetter<'a> {
    pub fn new(io: GrayIo<'a>, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            io,
            project_dir: project_dir.into(),
            tool_config_path: None,
            overrides: RuntimeOverrides::default(),
        }
    }

    /// Read the tool config from an explicit path instead of the per-user one.
    pub fn with_tool_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.tool_config_path = path;
        self
    }

    pub fn with_overrides(mut self, overrides: RuntimeOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Run the full theme-change flow.
    ///
    /// The stylesheet is fetched once per run. When the picker runs, the
    /// content it fetched is the content that gets written.
    pub async fn set_gray(&self, request: &GrayRequest) -> Result<GrayOutcome, GrayError> {
        let config_path = project_config_path(&self.project_dir);
        if !config_path.exists() {
            info!(path = %config_path.display(), "project config not found");
            return Ok(GrayOutcome::MissingProjectConfig { path: config_path });
        }

        let mut project = load_project_config(&config_path)?;
        let effective = self.effective_config(&project)?;
        debug!(?effective, "resolved effective config");

        let css_path = if request.override_confirmation {
            effective.css_path.clone()
        } else {
            self.io
                .prompter
                .input(CSS_PATH_PROMPT, &effective.css_path)
                .map_err(GrayError::Prompt)?
        };

        let selected = request
            .selected_theme
            .as_deref()
            .map(str::trim)
            .filter(|theme| !theme.is_empty());

        if !request.override_confirmation {
            let message = self.override_message(&effective.current_theme, selected);
            let confirmed = self
                .io
                .prompter
                .confirm(&message)
                .map_err(GrayError::Prompt)?;
            if !confirmed {
                info!("theme change declined");
                return Ok(GrayOutcome::Canceled);
            }
        }

        let picker = ThemePicker::new(self.io, &effective.themes_url);
        let resolved = match selected {
            Some(theme) => {
                let Some(name) = self.selected_gray_name(theme) else {
                    return Ok(GrayOutcome::NoGraySelected);
                };
                let content = picker.fetch(&name).await?;
                ResolvedGray { name, content }
            }
            None => match picker.resolve_gray().await? {
                Some(resolved) => ResolvedGray {
                    name: normalize_theme_name(&resolved.name),
                    content: resolved.content,
                },
                None => return Ok(GrayOutcome::NoGraySelected),
            },
        };

        self.apply(&config_path, &mut project, &css_path, &resolved)?;
        Ok(GrayOutcome::Changed {
            theme: resolved.name,
            css_path,
            config_path,
        })
    }

    fn effective_config(&self, project: &ProjectConfig) -> Result<EffectiveConfig, GrayError> {
        let tool = load_tool_config(self.tool_config_path.as_deref())?;
        if let Some(path) = &tool.path {
            debug!(path = %path.display(), "using tool config");
        }
        Ok(resolve_effective_config(
            project,
            &tool.config,
            &self.overrides,
            || possibility_css_path(&self.project_dir),
        ))
    }

    /// Normalize a theme given on the command line.
    ///
    /// Known grays are matched case-insensitively and spelled canonically.
    /// Other names are still fetched, after a warning.
    fn selected_gray_name(&self, theme: &str) -> Option<String> {
        let name = normalize_theme_name(theme);
        if name.is_empty() {
            return None;
        }
        match name.parse::<GrayName>() {
            Ok(gray) => Some(gray.as_str().to_string()),
            Err(err) => {
                warn!(theme = %name, "theme is not a known base gray");
                self.io.renderer.warn(&format!(
                    "{err}; known grays are {}. Fetching it anyway.",
                    available_gray_names().join(", ")
                ));
                Some(name)
            }
        }
    }

    fn override_message(&self, current_theme: &str, selected: Option<&str>) -> String {
        let renderer = self.io.renderer;
        let replacement = match selected {
            Some(theme) => renderer.highlight(theme),
            None => "others".to_string(),
        };
        format!(
            "You will override the current theme \"{}\" with {replacement}?",
            renderer.highlight(current_theme)
        )
    }

    /// Write the stylesheet, then record it in `justd.json`.
    ///
    /// Each file is replaced atomically. The stylesheet goes first so
    /// `justd.json` never names a theme whose CSS was not written.
    fn apply(
        &self,
        config_path: &Path,
        project: &mut ProjectConfig,
        css_path: &str,
        resolved: &ResolvedGray,
    ) -> Result<(), GrayError> {
        let target = resolve_css_target(&self.project_dir, css_path);
        write_atomic(&target, &resolved.content).map_err(GrayError::Write)?;
        info!(
            theme = %resolved.name,
            path = %target.display(),
            bytes = resolved.content.len(),
            "wrote stylesheet"
        );

        project.set_theme(resolved.name.as_str());
        project.set_css(css_path);
        persist_project_config(config_path, project)?;
        info!(path = %config_path.display(), "updated project config");
        Ok(())
    }
}
