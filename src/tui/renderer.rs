//! Terminal output renderer for status lines.
//!
//! Everything goes to stderr so stdout stays free for piping.

use crate::tui::progress::{set_progress_enabled, start_progress, ProgressHandle};
use crate::tui::settings;
use crossterm::style::Stylize;

/// Handles all terminal output formatting.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Globally enable/disable live progress spinners.
    pub fn set_progress_enabled(enabled: bool) {
        set_progress_enabled(enabled);
    }

    /// Start a spinner with a status label on stderr.
    pub fn progress(&self, label: &str) -> ProgressHandle {
        start_progress(label.to_string(), self.color)
    }

    /// Print a warning.
    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!(
                "\r{} {msg}",
                settings::LABEL_WARNING.with(settings::COLOR_WARNING).bold()
            );
        } else {
            eprintln!("\r{} {msg}", settings::LABEL_WARNING);
        }
    }

    /// Print an indented key/value line.
    pub fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "\r{}{} {}",
                settings::INDENT_1,
                format!("{key}:").with(settings::COLOR_FIELD_KEY),
                value.with(settings::COLOR_FIELD_VALUE),
            );
        } else {
            eprintln!("\r{}{key}: {value}", settings::INDENT_1);
        }
    }

    /// Print a simple indented detail line.
    pub fn detail(&self, text: &str) {
        if self.color {
            eprintln!(
                "\r{}{}",
                settings::INDENT_1,
                text.with(settings::COLOR_DETAIL)
            );
        } else {
            eprintln!("\r{}{text}", settings::INDENT_1);
        }
    }

    /// Print a plain informational line.
    pub fn info(&self, text: &str) {
        eprintln!("\r{text}");
    }

    /// Print a success line.
    pub fn success(&self, msg: &str) {
        if self.color {
            eprintln!(
                "\r{} {msg}",
                settings::GLYPH_SUCCESS.with(settings::COLOR_SUCCESS).bold()
            );
        } else {
            eprintln!("\r{} {msg}", settings::GLYPH_SUCCESS_PLAIN);
        }
    }

    /// Print an error.
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!(
                "\r{} {msg}",
                settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold()
            );
        } else {
            eprintln!("\r{} {msg}", settings::LABEL_ERROR);
        }
    }

    /// Style an inline value (theme names, commands) for embedding in text.
    pub fn highlight(&self, text: &str) -> String {
        highlight_text(text, self.color)
    }
}

fn highlight_text(text: &str, color: bool) -> String {
    if color {
        text.with(settings::COLOR_HIGHLIGHT).bold().to_string()
    } else {
        text.to_string()
    }
}
