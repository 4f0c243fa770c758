//! Prompt contract for interactive questions.
//!
//! Orchestration code asks questions through [`Prompter`] so tests can script
//! answers. [`TerminalPrompter`] is the crossterm-backed implementation.

use std::io;

use crate::tui::input;

/// Interactive questions the gray flow may ask.
pub trait Prompter: Send + Sync {
    /// Pick one of `options`; `None` when the user cancels.
    fn select(&self, title: &str, options: &[String], page_size: usize)
        -> io::Result<Option<usize>>;
    /// Ask a yes/no question.
    fn confirm(&self, message: &str) -> io::Result<bool>;
    /// Ask for a line of text pre-filled with `default`.
    fn input(&self, message: &str, default: &str) -> io::Result<String>;
}

/// Prompter that talks to the controlling terminal.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompter {
    color: bool,
}

impl TerminalPrompter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Prompter for TerminalPrompter {
    fn select(
        &self,
        title: &str,
        options: &[String],
        page_size: usize,
    ) -> io::Result<Option<usize>> {
        input::pick_from_list(
            self.color,
            title,
            "Use ↑/↓ to pick, Enter to confirm, Esc to cancel.",
            options,
            0,
            page_size,
        )
    }

    fn confirm(&self, message: &str) -> io::Result<bool> {
        input::confirm(self.color, message)
    }

    fn input(&self, message: &str, default: &str) -> io::Result<String> {
        input::read_line_with_default(self.color, message, default)
    }
}
