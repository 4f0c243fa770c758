//! Base-gray theme switching.
//!
//! - [`picker::ThemePicker`] asks for one of the five grays and fetches it.
//! - [`setter::GraySetter`] runs the full `justd gray` flow: project-config
//!   precondition, effective config, confirmation, a single fetch, and the
//!   CSS + `justd.json` writes.

pub mod names;
pub mod picker;
pub mod setter;
pub mod source;

pub use names::{available_gray_names, normalize_theme_name, GrayName};
pub use picker::{ResolvedGray, ThemePicker, GRAY_PICKER_TITLE};
pub use setter::{GrayOutcome, GrayRequest, GraySetter};
pub use source::{theme_url, HttpStylesheetSource, StylesheetSource};

use crate::ui::prompt::Prompter;
use crate::ui::render::RenderSink;

/// The side-effecting collaborators the gray flow talks to.
#[derive(Clone, Copy)]
pub struct GrayIo<'a> {
    pub prompter: &'a dyn Prompter,
    pub source: &'a dyn StylesheetSource,
    pub renderer: &'a dyn RenderSink,
}

impl<'a> GrayIo<'a> {
    pub fn new(
        prompter: &'a dyn Prompter,
        source: &'a dyn StylesheetSource,
        renderer: &'a dyn RenderSink,
    ) -> Self {
        Self {
            prompter,
            source,
            renderer,
        }
    }
}
