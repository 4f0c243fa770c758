//! Rendering contracts and default terminal renderer bindings.
//!
//! `RenderSink` is the UI contract consumed by orchestration code. Keeping it
//! under `ui` decouples the gray flow from a specific renderer module path.

pub use crate::tui::progress::ProgressHandle;
pub use crate::tui::renderer::Renderer;

/// Injectable rendering interface used by orchestration code.
///
/// `Renderer` is the default terminal implementation; tests substitute a
/// recording sink without coupling to stderr output.
pub trait RenderSink: Send + Sync {
    /// Start a progress indicator for a long-running step.
    fn progress(&self, label: &str) -> ProgressHandle;
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render one key/value field row.
    fn field(&self, key: &str, value: &str);
    /// Render additional detail text.
    fn detail(&self, text: &str);
    /// Render a plain informational line.
    fn info(&self, text: &str);
    /// Render a success line.
    fn success(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
    /// Style an inline value for embedding in other text.
    fn highlight(&self, text: &str) -> String;
}

impl RenderSink for Renderer {
    fn progress(&self, label: &str) -> ProgressHandle {
        self.progress(label)
    }

    fn warn(&self, msg: &str) {
        self.warn(msg);
    }

    fn field(&self, key: &str, value: &str) {
        self.field(key, value);
    }

    fn detail(&self, text: &str) {
        self.detail(text);
    }

    fn info(&self, text: &str) {
        self.info(text);
    }

    fn success(&self, msg: &str) {
        self.success(msg);
    }

    fn error(&self, msg: &str) {
        self.error(msg);
    }

    fn highlight(&self, text: &str) -> String {
        self.highlight(text)
    }
}
