//! `justd gray` command helpers.
//!
//! Runs the setter and turns its outcome into terminal output and an exit
//! code.

use justd::config::INIT_COMMAND;
use justd::gray::{GrayOutcome, GrayRequest, GraySetter};
use justd::ui::render::RenderSink;
use tracing::error;

/// Run one gray change and return the process exit code.
pub(crate) async fn run(
    setter: &GraySetter<'_>,
    renderer: &dyn RenderSink,
    request: &GrayRequest,
) -> i32 {
    match setter.set_gray(request).await {
        Ok(outcome) => render_outcome(renderer, &outcome),
        Err(err) => {
            error!(error = %err, "gray change failed");
            renderer.error(&err.to_string());
            1
        }
    }
}

/// Render a finished run. Returns the exit code for `outcome`.
pub(crate) fn render_outcome(renderer: &dyn RenderSink, outcome: &GrayOutcome) -> i32 {
    match outcome {
        GrayOutcome::Changed {
            theme,
            css_path,
            config_path,
        } => {
            renderer.success(&format!(
                "The gray changed to '{}'",
                renderer.highlight(theme)
            ));
            renderer.field("css", css_path);
            renderer.field("saved_to", &config_path.display().to_string());
            0
        }
        GrayOutcome::Canceled => {
            renderer.info("Theme change canceled.");
            0
        }
        GrayOutcome::NoGraySelected => {
            renderer.info("No gray selected.");
            0
        }
        GrayOutcome::MissingProjectConfig { path } => {
            renderer.error(&format!("justd.json not found at {}", path.display()));
            renderer.detail(&format!(
                "Please run `{INIT_COMMAND}` to initialize the project."
            ));
            1
        }
    }
}
