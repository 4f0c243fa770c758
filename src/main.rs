//! CLI entry point for justd.

mod app;
mod cli;

use std::io::IsTerminal;
use std::time::Duration;

use clap::Parser;
use justd::config::{load_runtime_overrides, DEFAULT_FETCH_TIMEOUT_SECS};
use justd::gray::{GrayIo, GrayRequest, GraySetter, HttpStylesheetSource};
use justd::logging::init_logging;
use justd::ui::prompt::TerminalPrompter;
use justd::ui::render::{RenderSink, Renderer};
use tracing::debug;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_logging();

    let color = !args.no_color && std::io::stderr().is_terminal();
    let renderer = Renderer::new(color);
    Renderer::set_progress_enabled(std::io::stderr().is_terminal());

    let overrides = match load_runtime_overrides() {
        Ok(overrides) => overrides,
        Err(err) => {
            renderer.error(&format!("config: {err}"));
            std::process::exit(1);
        }
    };
    let timeout = Duration::from_secs(
        overrides
            .fetch_timeout_secs
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS),
    );
    debug!(?overrides, ?timeout, "runtime overrides loaded");

    let code = match args.command {
        cli::Command::Gray { theme, yes } => {
            let prompter = TerminalPrompter::new(color);
            let source = HttpStylesheetSource::new(timeout);
            let io = GrayIo::new(&prompter, &source, &renderer as &dyn RenderSink);
            let setter = GraySetter::new(io, args.project_dir)
                .with_tool_config_path(args.config)
                .with_overrides(overrides);
            let request = GrayRequest {
                override_confirmation: yes,
                selected_theme: theme,
            };
            app::commands::gray::run(&setter, &renderer, &request).await
        }
    };

    std::process::exit(code);
}
