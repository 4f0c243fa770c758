//! justd: switch the base gray of a justd design-system project.
//!
//! The crate resolves an effective configuration from the project's
//! `justd.json`, an optional tool config, and the environment, lets the user
//! pick one of the base grays, fetches its stylesheet once, and writes the CSS
//! file and the updated project config.
//!
//! # Quick start
//!
//! ```no_run
//! use std::time::Duration;
//! use justd::gray::{GrayIo, GrayRequest, GraySetter, HttpStylesheetSource};
//! use justd::ui::prompt::TerminalPrompter;
//! use justd::ui::render::Renderer;
//!
//! # async fn example() {
//! let renderer = Renderer::new(true);
//! let prompter = TerminalPrompter::new(true);
//! let source = HttpStylesheetSource::new(Duration::from_secs(20));
//! let setter = GraySetter::new(GrayIo::new(&prompter, &source, &renderer), ".");
//! let request = GrayRequest {
//!     override_confirmation: true,
//!     selected_theme: Some("slate".to_string()),
//! };
//! let outcome = setter.set_gray(&request).await.unwrap();
//! println!("{outcome:?}");
//! # }
//! ```

pub mod build_info;
pub mod config;
pub mod error;
pub mod gray;
pub mod logging;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
pub mod ui;
