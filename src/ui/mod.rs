//! Unified terminal-facing UI facade.
//!
//! Groups the rendering contract and the prompt contract so orchestration
//! layers depend on `ui` instead of terminal internals.

pub mod prompt;
pub mod render;
