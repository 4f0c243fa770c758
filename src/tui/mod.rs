//! Terminal user-interface building blocks.
//!
//! Input primitives, layout math, spinner, and output styling live in
//! separate modules so the prompt flow can depend on small pieces.

pub mod input;
mod layout;
pub mod progress;
pub mod renderer;
pub mod settings;
