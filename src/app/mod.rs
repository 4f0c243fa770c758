//! Binary-local application orchestration helpers.
//!
//! `main.rs` keeps the wiring; this module hosts per-command outcome
//! rendering so the entrypoint stays small.

pub(crate) mod commands;
