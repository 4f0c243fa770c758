//! Subcommand helpers used by the CLI.

/// `justd gray` helpers.
pub(crate) mod gray;
