//! CLI argument parsing via clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use justd::build_info;

/// Manage a justd design-system project from the terminal.
#[derive(Debug, Parser)]
#[command(name = "justd", version, long_version = build_info::LONG_VERSION)]
pub struct Args {
    /// Path to the tool config (default: $XDG_CONFIG_HOME/justd/config.json).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Project directory containing justd.json.
    #[arg(long = "project-dir", global = true, default_value = ".")]
    pub project_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Change the base gray of the project theme.
    Gray {
        /// Theme to apply (zinc, gray, slate, neutral, stone). Prompts when omitted.
        theme: Option<String>,

        /// Skip the confirmation and CSS-path prompts.
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
}
