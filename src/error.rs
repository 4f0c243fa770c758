//! Unified error types for the gray switcher.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading, parsing, or persisting configuration files.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Json(e) => write!(f, "json: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ---------------------------------------------------------------------------
// FetchError
// ---------------------------------------------------------------------------

/// Errors from the remote stylesheet fetch.
#[derive(Debug)]
pub enum FetchError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the theme repository.
    Status { code: u16, status_text: String },
}

impl FetchError {
    /// HTTP status code when the failure came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status { status_text, .. } => {
                write!(f, "Failed to fetch color: {status_text}")
            }
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

// ---------------------------------------------------------------------------
// GrayError
// ---------------------------------------------------------------------------

/// Top-level error for theme-change operations.
#[derive(Debug)]
pub enum GrayError {
    Config(ConfigError),
    Fetch(FetchError),
    /// Reading user input from the terminal failed.
    Prompt(std::io::Error),
    /// Writing the stylesheet to disk failed.
    Write(std::io::Error),
}

impl fmt::Display for GrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Fetch(e) => write!(f, "fetch: {e}"),
            Self::Prompt(e) => write!(f, "prompt: {e}"),
            Self::Write(e) => write!(f, "write: {e}"),
        }
    }
}

impl std::error::Error for GrayError {}

impl From<ConfigError> for GrayError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<FetchError> for GrayError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}
