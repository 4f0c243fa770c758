//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak glyphs, colors, indentation, and
//! spinner behavior.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / indentation
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";
pub const PICKER_PAGE_SIZE: usize = 15;

// ---------------------------------------------------------------------------
// Labels / glyphs
// ---------------------------------------------------------------------------

pub const LABEL_WARNING: &str = "warning:";
pub const LABEL_ERROR: &str = "error:";

pub const GLYPH_SECTION_BULLET: &str = "•";
pub const GLYPH_SUCCESS: &str = "✓";
pub const GLYPH_SUCCESS_PLAIN: &str = "ok:";
pub const GLYPH_PICKER_SELECTED: &str = "▶";
pub const GLYPH_PICKER_UNSELECTED: &str = "·";
pub const GLYPH_PICKER_MORE: &str = "…";

pub const CONFIRM_YES: &str = "Yes";
pub const CONFIRM_NO: &str = "No";

// ---------------------------------------------------------------------------
// Spinner / progress
// ---------------------------------------------------------------------------

pub const PROGRESS_CLEAR_LINE: &str = "\r\x1b[2K";
pub const PROGRESS_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
pub const PROGRESS_TICK_MS: u64 = 100;

pub const EVENT_POLL_MS: u64 = 80;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_SUCCESS: Color = Color::Green;
pub const COLOR_HIGHLIGHT: Color = Color::Cyan;

pub const COLOR_SECTION_BULLET: Color = Color::DarkGrey;
pub const COLOR_SECTION_TITLE: Color = Color::Cyan;
pub const COLOR_FIELD_KEY: Color = Color::DarkGrey;
pub const COLOR_FIELD_VALUE: Color = Color::White;
pub const COLOR_DETAIL: Color = Color::Grey;

pub const COLOR_PROGRESS_FRAME: Color = Color::Cyan;
pub const COLOR_PROGRESS_LABEL: Color = Color::DarkGrey;
pub const COLOR_PROGRESS_ELAPSED: Color = Color::DarkGrey;

pub const COLOR_PICKER_SELECTED: Color = Color::DarkYellow;
pub const COLOR_PICKER_UNSELECTED: Color = Color::DarkGrey;
pub const COLOR_PICKER_ACTIVE_TEXT: Color = Color::Yellow;
