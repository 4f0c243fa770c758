//! Interactive terminal input: list picker, yes/no confirm, and line input.
//!
//! Each primitive has a raw-mode TTY path and a line-based fallback used
//! when stdin or stderr is not a terminal.

use crate::tui::layout::{page_window, terminal_columns, wrapped_rows};
use crate::tui::settings;
use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Duration;

/// Present an interactive list picker and return the selected index.
///
/// In TTY mode, use arrow keys (or PageUp/PageDown) and Enter to select, or
/// Esc to cancel. At most `page_size` options are drawn at once. In
/// non-interactive mode, a numeric selection prompt is shown.
pub fn pick_from_list(
    color: bool,
    title: &str,
    help: &str,
    options: &[String],
    initial_selection: usize,
    page_size: usize,
) -> io::Result<Option<usize>> {
    if options.is_empty() {
        return Ok(None);
    }

    if !is_interactive_terminal() {
        return pick_from_list_fallback(title, options);
    }

    pick_from_list_interactive(color, title, help, options, initial_selection, page_size)
}

/// Ask a yes/no question. Cancelling counts as "no".
pub fn confirm(color: bool, message: &str) -> io::Result<bool> {
    if !is_interactive_terminal() {
        return confirm_from_reader(&mut io::stdin().lock(), &mut io::stderr(), message);
    }

    let options = vec![
        settings::CONFIRM_YES.to_string(),
        settings::CONFIRM_NO.to_string(),
    ];
    let selected = pick_from_list_interactive(
        color,
        message,
        "Use ↑/↓ to pick, Enter to confirm, Esc to cancel.",
        &options,
        0,
        options.len(),
    )?;
    Ok(selected == Some(0))
}

/// Read one line of text, returning `default` for empty input or EOF.
pub fn read_line_with_default(color: bool, message: &str, default: &str) -> io::Result<String> {
    if color {
        eprint!(
            "{} {} {} ",
            settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
            message.with(settings::COLOR_SECTION_TITLE).bold(),
            format!("({default})").with(settings::COLOR_FIELD_KEY),
        );
    } else {
        eprint!("• {message} ({default}) ");
    }
    io::stderr().flush()?;

    let line = read_line_from(&mut io::stdin().lock(), &mut io::stderr())?;
    Ok(answer_or_default(line.as_deref(), default))
}

/// Interpret a typed yes/no answer. Empty input accepts.
pub(crate) fn parse_confirm_answer(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Interpret a numbered picker answer (1-based) as an option index.
pub(crate) fn parse_pick_answer(line: &str, option_count: usize) -> Option<usize> {
    let index = line.trim().parse::<usize>().ok()?;
    if index == 0 || index > option_count {
        return None;
    }
    Some(index - 1)
}

fn answer_or_default(line: Option<&str>, default: &str) -> String {
    match line.map(str::trim) {
        Some(answer) if !answer.is_empty() => answer.to_string(),
        _ => default.to_string(),
    }
}

/// True when stdin/stderr support interactive terminal UI.
fn is_interactive_terminal() -> bool {
    io::stdin().is_terminal() && io::stderr().is_terminal()
}

/// Read one line; `None` on EOF. A newline is echoed to `out` at EOF so the
/// next output starts on a fresh row.
fn read_line_from<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line))
}

/// Line-based yes/no question. Unrecognised answers ask again; EOF is "no".
fn confirm_from_reader<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<bool> {
    loop {
        write!(out, "• {message} [Y/n] ")?;
        out.flush()?;
        let Some(line) = read_line_from(input, out)? else {
            return Ok(false);
        };
        if let Some(answer) = parse_confirm_answer(&line) {
            return Ok(answer);
        }
        writeln!(out, "{}please answer y or n", settings::INDENT_1)?;
    }
}

/// Numbered picker. Empty input or EOF cancels; anything else that is not a
/// listed number asks again.
fn pick_from_reader<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    title: &str,
    options: &[String],
) -> io::Result<Option<usize>> {
    writeln!(out, "• {title}")?;
    for (idx, option) in options.iter().enumerate() {
        writeln!(out, "{}{}. {}", settings::INDENT_1, idx + 1, option)?;
    }
    loop {
        write!(out, "{}pick (empty to cancel): ", settings::INDENT_1)?;
        out.flush()?;
        let Some(line) = read_line_from(input, out)? else {
            return Ok(None);
        };
        if line.trim().is_empty() {
            return Ok(None);
        }
        if let Some(index) = parse_pick_answer(&line, options.len()) {
            return Ok(Some(index));
        }
        writeln!(
            out,
            "{}enter a number from 1 to {}",
            settings::INDENT_1,
            options.len()
        )?;
    }
}

fn pick_from_list_fallback(title: &str, options: &[String]) -> io::Result<Option<usize>> {
    pick_from_reader(&mut io::stdin().lock(), &mut io::stderr(), title, options)
}

/// Interactive picker used when stdin/stderr are terminals.
fn pick_from_list_interactive(
    color: bool,
    title: &str,
    help: &str,
    options: &[String],
    initial_selection: usize,
    page_size: usize,
) -> io::Result<Option<usize>> {
    let _guard = RawModeGuard::acquire()?;
    let mut stderr = io::stderr();
    let mut selected = initial_selection.min(options.len().saturating_sub(1));
    let mut previous_rows = 0usize;
    let page = page_size.max(1);

    loop {
        previous_rows = render_picker(
            &mut stderr,
            color,
            PickerView {
                title,
                help,
                options,
                selected,
                page_size: page,
            },
            previous_rows,
        )?;

        if !event::poll(Duration::from_millis(settings::EVENT_POLL_MS))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            continue;
        }

        match key.code {
            KeyCode::Up => {
                selected = if selected == 0 {
                    options.len() - 1
                } else {
                    selected - 1
                };
            }
            KeyCode::Down => {
                selected = (selected + 1) % options.len();
            }
            KeyCode::PageUp => {
                selected = selected.saturating_sub(page);
            }
            KeyCode::PageDown => {
                selected = (selected + page).min(options.len() - 1);
            }
            KeyCode::Enter => {
                clear_picker_surface(&mut stderr, previous_rows)?;
                return Ok(Some(selected));
            }
            KeyCode::Esc => {
                clear_picker_surface(&mut stderr, previous_rows)?;
                return Ok(None);
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                clear_picker_surface(&mut stderr, previous_rows)?;
                return Ok(None);
            }
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PickerView<'a> {
    title: &'a str,
    help: &'a str,
    options: &'a [String],
    selected: usize,
    page_size: usize,
}

/// Draw picker chrome and the visible page, returning the last drawn row index.
fn render_picker(
    stderr: &mut io::Stderr,
    color: bool,
    view: PickerView<'_>,
    previous_rows: usize,
) -> io::Result<usize> {
    if previous_rows > 0 {
        stderr.queue(MoveUp(previous_rows as u16))?;
    }
    stderr.queue(MoveToColumn(0))?;
    stderr.queue(Clear(ClearType::FromCursorDown))?;

    let cols = terminal_columns();
    let mut total_rows = 0usize;
    let title_plain = format!("• {}", view.title);
    total_rows += wrapped_rows(&title_plain, cols);
    if color {
        stderr.queue(PrintStyledContent(
            settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
        ))?;
        stderr.queue(Print(" "))?;
        stderr.queue(PrintStyledContent(
            view.title.with(settings::COLOR_SECTION_TITLE).bold(),
        ))?;
    } else {
        stderr.queue(Print(&title_plain))?;
    }
    let help_plain = format!("  {}", view.help);
    stderr.queue(Print("\r\n"))?;
    total_rows += wrapped_rows(&help_plain, cols);
    if color {
        stderr.queue(PrintStyledContent(
            help_plain.as_str().with(settings::COLOR_FIELD_KEY),
        ))?;
    } else {
        stderr.queue(Print(&help_plain))?;
    }

    let window = page_window(view.selected, view.options.len(), view.page_size);
    let hidden_before = window.start > 0;
    let hidden_after = window.end < view.options.len();
    for idx in window {
        let active = idx == view.selected;
        let marker = if active {
            settings::GLYPH_PICKER_SELECTED
        } else {
            settings::GLYPH_PICKER_UNSELECTED
        };
        let option = view.options[idx].as_str();
        let line_plain = format!("  {marker} {option}");
        stderr.queue(Print("\r\n"))?;
        total_rows += wrapped_rows(&line_plain, cols);
        if color {
            let (marker_color, text_color) = if active {
                (
                    settings::COLOR_PICKER_SELECTED,
                    settings::COLOR_PICKER_ACTIVE_TEXT,
                )
            } else {
                (
                    settings::COLOR_PICKER_UNSELECTED,
                    settings::COLOR_FIELD_VALUE,
                )
            };
            stderr.queue(Print("  "))?;
            stderr.queue(PrintStyledContent(marker.with(marker_color)))?;
            stderr.queue(Print(" "))?;
            stderr.queue(PrintStyledContent(option.with(text_color)))?;
        } else {
            stderr.queue(Print(&line_plain))?;
        }
    }
    if hidden_before || hidden_after {
        let more = format!(
            "  {} {}/{}",
            settings::GLYPH_PICKER_MORE,
            view.selected + 1,
            view.options.len()
        );
        stderr.queue(Print("\r\n"))?;
        total_rows += wrapped_rows(&more, cols);
        stderr.queue(Print(&more))?;
    }

    stderr.flush()?;
    Ok(total_rows.saturating_sub(1))
}

/// Clear rows previously painted by the picker.
fn clear_picker_surface(stderr: &mut io::Stderr, previous_cursor_row: usize) -> io::Result<()> {
    if previous_cursor_row > 0 {
        stderr.queue(MoveUp(previous_cursor_row as u16))?;
    }
    stderr.queue(MoveToColumn(0))?;
    stderr.queue(Clear(ClearType::FromCursorDown))?;
    stderr.flush()?;
    Ok(())
}

/// Raw mode lifetime guard so terminal state is restored on any return path.
struct RawModeGuard;

impl RawModeGuard {
    /// Enable terminal raw mode and return a guard that disables it on drop.
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
