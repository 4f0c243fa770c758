//! Spinner primitives for terminal liveness indicators.

use crate::tui::settings;
use crossterm::style::Stylize;
use std::io::{self, IsTerminal, Write};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::{Duration, Instant};

static PROGRESS_ENABLED: AtomicBool = AtomicBool::new(true);

/// RAII handle for an active spinner.
pub struct ProgressHandle {
    /// Stop signal shared with the spinner thread.
    stop: Arc<AtomicBool>,
    /// Background writer thread, present only when the spinner is active.
    thread: Option<thread::JoinHandle<()>>,
}

impl ProgressHandle {
    /// Construct a no-op handle used when progress output is disabled.
    pub fn disabled() -> Self {
        Self {
            stop: Arc::new(AtomicBool::new(true)),
            thread: None,
        }
    }

    /// Stop and clean up the spinner thread.
    pub fn finish(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for ProgressHandle {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Globally enable/disable live progress rendering.
pub fn set_progress_enabled(enabled: bool) {
    PROGRESS_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Start a spinner on stderr.
pub fn start_progress(label: impl Into<String>, color: bool) -> ProgressHandle {
    if !PROGRESS_ENABLED.load(Ordering::Relaxed) || !io::stderr().is_terminal() {
        return ProgressHandle::disabled();
    }

    let label = label.into();
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);

    let thread = thread::spawn(move || {
        let start = Instant::now();
        let mut idx = 0usize;

        while !stop_flag.load(Ordering::Relaxed) {
            let line = progress_line(
                settings::PROGRESS_FRAMES[idx % settings::PROGRESS_FRAMES.len()],
                &label,
                start.elapsed(),
                color,
            );
            let mut err = io::stderr();
            let _ = write!(err, "{line}");
            let _ = err.flush();
            idx += 1;
            thread::sleep(Duration::from_millis(settings::PROGRESS_TICK_MS));
        }

        clear_progress_line();
    });

    ProgressHandle {
        stop,
        thread: Some(thread),
    }
}

fn progress_line(frame: char, label: &str, elapsed: Duration, color: bool) -> String {
    let elapsed_s = elapsed.as_millis() as f64 / 1000.0;
    if color {
        format!(
            "{}{} {} {}",
            settings::PROGRESS_CLEAR_LINE,
            format!("[{frame}]").with(settings::COLOR_PROGRESS_FRAME),
            label.with(settings::COLOR_PROGRESS_LABEL),
            format!("({elapsed_s:.1}s)").with(settings::COLOR_PROGRESS_ELAPSED),
        )
    } else {
        format!(
            "{}[{frame}] {label} ({elapsed_s:.1}s)",
            settings::PROGRESS_CLEAR_LINE
        )
    }
}

fn clear_progress_line() {
    let mut err = io::stderr();
    let _ = write!(err, "{}", settings::PROGRESS_CLEAR_LINE);
    let _ = err.flush();
}
