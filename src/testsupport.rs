//! Shared test fixtures for config, picker, and setter test modules.
//!
//! Temp dirs, a scripted [`Prompter`], a canned [`StylesheetSource`], and a
//! recording [`RenderSink`] so flow tests never touch the terminal or network.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::FetchError;
use crate::gray::StylesheetSource;
use crate::ui::prompt::Prompter;
use crate::ui::render::{ProgressHandle, RenderSink};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "justd-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// One recorded `select` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectCall {
    pub title: String,
    pub options: Vec<String>,
    pub page_size: usize,
}

/// Prompter that replays queued answers and records every question.
///
/// Running out of answers panics, so a test fails loudly on an unexpected
/// prompt.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    selections: Mutex<VecDeque<Option<usize>>>,
    confirmations: Mutex<VecDeque<bool>>,
    answers: Mutex<VecDeque<String>>,
    select_calls: Mutex<Vec<SelectCall>>,
    confirm_calls: Mutex<Vec<String>>,
    input_calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedPrompter {
    /// Queue a picker answer (`None` cancels).
    pub fn with_select(self, answer: Option<usize>) -> Self {
        self.selections.lock().unwrap().push_back(answer);
        self
    }

    /// Queue a confirmation answer.
    pub fn with_confirm(self, answer: bool) -> Self {
        self.confirmations.lock().unwrap().push_back(answer);
        self
    }

    /// Queue a line-input answer; blank means "accept the default".
    pub fn with_input(self, answer: &str) -> Self {
        self.answers.lock().unwrap().push_back(answer.to_string());
        self
    }

    pub fn selects(&self) -> Vec<SelectCall> {
        self.select_calls.lock().unwrap().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirm_calls.lock().unwrap().clone()
    }

    /// Recorded `(message, default)` pairs.
    pub fn inputs(&self) -> Vec<(String, String)> {
        self.input_calls.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(
        &self,
        title: &str,
        options: &[String],
        page_size: usize,
    ) -> io::Result<Option<usize>> {
        self.select_calls.lock().unwrap().push(SelectCall {
            title: title.to_string(),
            options: options.to_vec(),
            page_size,
        });
        Ok(self
            .selections
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected select prompt"))
    }

    fn confirm(&self, message: &str) -> io::Result<bool> {
        self.confirm_calls.lock().unwrap().push(message.to_string());
        Ok(self
            .confirmations
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected confirm prompt"))
    }

    fn input(&self, message: &str, default: &str) -> io::Result<String> {
        self.input_calls
            .lock()
            .unwrap()
            .push((message.to_string(), default.to_string()));
        let answer = self
            .answers
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected input prompt");
        if answer.trim().is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }
}

/// Stylesheet source returning one canned response for every URL.
#[derive(Debug)]
pub struct StubSource {
    response: Result<Vec<u8>, (u16, String)>,
    urls: Mutex<Vec<String>>,
}

impl StubSource {
    pub fn ok(body: &str) -> Self {
        Self::bytes(body.as_bytes())
    }

    pub fn bytes(body: &[u8]) -> Self {
        Self {
            response: Ok(body.to_vec()),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn status(code: u16, status_text: &str) -> Self {
        Self {
            response: Err((code, status_text.to_string())),
            urls: Mutex::new(Vec::new()),
        }
    }

    /// URLs requested so far, in order.
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.urls.lock().unwrap().len()
    }
}

#[async_trait]
impl StylesheetSource for StubSource {
    async fn fetch_stylesheet(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.urls.lock().unwrap().push(url.to_string());
        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err((code, status_text)) => Err(FetchError::Status {
                code: *code,
                status_text: status_text.clone(),
            }),
        }
    }
}

/// Render sink that keeps every line in memory, unstyled.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    fn push(&self, line: String) {
        self.lines.lock().unwrap().push(line);
    }
}

impl RenderSink for RecordingSink {
    fn progress(&self, label: &str) -> ProgressHandle {
        self.push(format!("progress: {label}"));
        ProgressHandle::disabled()
    }

    fn warn(&self, msg: &str) {
        self.push(format!("warning: {msg}"));
    }

    fn field(&self, key: &str, value: &str) {
        self.push(format!("field: {key}={value}"));
    }

    fn detail(&self, text: &str) {
        self.push(format!("detail: {text}"));
    }

    fn info(&self, text: &str) {
        self.push(format!("info: {text}"));
    }

    fn success(&self, msg: &str) {
        self.push(format!("success: {msg}"));
    }

    fn error(&self, msg: &str) {
        self.push(format!("error: {msg}"));
    }

    fn highlight(&self, text: &str) -> String {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn scripted_input_falls_back_to_default_on_blank() {
        let prompter = ScriptedPrompter::default()
            .with_input("")
            .with_input("custom.css");
        assert_eq!(prompter.input("where?", "app.css").unwrap(), "app.css");
        assert_eq!(prompter.input("where?", "app.css").unwrap(), "custom.css");
        assert_eq!(
            prompter.inputs()[0],
            ("where?".to_string(), "app.css".to_string())
        );
        assert_eq!(prompter.inputs().len(), 2);
    }

    #[test]
    fn recording_sink_keeps_lines_in_order() {
        let sink = RecordingSink::default();
        sink.info("one");
        sink.error("two");
        assert_eq!(sink.lines(), vec!["info: one", "error: two"]);
    }
}
