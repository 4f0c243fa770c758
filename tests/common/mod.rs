//! Shared fixtures for integration tests: a throwaway HTTP responder and
//! temp project directories.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// One canned response keyed by request path.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    pub status_line: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Route {
    pub fn ok(path: &str, body: &str) -> Self {
        Self::bytes(path, "text/plain; charset=utf-8", body.as_bytes())
    }

    pub fn bytes(path: &str, content_type: &str, body: &[u8]) -> Self {
        Self {
            path: path.to_string(),
            status_line: "200 OK".to_string(),
            content_type: content_type.to_string(),
            body: body.to_vec(),
        }
    }

    pub fn status(path: &str, status_line: &str) -> Self {
        Self {
            path: path.to_string(),
            status_line: status_line.to_string(),
            content_type: "text/plain; charset=utf-8".to_string(),
            body: Vec::new(),
        }
    }
}

/// Minimal HTTP/1.1 responder on 127.0.0.1.
///
/// Unknown paths get `404 Not Found`. Every connection is closed after one
/// response.
pub struct StylesheetServer {
    pub base_url: String,
    hits: Arc<Mutex<Vec<String>>>,
    task: JoinHandle<()>,
}

impl StylesheetServer {
    pub async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let hits = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&hits);
        let task = tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let mut request_buf = [0u8; 4096];
                let read = stream.read(&mut request_buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&request_buf[..read]);
                let path = request
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();
                seen.lock().unwrap().push(path.clone());

                let route = routes
                    .iter()
                    .find(|route| route.path == path)
                    .cloned()
                    .unwrap_or_else(|| Route {
                        body: b"404: Not Found".to_vec(),
                        ..Route::status(&path, "404 Not Found")
                    });
                let head = format!(
                    "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    route.status_line,
                    route.content_type,
                    route.body.len()
                );
                let _ = stream.write_all(head.as_bytes()).await;
                let _ = stream.write_all(&route.body).await;
                let _ = stream.shutdown().await;
            }
        });
        Self {
            base_url: format!("http://{addr}"),
            hits,
            task,
        }
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Request paths received so far, in order.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

impl Drop for StylesheetServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

static DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary project directory removed on drop.
pub struct TempProject {
    root: PathBuf,
}

impl TempProject {
    pub fn new(label: &str) -> Self {
        let suffix = DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let root = std::env::temp_dir().join(format!(
            "justd-it-{label}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&root).expect("create temp project");
        Self { root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn child(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.child(relative)).expect("read fixture")
    }
}

impl Drop for TempProject {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}
