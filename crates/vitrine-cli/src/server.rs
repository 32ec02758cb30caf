//! Static file server for the preview tree
//!
//! Serves the root directory with caching disabled. A request for the daily
//! preview runs the daily check before the file is read, so the browser
//! always receives today's document.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use percent_encoding::percent_decode_str;
use tiny_http::{Header, Request, Response, Server, StatusCode};
use tokio::runtime::Handle;
use tracing::{debug, error};

use vitrine_core::config::PREVIEW_FILE;
use vitrine_core::DailyOrchestrator;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// The request path escapes the served root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forbidden;

pub fn bind(port: u16) -> Result<Server> {
    let listen = format!("127.0.0.1:{port}");
    Server::http(&listen).map_err(|err| anyhow::anyhow!("bind {listen}: {err}"))
}

pub struct PreviewServer {
    root: PathBuf,
    orchestrator: Arc<DailyOrchestrator>,
    runtime: Handle,
}

impl PreviewServer {
    pub fn new(orchestrator: Arc<DailyOrchestrator>, runtime: Handle) -> Self {
        Self {
            root: orchestrator.config().root.clone(),
            orchestrator,
            runtime,
        }
    }

    /// Blocking accept loop; call from a blocking thread
    pub fn run(&self, server: Server) {
        for request in server.incoming_requests() {
            self.handle(request);
        }
    }

    fn handle(&self, request: Request) {
        let path = request_path(request.url());
        debug!("{} {}", request.method(), path);

        if is_preview_request(&path) && self.orchestrator.config().enabled {
            if let Err(e) = self.runtime.block_on(self.orchestrator.run_today()) {
                error!("Daily preview check failed: {:#}", e);
            }
        }

        let file = match locate(&self.root, &path) {
            Ok(file) => file,
            Err(Forbidden) => {
                respond(request, 403, TEXT_PLAIN, b"Forbidden".to_vec());
                return;
            }
        };

        match std::fs::read(&file) {
            Ok(data) => respond(request, 200, &content_type(&file), data),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                respond(request, 404, TEXT_PLAIN, b"Not Found".to_vec())
            }
            Err(e) => {
                error!("Failed to read {}: {}", file.display(), e);
                respond(request, 500, TEXT_PLAIN, b"Internal Server Error".to_vec());
            }
        }
    }
}

fn respond(request: Request, status: u16, content_type: &str, body: Vec<u8>) {
    let mut response = Response::from_data(body).with_status_code(StatusCode(status));
    for (name, value) in [("Content-Type", content_type), ("Cache-Control", "no-store")] {
        if let Ok(header) = Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            response.add_header(header);
        }
    }
    if let Err(e) = request.respond(response) {
        debug!("Client went away: {}", e);
    }
}

fn split_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

/// Normalize a raw request URL into the path to serve
pub fn request_path(url: &str) -> String {
    let mut path = percent_decode_str(split_query(url))
        .decode_utf8_lossy()
        .into_owned();
    if path.ends_with('/') {
        path.push_str("index.html");
    }
    if let Some(rest) = path.strip_prefix("/public/") {
        path = format!("/{rest}");
    }
    path
}

fn is_preview_request(path: &str) -> bool {
    path.strip_prefix('/') == Some(PREVIEW_FILE)
}

/// Join a request path onto `root`, refusing anything that climbs above it
pub fn resolve_path(root: &Path, path: &str) -> Result<PathBuf, Forbidden> {
    let mut parts: Vec<&std::ffi::OsStr> = Vec::new();
    for component in Path::new(path).components() {
        match component {
            Component::Normal(part) => parts.push(part),
            Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                parts.pop().ok_or(Forbidden)?;
            }
            Component::Prefix(_) => return Err(Forbidden),
        }
    }
    Ok(parts.into_iter().fold(root.to_path_buf(), |acc, part| acc.join(part)))
}

/// Resolve the file that answers `path`
pub fn locate(root: &Path, path: &str) -> Result<PathBuf, Forbidden> {
    if path == "/index.html" {
        if let Some(outside) = root.parent().map(|parent| parent.join("index.html")) {
            if outside.is_file() {
                return Ok(outside);
            }
        }
    }

    let file = resolve_path(root, path)?;
    if file.is_dir() {
        return Ok(file.join("index.html"));
    }
    Ok(file)
}

pub fn content_type(path: &Path) -> String {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let textual = mime.type_() == mime_guess::mime::TEXT
        || matches!(mime.subtype().as_str(), "javascript" | "json" | "xml" | "svg");
    if textual {
        format!("{}; charset=utf-8", mime.essence_str())
    } else {
        mime.essence_str().to_string()
    }
}
