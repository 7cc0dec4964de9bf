//! Request handling.
//!
//! # Responsibilities
//! - Resolve the raw request path against the serve root
//! - Drive the classifier
//! - Convert any signaled error into the 404 error page
//!
//! # Design Decisions
//! - The serve root is an explicit constructor argument (via config), not
//!   ambient process state; it defaults to the working directory at startup
//! - Exactly one `Page` per call; errors never escape this boundary

use std::io;
use std::path::{Path, PathBuf};

use crate::config::ServeConfig;
use crate::serve::cases::Classifier;
use crate::serve::context::RequestContext;
use crate::serve::render::{self, Page};

/// Maps request paths to filesystem resources and renders responses.
pub struct RequestHandler {
    root: PathBuf,
    classifier: Classifier,
}

impl RequestHandler {
    /// Create a handler for the configured serve root.
    ///
    /// Falls back to the process working directory when no root is
    /// configured, which is also why this can fail.
    pub fn new(config: &ServeConfig) -> io::Result<Self> {
        let root = match &config.root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };

        Ok(Self {
            root,
            classifier: Classifier::standard(&config.index_file),
        })
    }

    /// The directory requests are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Handle one request path, returning exactly one page.
    ///
    /// `raw_path` is the path from the request line, starting with `/`.
    pub fn handle_request(&self, raw_path: &str) -> Page {
        let ctx = RequestContext::resolve(&self.root, raw_path);
        tracing::info!(path = %ctx.full_path().display(), "resolved request path");

        match self.classifier.dispatch(&ctx) {
            Ok(body) => {
                tracing::debug!(bytes = body.len(), "sending content");
                Page::ok(body)
            }
            Err(err) => {
                tracing::warn!(path = %raw_path, error = %err, "request failed");
                render::error_page(raw_path, &err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    fn handler_for(root: &Path) -> RequestHandler {
        let config = ServeConfig {
            root: Some(root.to_path_buf()),
            ..ServeConfig::default()
        };
        RequestHandler::new(&config).unwrap()
    }

    #[test]
    fn test_root_with_index_serves_index_body() {
        let root = TempDir::new().unwrap();
        File::create(root.path().join("index.html"))
            .unwrap()
            .write_all(b"<p>hi</p>")
            .unwrap();

        let page = handler_for(root.path()).handle_request("/");
        assert_eq!(page.status, StatusCode::OK);
        assert_eq!(page.body, b"<p>hi</p>");
    }

    #[test]
    fn test_directory_listing_excludes_hidden_entries() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("docs")).unwrap();
        File::create(root.path().join("docs/a.txt")).unwrap();
        File::create(root.path().join("docs/b.txt")).unwrap();
        File::create(root.path().join("docs/.hidden")).unwrap();

        let page = handler_for(root.path()).handle_request("/docs");
        assert_eq!(page.status, StatusCode::OK);

        let body = String::from_utf8(page.body).unwrap();
        assert!(body.contains("<li>a.txt</li>"));
        assert!(body.contains("<li>b.txt</li>"));
        assert!(!body.contains(".hidden"));
    }

    #[test]
    fn test_missing_path_renders_error_page() {
        let root = TempDir::new().unwrap();

        let page = handler_for(root.path()).handle_request("/missing.txt");
        assert_eq!(page.status, StatusCode::NOT_FOUND);

        let body = String::from_utf8(page.body).unwrap();
        assert!(body.contains("/missing.txt"));
        assert!(body.contains("not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_special_file_renders_unknown_object_page() {
        let root = TempDir::new().unwrap();
        let _listener =
            std::os::unix::net::UnixListener::bind(root.path().join("ctl.sock")).unwrap();

        let page = handler_for(root.path()).handle_request("/ctl.sock");
        assert_eq!(page.status, StatusCode::NOT_FOUND);
        assert!(String::from_utf8(page.body)
            .unwrap()
            .contains("Unknown object"));
    }

    #[test]
    fn test_repeated_requests_are_byte_identical() {
        let root = TempDir::new().unwrap();
        File::create(root.path().join("page.html"))
            .unwrap()
            .write_all(b"stable")
            .unwrap();

        let handler = handler_for(root.path());
        let first = handler.handle_request("/page.html");
        let second = handler.handle_request("/page.html");
        assert_eq!(first, second);
    }
}
