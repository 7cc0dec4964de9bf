//! Response body rendering.
//!
//! # Responsibilities
//! - Read file contents for serving verbatim
//! - Generate directory listing HTML
//! - Generate the error page for any signaled failure
//!
//! # Design Decisions
//! - Whole-file synchronous reads; no streaming (static-docs scale)
//! - Read/list failures name the ORIGINAL requested path, not the
//!   filesystem path that failed
//! - Listing entries are sorted so output is deterministic across platforms

use std::fs;
use std::path::Path;

use axum::http::StatusCode;

use crate::serve::error::ServeError;

/// Fixed skeleton for directory listings.
const LISTING_PAGE: &str = "<html>\n<body>\n<ul>\n{entries}\n</ul>\n</body>\n</html>\n";

/// Fixed skeleton for error pages.
const ERROR_PAGE: &str =
    "<html>\n<body>\n<h1>Error accessing {path}</h1>\n<p>{msg}</p>\n</body>\n</html>\n";

/// A fully rendered response: status plus body bytes.
///
/// The HTTP layer adds the fixed content type and the content length.
/// Only 200 and 404 occur.
#[derive(Debug, PartialEq, Eq)]
pub struct Page {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl Page {
    pub fn ok(body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn not_found(body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body,
        }
    }
}

/// Read the full contents of the file at `path`.
///
/// `requested` is the client-visible path used for error attribution.
pub fn file_bytes(path: &Path, requested: &str) -> Result<Vec<u8>, ServeError> {
    fs::read(path).map_err(|source| ServeError::ReadFailure {
        path: requested.to_string(),
        source,
    })
}

/// Render the listing page for the directory at `dir`.
///
/// Immediate entries only; names starting with `.` are excluded.
pub fn listing(dir: &Path, requested: &str) -> Result<Vec<u8>, ServeError> {
    let listing_failed = |source| ServeError::ListingFailure {
        path: requested.to_string(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(listing_failed)? {
        let entry = entry.map_err(listing_failed)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        names.push(name);
    }
    names.sort();

    let items = names
        .iter()
        .map(|name| format!("<li>{name}</li>"))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(LISTING_PAGE.replace("{entries}", &items).into_bytes())
}

/// Render the 404 error page for a failed request.
pub fn error_page(requested: &str, err: &ServeError) -> Page {
    let body = ERROR_PAGE
        .replace("{path}", requested)
        .replace("{msg}", &err.to_string());
    Page::not_found(body.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_file_bytes_returns_exact_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        File::create(&path)
            .unwrap()
            .write_all(b"<p>hi</p>")
            .unwrap();

        let bytes = file_bytes(&path, "/page.html").unwrap();
        assert_eq!(bytes, b"<p>hi</p>");
    }

    #[test]
    fn test_file_bytes_failure_names_requested_path() {
        let dir = TempDir::new().unwrap();
        let err = file_bytes(&dir.path().join("gone"), "/gone.txt").unwrap_err();
        match err {
            ServeError::ReadFailure { path, .. } => assert_eq!(path, "/gone.txt"),
            other => panic!("expected ReadFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_listing_excludes_hidden_and_sorts() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("b.txt")).unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        File::create(dir.path().join(".hidden")).unwrap();

        let body = String::from_utf8(listing(dir.path(), "/docs").unwrap()).unwrap();
        assert!(body.contains("<li>a.txt</li>"));
        assert!(body.contains("<li>b.txt</li>"));
        assert!(!body.contains(".hidden"));
        assert!(body.find("<li>a.txt</li>").unwrap() < body.find("<li>b.txt</li>").unwrap());
    }

    #[test]
    fn test_listing_of_only_hidden_entries_is_empty() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join(".a")).unwrap();
        File::create(dir.path().join(".b")).unwrap();

        let body = String::from_utf8(listing(dir.path(), "/docs").unwrap()).unwrap();
        assert!(!body.contains("<li>"));
        assert!(body.contains("<ul>"));
    }

    #[test]
    fn test_listing_failure_names_requested_path() {
        let dir = TempDir::new().unwrap();
        let err = listing(&dir.path().join("absent"), "/absent").unwrap_err();
        match err {
            ServeError::ListingFailure { path, .. } => assert_eq!(path, "/absent"),
            other => panic!("expected ListingFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_error_page_embeds_path_and_message() {
        let err = ServeError::NotFound {
            path: "/missing.txt".into(),
        };
        let page = error_page("/missing.txt", &err);
        assert_eq!(page.status, StatusCode::NOT_FOUND);

        let body = String::from_utf8(page.body).unwrap();
        assert!(body.contains("Error accessing /missing.txt"));
        assert!(body.contains("'/missing.txt' not found"));
    }
}
