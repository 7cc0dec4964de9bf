//! Response serialization.
//!
//! # Responsibilities
//! - Convert a rendered `Page` into an HTTP response
//! - Set the fixed content type and the exact content length
//!
//! # Design Decisions
//! - `Content-Type: text/html` on every response, including non-HTML files.
//!   This mirrors the server's established wire behavior; clients relying on
//!   it would break under real MIME detection (known limitation, see
//!   DESIGN.md)

use axum::{
    body::Body,
    http::header,
    response::Response,
};

use crate::serve::Page;

/// The content type of every response this server produces.
pub const CONTENT_TYPE_HTML: &str = "text/html";

/// Serialize a rendered page as an HTTP response.
pub fn into_response(page: Page) -> Response {
    Response::builder()
        .status(page.status)
        .header(header::CONTENT_TYPE, CONTENT_TYPE_HTML)
        .header(header::CONTENT_LENGTH, page.body.len())
        .body(Body::from(page.body))
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_headers_are_fixed_type_and_exact_length() {
        let response = into_response(Page::ok(b"<p>hi</p>".to_vec()));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_LENGTH).unwrap(),
            "9"
        );
    }

    #[test]
    fn test_error_pages_are_not_found() {
        let response = into_response(Page::not_found(b"gone".to_vec()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html"
        );
    }
}
