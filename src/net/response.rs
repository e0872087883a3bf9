//! Buffered HTTP response.
//!
//! A [`Response`] is produced once per request by [`fetch`](crate::net::fetch)
//! and owns everything that came back: final URL, status line, headers and
//! the complete body. The underlying connection is already released by the
//! time a `Response` exists.
//!
//! - `content_length` is what the server announced (or what the body size
//!   hint reported). It is `None` for chunked responses.
//! - `headers` is an `http::HeaderMap`, so lookups are case-insensitive.
use std::borrow::Cow;

use http::HeaderMap;

#[derive(Debug)]
pub struct Response {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Reason phrase for `status`, `"Unknown"` for non-standard codes.
    pub status_text: String,

    /// Announced body length, if the server sent one.
    pub content_length: Option<u64>,

    pub headers: HeaderMap,

    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl Response {
    /// Body as text. Invalid UTF-8 sequences are replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
