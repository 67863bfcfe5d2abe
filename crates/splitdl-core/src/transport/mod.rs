//! HTTP transport seam.
//!
//! The pipeline only needs "issue a request, get status + headers + body".
//! `CurlTransport` is the production implementation; tests plug in their own.

mod libcurl;
#[cfg(test)]
pub(crate) mod scripted;

pub use self::libcurl::CurlTransport;

/// HTTP method used by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Head,
    Get,
}

/// A single request: method, URL and extra header lines (`Name`, `value`).
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn head(url: &str) -> Self {
        Self {
            method: Method::Head,
            url: url.to_string(),
            headers: Vec::new(),
        }
    }

    pub fn get(url: &str) -> Self {
        Self {
            method: Method::Get,
            url: url.to_string(),
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// First header value with `name` (case-insensitive).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Final response after redirects.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u32,
    /// Headers of the final response only, in arrival order.
    pub headers: Vec<(String, String)>,
    /// URL after following redirects.
    pub effective_url: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// First header value with `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Transport-level failure: the request never produced a response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Curl(#[from] curl::Error),
    #[error("{0}")]
    Other(String),
}

/// Blocking HTTP client used by probe and part fetches.
///
/// Implementations must be shareable across the part threads.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}
