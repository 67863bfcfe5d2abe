//! In-memory transport for unit tests: serves one body, honours `Range`,
//! and can be told to misbehave for specific ranges.

use std::sync::Mutex;

use super::{HttpRequest, HttpResponse, Method, Transport, TransportError};

pub(crate) struct ScriptedTransport {
    body: Vec<u8>,
    pub(crate) accept_ranges: Option<String>,
    pub(crate) content_length: Option<String>,
    pub(crate) content_disposition: Option<String>,
    pub(crate) effective_url: Option<String>,
    pub(crate) head_status: u32,
    /// Range starts whose GET body comes back one byte short.
    pub(crate) short_ranges: Vec<u64>,
    /// Range starts whose GET fails before any response.
    pub(crate) unreachable_ranges: Vec<u64>,
    /// Range starts answered with the given status and an empty body.
    pub(crate) status_ranges: Vec<(u64, u32)>,
    /// Answer every GET with 200 and the full body.
    pub(crate) ignore_range: bool,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new(body: Vec<u8>) -> Self {
        let len = body.len().to_string();
        Self {
            body,
            accept_ranges: Some("bytes".to_string()),
            content_length: Some(len),
            content_disposition: None,
            effective_url: None,
            head_status: 200,
            short_ranges: Vec::new(),
            unreachable_ranges: Vec::new(),
            status_ranges: Vec::new(),
            ignore_range: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn get_count(&self) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == Method::Get)
            .count()
    }

    fn head(&self, request: &HttpRequest) -> HttpResponse {
        let mut headers = Vec::new();
        if let Some(v) = &self.content_length {
            headers.push(("Content-Length".to_string(), v.clone()));
        }
        if let Some(v) = &self.accept_ranges {
            headers.push(("Accept-Ranges".to_string(), v.clone()));
        }
        if let Some(v) = &self.content_disposition {
            headers.push(("Content-Disposition".to_string(), v.clone()));
        }
        HttpResponse {
            status: self.head_status,
            headers,
            effective_url: self
                .effective_url
                .clone()
                .unwrap_or_else(|| request.url.clone()),
            body: Vec::new(),
        }
    }

    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let range = request.header_value("Range").and_then(parse_range);
        let (start, end_incl) = match range {
            Some(r) if !self.ignore_range => r,
            _ => {
                return Ok(HttpResponse {
                    status: 200,
                    headers: Vec::new(),
                    effective_url: request.url.clone(),
                    body: self.body.clone(),
                })
            }
        };
        if self.unreachable_ranges.contains(&start) {
            return Err(TransportError::Other(format!(
                "connection reset while fetching bytes {}-{}",
                start, end_incl
            )));
        }
        if let Some((_, status)) = self.status_ranges.iter().find(|(s, _)| *s == start) {
            return Ok(HttpResponse {
                status: *status,
                headers: Vec::new(),
                effective_url: request.url.clone(),
                body: Vec::new(),
            });
        }
        let end_excl = (end_incl + 1).min(self.body.len() as u64);
        let mut slice = self.body[start as usize..end_excl as usize].to_vec();
        if self.short_ranges.contains(&start) {
            slice.pop();
        }
        Ok(HttpResponse {
            status: 206,
            headers: Vec::new(),
            effective_url: request.url.clone(),
            body: slice,
        })
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        match request.method {
            Method::Head => Ok(self.head(request)),
            Method::Get => self.get(request),
        }
    }
}

fn parse_range(value: &str) -> Option<(u64, u64)> {
    let spec = value.trim().strip_prefix("bytes=")?;
    let (a, b) = spec.split_once('-')?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}
