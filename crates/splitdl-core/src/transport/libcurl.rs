//! libcurl-backed transport (one `Easy` handle per request).

use curl::easy::{Easy, List};
use std::str;
use std::time::Duration;

use super::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use crate::config::SplitConfig;

/// Blocking transport built on `curl::easy::Easy`.
///
/// Follows redirects; timeouts come from `SplitConfig`. Safe to share across
/// threads since each request creates its own handle.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    timeout: Option<Duration>,
    max_redirections: u32,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::from_config(&SplitConfig::default())
    }
}

impl CurlTransport {
    pub fn from_config(cfg: &SplitConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: cfg.timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
            max_redirections: cfg.max_redirections,
        }
    }
}

impl Transport for CurlTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = Easy::new();
        easy.url(&request.url)?;
        match request.method {
            Method::Head => easy.nobody(true)?,
            Method::Get => easy.get(true)?,
        }
        easy.follow_location(true)?;
        easy.max_redirections(self.max_redirections)?;
        easy.connect_timeout(self.connect_timeout)?;
        if let Some(timeout) = self.timeout {
            easy.timeout(timeout)?;
        }

        let mut list = List::new();
        for (k, v) in &request.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        if !request.headers.is_empty() {
            easy.http_headers(list)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    let line = s.trim_end();
                    // Each hop of a redirect chain starts with its own status line.
                    if line.starts_with("HTTP/") {
                        header_lines.clear();
                    }
                    header_lines.push(line.to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        let effective_url = easy
            .effective_url()?
            .unwrap_or(request.url.as_str())
            .to_string();

        Ok(HttpResponse {
            status,
            headers: parse_header_lines(&header_lines),
            effective_url,
            body,
        })
    }
}

/// Split raw header lines into (name, value) pairs; status and blank lines are skipped.
fn parse_header_lines(lines: &[String]) -> Vec<(String, String)> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with("HTTP/"))
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .collect()
}
