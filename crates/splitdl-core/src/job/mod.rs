//! End-to-end download job: probe, plan, fetch, merge.

mod request;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::SplitConfig;
use crate::downloader;
use crate::error::DownloadError;
use crate::probe::{self, ProbeResult};
use crate::segmenter::plan_parts;
use crate::storage::{self, MergedFile};
use crate::transport::{CurlTransport, Transport};
use crate::url_model::sanitize_filename;

pub use request::DownloadRequest;

/// Runs download requests over a shared transport.
///
/// Holds no per-run state; every `run` builds its own plan and slots, so one
/// `Downloader` can serve several requests, including concurrently.
#[derive(Clone)]
pub struct Downloader {
    transport: Arc<dyn Transport>,
    user_agent: String,
}

impl Downloader {
    pub fn new(transport: Arc<dyn Transport>, user_agent: impl Into<String>) -> Self {
        Self {
            transport,
            user_agent: user_agent.into(),
        }
    }

    /// libcurl transport with the configured timeouts, redirects and user agent.
    pub fn from_config(cfg: &SplitConfig) -> Self {
        Self::new(Arc::new(CurlTransport::from_config(cfg)), cfg.user_agent.clone())
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// HEAD only.
    pub fn probe(&self, url: &str) -> Result<ProbeResult, DownloadError> {
        probe::probe(self.transport.as_ref(), url, &self.user_agent)
    }

    /// Runs the whole pipeline. Blocks until the file is merged or a stage fails.
    ///
    /// Nothing is fetched unless the probe succeeds and the plan is valid;
    /// nothing is written unless every part arrived.
    pub fn run(&self, request: &DownloadRequest) -> Result<MergedFile, DownloadError> {
        let probed = self.probe(&request.url)?;
        let plan = plan_parts(probed.total_size, request.part_count)?;

        let output_path = output_path(request, &probed)?;
        tracing::info!(
            url = %request.url,
            parts = plan.len(),
            output = %output_path.display(),
            "download start"
        );

        let state = downloader::fetch_all(self.transport.as_ref(), &request.url, &self.user_agent, plan)?;
        storage::assemble(&state, &output_path, request.expected_sha256.as_deref())
    }
}

/// Runs `request` on tokio's blocking pool.
///
/// Pipeline errors arrive as a `DownloadError` inside the `anyhow::Error`
/// (use `downcast_ref`); a failed join is reported with context.
pub async fn download_async(downloader: Downloader, request: DownloadRequest) -> Result<MergedFile> {
    let url = request.url.clone();
    let merged = tokio::task::spawn_blocking(move || downloader.run(&request))
        .await
        .context("download task join")?
        .with_context(|| format!("download {}", url))?;
    Ok(merged)
}

fn output_path(request: &DownloadRequest, probed: &ProbeResult) -> Result<PathBuf, DownloadError> {
    let name = request
        .file_name
        .as_deref()
        .map(sanitize_filename)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| probed.suggested_file_name.clone());

    let dir = match &request.output_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(|source| DownloadError::OutputCreateFailed {
            path: Path::new(&name).to_path_buf(),
            source,
        })?,
    };
    Ok(dir.join(name))
}
