//! Get command: run the full probe, fetch, merge pipeline for one URL.

use anyhow::Result;
use splitdl_core::config::SplitConfig;
use splitdl_core::{download_async, DownloadRequest, Downloader};
use std::path::PathBuf;

pub async fn run_get(
    cfg: &SplitConfig,
    url: String,
    parts: Option<usize>,
    output_dir: Option<PathBuf>,
    name: Option<String>,
    sha256: Option<String>,
) -> Result<()> {
    let mut request = DownloadRequest::from_config(url, cfg);
    if let Some(n) = parts {
        request.part_count = n;
    }
    request.output_dir = output_dir;
    request.file_name = name;
    request.expected_sha256 = sha256;

    let merged = download_async(Downloader::from_config(cfg), request).await?;

    println!("saved {} ({} bytes)", merged.path.display(), merged.bytes);
    let status = if merged.verified { "verified" } else { "unverified" };
    println!("sha256 {} ({})", merged.sha256, status);
    Ok(())
}
