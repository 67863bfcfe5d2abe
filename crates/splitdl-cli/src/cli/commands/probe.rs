//! Probe command: HEAD the URL and report what a download would use.

use anyhow::{Context, Result};
use splitdl_core::config::SplitConfig;
use splitdl_core::Downloader;

pub async fn run_probe(cfg: &SplitConfig, url: String, json: bool) -> Result<()> {
    let downloader = Downloader::from_config(cfg);
    let result = tokio::task::spawn_blocking(move || downloader.probe(&url))
        .await
        .context("probe task join")??;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("size:      {} bytes", result.total_size);
        println!("file name: {}", result.suggested_file_name);
        println!("url:       {}", result.effective_url);
    }
    Ok(())
}
