use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Client signature sent with the probe and every part request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/51.0.2704.103 Safari/537.36";

/// Global configuration loaded from `~/.config/splitdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Number of parts (concurrent range requests) per download.
    #[serde(default = "default_parts")]
    pub parts: usize,
    /// `User-Agent` header for probe and part requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// TCP/TLS connect timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds (0 = no limit).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: Option<u64>,
    /// Maximum redirects followed per request.
    #[serde(default = "default_max_redirections")]
    pub max_redirections: u32,
}

fn default_parts() -> usize {
    8
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_timeout_secs() -> Option<u64> {
    Some(3600)
}

fn default_max_redirections() -> u32 {
    10
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            parts: default_parts(),
            user_agent: default_user_agent(),
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            max_redirections: default_max_redirections(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("splitdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SplitConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SplitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SplitConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
