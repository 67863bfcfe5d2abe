//! CLI for the splitdl parallel range downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use splitdl_core::{config, DownloadError, Phase};
use std::ffi::OsString;
use std::path::PathBuf;

use commands::{run_checksum, run_completions, run_get, run_man, run_plan, run_probe};

/// Top-level CLI for splitdl.
#[derive(Debug, Parser)]
#[command(name = "splitdl")]
#[command(about = "splitdl: download one file as parallel HTTP byte ranges", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a URL in parallel parts and merge them into one file.
    Get {
        /// Direct HTTP/HTTPS URL to download.
        url: String,
        /// Number of parts (default from config).
        #[arg(short = 'n', long, value_name = "N", value_parser = parse_parts)]
        parts: Option<usize>,
        /// Directory for the output file (default: current directory).
        #[arg(short = 'o', long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Output filename instead of the one suggested by the server.
        #[arg(long, value_name = "FILE")]
        name: Option<String>,
        /// Expected SHA-256 of the whole file (64 hex characters).
        #[arg(long, value_name = "HEX", value_parser = parse_sha256)]
        sha256: Option<String>,
    },

    /// Check range support and report size and filename without downloading.
    Probe {
        url: String,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show how SIZE bytes would be split, without any network access.
    Plan {
        /// Total size in bytes.
        size: u64,
        /// Number of parts (default from config).
        #[arg(short = 'n', long, value_name = "N", value_parser = parse_parts)]
        parts: Option<usize>,
    },

    /// Compute SHA-256 of a file (e.g. after download).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },

    /// Print shell completions to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = parse_cli(std::env::args_os())?;

        match cli.command {
            CliCommand::Get {
                url,
                parts,
                output_dir,
                name,
                sha256,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_get(&cfg, url, parts, output_dir, name, sha256).await?
            }
            CliCommand::Probe { url, json } => {
                let cfg = config::load_or_init()?;
                run_probe(&cfg, url, json).await?
            }
            CliCommand::Plan { size, parts } => {
                let cfg = config::load_or_init()?;
                run_plan(size, parts.unwrap_or(cfg.parts))?
            }
            CliCommand::Checksum { path } => run_checksum(&path)?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

/// Parses `args`. `--help` and `--version` print and exit 0 right here; any
/// other parse failure is returned so it exits 1 like other non-pipeline errors.
pub fn parse_cli<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => Err(e.into()),
    }
}

/// Process exit status for a failed command: 2 probe, 3 plan, 4 fetch,
/// 5 merge, 1 anything else.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    let phase = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<DownloadError>())
        .map(DownloadError::phase);
    match phase {
        Some(Phase::Probe) => 2,
        Some(Phase::Plan) => 3,
        Some(Phase::Fetch) => 4,
        Some(Phase::Merge) => 5,
        None => 1,
    }
}

fn parse_parts(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_sha256(s: &str) -> Result<String, String> {
    let s = s.trim();
    if s.len() == 64 && s.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(s.to_ascii_lowercase())
    } else {
        Err("expected 64 hex characters".to_string())
    }
}

#[cfg(test)]
mod tests;
