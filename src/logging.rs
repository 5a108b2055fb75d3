//! Tracing setup. The TUI owns the terminal, so interactive runs log to a file;
//! `--text` / `--json` runs log to stderr.

use anyhow::{Context, Result};
use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// `<cache dir>/pantrypal/pantrypal.log`, falling back to the working directory.
pub fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .map(|d| d.join("pantrypal"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pantrypal.log")
}

fn build_filter(level: &str) -> EnvFilter {
    env::var("RUST_LOG")
        .map_or_else(|_| EnvFilter::new(level), |directive| EnvFilter::new(&directive))
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create log directory {}", parent.display()))?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Install the global subscriber.
pub fn init(level: &str, target: &LogTarget) -> Result<()> {
    let registry = tracing_subscriber::registry().with(build_filter(level));
    match target {
        LogTarget::Stderr => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
            .context("install stderr logger")?,
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            registry
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .context("install file logger")?
        }
    }
    Ok(())
}
