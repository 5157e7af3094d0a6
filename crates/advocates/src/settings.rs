//! Environment fallbacks for command-line settings.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub fn db_path(arg: Option<PathBuf>) -> PathBuf {
    if let Some(path) = arg {
        return path;
    }
    if let Ok(path) = std::env::var("ADVOCATES_DB") {
        return PathBuf::from(path);
    }
    PathBuf::from("advocates.db")
}

pub fn bind_addr(arg: Option<SocketAddr>) -> Result<SocketAddr> {
    if let Some(addr) = arg {
        return Ok(addr);
    }
    let raw = std::env::var("ADVOCATES_BIND")
        .unwrap_or_else(|_| advocates_api::DEFAULT_BIND.to_string());
    raw.parse()
        .with_context(|| format!("Invalid bind address {raw:?}"))
}

pub fn api_url(arg: Option<String>) -> String {
    if let Some(url) = arg {
        return url;
    }
    if let Ok(url) = std::env::var("ADVOCATES_API_URL") {
        return url;
    }
    advocates_ui::DEFAULT_API_URL.to_string()
}
