use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::export::Pagination;
use crate::layout::PageFormat;

/// Application configuration loaded from environment variables.
/// Every variable is optional; a present but invalid value fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub page_format: PageFormat,
    /// Supersampling factor for export capture.
    pub export_scale: f32,
    pub export_pagination: Pagination,
    /// When set, successful exports are also written here.
    pub export_dir: Option<PathBuf>,
    /// Extra fonts for the export rasterizer.
    pub font_dir: Option<PathBuf>,
    /// Sessions untouched for this long are discarded.
    pub session_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            page_format: PageFormat::A4,
            export_scale: 2.0,
            export_pagination: Pagination::Continuous,
            export_dir: None,
            font_dir: None,
            session_ttl: Duration::from_secs(60 * 60),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(v) => v.parse::<u16>().context("PORT must be a valid port number")?,
            None => defaults.port,
        };
        let page_format = match lookup("PAGE_FORMAT") {
            Some(v) => v
                .parse::<PageFormat>()
                .map_err(anyhow::Error::msg)
                .context("PAGE_FORMAT is invalid")?,
            None => defaults.page_format,
        };
        let export_scale = match lookup("EXPORT_SCALE") {
            Some(v) => parse_scale(&v)?,
            None => defaults.export_scale,
        };
        let export_pagination = match lookup("EXPORT_PAGINATION") {
            Some(v) => v
                .parse::<Pagination>()
                .map_err(anyhow::Error::msg)
                .context("EXPORT_PAGINATION is invalid")?,
            None => defaults.export_pagination,
        };
        let session_ttl = match lookup("SESSION_TTL_SECS") {
            Some(v) => parse_ttl(&v)?,
            None => defaults.session_ttl,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            page_format,
            export_scale,
            export_pagination,
            export_dir: optional_path(lookup("EXPORT_DIR")),
            font_dir: optional_path(lookup("FONT_DIR")),
            session_ttl,
        })
    }
}

fn parse_scale(raw: &str) -> Result<f32> {
    let scale = raw
        .trim()
        .parse::<f32>()
        .with_context(|| format!("EXPORT_SCALE '{raw}' is not a number"))?;
    if !(scale > 0.0 && scale <= 8.0) {
        bail!("EXPORT_SCALE must be in (0, 8], got {scale}");
    }
    Ok(scale)
}

fn parse_ttl(raw: &str) -> Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("SESSION_TTL_SECS '{raw}' is not a whole number"))?;
    if secs == 0 {
        bail!("SESSION_TTL_SECS must be positive");
    }
    Ok(Duration::from_secs(secs))
}

fn optional_path(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
