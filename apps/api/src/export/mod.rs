//! Export Pipeline: rendered surface → raster capture → PDF → download (and optional save).
//!
//! # Phases
//! `Idle → Capturing → Encoding → Saved` on success, `Idle → Capturing → Failed → Idle` on any
//! failure. `ExportTracker` owns the state per session and refuses a second export while one is
//! in flight.
//!
//! # Backends
//! `AppState` holds an `Arc<dyn DocumentExporter>`. `PdfExporter` is the production backend:
//! `resvg` rasterizes the surface's SVG at the supersampling scale, `printpdf` embeds the PNG.
//! Its font database is loaded on first use, off the interactive path.

pub mod pdf;
pub mod pipeline;
pub mod raster;
pub mod tracker;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use pipeline::{run_export, DocumentExporter, PdfExporter};
pub use tracker::{ExportState, ExportTracker};

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("an export is already in progress")]
    Busy,

    #[error("surface has no area ({width}x{height})")]
    EmptySurface { width: f32, height: f32 },

    #[error("could not parse rendered SVG: {0}")]
    Svg(String),

    #[error("rasterization failed: {0}")]
    Raster(String),

    #[error("PDF encoding failed: {0}")]
    Encode(String),

    #[error("could not save export: {0}")]
    Save(#[from] std::io::Error),

    #[error("export task failed: {0}")]
    Task(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Settings
// ────────────────────────────────────────────────────────────────────────────

/// How a surface taller than one page is laid into the PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pagination {
    /// One page, as tall as the content.
    Continuous,
    /// Fixed-size pages; the capture is cut into page-height bands.
    Paged,
}

impl FromStr for Pagination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continuous" => Ok(Pagination::Continuous),
            "paged" => Ok(Pagination::Paged),
            other => Err(format!(
                "unknown pagination '{other}' (expected continuous or paged)"
            )),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// A finished export, ready to be sent to the client.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub pages: usize,
}

/// `CV-<name>.pdf`, with every whitespace run in the name replaced by a single `-`.
/// Path separators and control characters are replaced too so the name is always a
/// single file-system component.
pub fn export_file_name(full_name: &str) -> String {
    let mut stem = String::with_capacity(full_name.len());
    let mut in_space = false;
    for c in full_name.chars() {
        if c.is_whitespace() {
            if !in_space {
                stem.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c == '/' || c == '\\' || c.is_control() {
            stem.push('-');
        } else {
            stem.push(c);
        }
    }
    format!("CV-{stem}.pdf")
}

/// `Content-Disposition` value with an ASCII fallback and an RFC 5987 UTF-8 name.
pub fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let mut encoded = String::with_capacity(file_name.len() * 3);
    for byte in file_name.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
