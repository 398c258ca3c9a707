use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::export::raster::{capture, FontStore, RasterImage};
use crate::export::tracker::ExportTracker;
use crate::export::{export_file_name, pdf, ExportArtifact, ExportError, Pagination};
use crate::layout::{PageGeometry, Surface};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// An export backend. The two methods are the two observable phases; `run_export`
/// drives the state machine around them.
///
/// Carried in `AppState` as `Arc<dyn DocumentExporter>`.
#[async_trait]
pub trait DocumentExporter: Send + Sync {
    /// Rasterizes the surface into one or more bands, top to bottom.
    async fn capture(&self, surface: Arc<Surface>) -> Result<Vec<RasterImage>, ExportError>;

    /// Packages captured bands into the output document.
    async fn encode(&self, title: &str, images: Vec<RasterImage>) -> Result<Vec<u8>, ExportError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PdfExporter
// ────────────────────────────────────────────────────────────────────────────

/// resvg capture + printpdf encoding.
pub struct PdfExporter {
    page: PageGeometry,
    scale: f32,
    pagination: Pagination,
    fonts: FontStore,
}

impl PdfExporter {
    pub fn new(
        page: PageGeometry,
        scale: f32,
        pagination: Pagination,
        font_dir: Option<PathBuf>,
    ) -> Self {
        PdfExporter {
            page,
            scale,
            pagination,
            fonts: FontStore::new(font_dir),
        }
    }
}

#[async_trait]
impl DocumentExporter for PdfExporter {
    async fn capture(&self, surface: Arc<Surface>) -> Result<Vec<RasterImage>, ExportError> {
        let fontdb = self.fonts.get().await?;
        let scale = self.scale;
        let pagination = self.pagination;
        let aspect = self.page.height_mm / self.page.width_mm;
        tokio::task::spawn_blocking(move || capture(&surface, scale, pagination, aspect, fontdb))
            .await
            .map_err(|e| ExportError::Task(format!("capture: {e}")))?
    }

    async fn encode(&self, title: &str, images: Vec<RasterImage>) -> Result<Vec<u8>, ExportError> {
        let title = title.to_string();
        let page = self.page;
        let pagination = self.pagination;
        tokio::task::spawn_blocking(move || pdf::encode_pdf(&title, &images, &page, pagination))
            .await
            .map_err(|e| ExportError::Task(format!("encode: {e}")))?
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs one export for a session: capture, encode, optionally save into `save_dir`.
///
/// The tracker ends in `Saved` on success. On any failure it passes through `Failed`
/// back to `Idle` and nothing is written to `save_dir`. If the returned future is
/// dropped before it finishes, the tracker returns to `Idle` as well.
pub async fn run_export(
    exporter: &dyn DocumentExporter,
    tracker: &ExportTracker,
    surface: Arc<Surface>,
    full_name: &str,
    save_dir: Option<&Path>,
) -> Result<ExportArtifact, ExportError> {
    let run = tracker.begin()?;
    let file_name = export_file_name(full_name);

    let result = async {
        let images = exporter.capture(surface).await?;
        run.encoding();
        let pages = images.len();
        let bytes = exporter.encode(&file_name, images).await?;
        if let Some(dir) = save_dir {
            save_atomically(dir, &file_name, &bytes).await?;
        }
        Ok::<_, ExportError>(ExportArtifact {
            file_name: file_name.clone(),
            bytes,
            pages,
        })
    }
    .await;

    match result {
        Ok(artifact) => {
            run.saved(&artifact.file_name);
            info!(
                "Exported {} ({} page(s), {} bytes)",
                artifact.file_name,
                artifact.pages,
                artifact.bytes.len()
            );
            Ok(artifact)
        }
        Err(e) => {
            run.failed(&e.to_string());
            Err(e)
        }
    }
}

/// Writes into a temp file in `dir` and renames it into place.
async fn save_atomically(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    let dir = dir.to_path_buf();
    let target = dir.join(file_name);
    let bytes = bytes.to_vec();
    let path = target.clone();
    tokio::task::spawn_blocking(move || -> Result<(), ExportError> {
        std::fs::create_dir_all(&dir)?;
        let mut tmp = NamedTempFile::new_in(&dir)?;
        std::io::Write::write_all(&mut tmp, &bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| ExportError::Save(e.error))?;
        Ok(())
    })
    .await
    .map_err(|e| ExportError::Task(format!("save: {e}")))??;
    debug!("Saved export to {}", target.display());
    Ok(target)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
