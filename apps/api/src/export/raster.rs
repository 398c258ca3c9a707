//! Capture: surface SVG → `usvg` tree → `tiny-skia` pixmap → PNG bands.
//!
//! Everything here is synchronous and CPU-bound; callers run it inside `spawn_blocking`.

use std::path::PathBuf;
use std::sync::Arc;

use resvg::tiny_skia::{self, IntRect, Pixmap, Transform};
use resvg::usvg::{self, fontdb};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::export::{ExportError, Pagination};
use crate::layout::Surface;

/// Largest pixmap edge we are willing to allocate.
const MAX_EDGE_PX: u32 = 32_000;

/// One PNG-encoded slice of the capture, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Font database
// ────────────────────────────────────────────────────────────────────────────

/// System fonts plus an optional extra directory, loaded once on first use.
pub struct FontStore {
    font_dir: Option<PathBuf>,
    db: OnceCell<Arc<fontdb::Database>>,
}

impl FontStore {
    pub fn new(font_dir: Option<PathBuf>) -> Self {
        FontStore {
            font_dir,
            db: OnceCell::new(),
        }
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.db.initialized()
    }

    pub async fn get(&self) -> Result<Arc<fontdb::Database>, ExportError> {
        self.db
            .get_or_try_init(|| async {
                let font_dir = self.font_dir.clone();
                tokio::task::spawn_blocking(move || Arc::new(load_fonts(font_dir)))
                    .await
                    .map_err(|e| ExportError::Task(format!("font loading: {e}")))
            })
            .await
            .cloned()
    }
}

fn load_fonts(font_dir: Option<PathBuf>) -> fontdb::Database {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    if let Some(dir) = font_dir {
        db.load_fonts_dir(&dir);
        debug!("Loaded fonts from {}", dir.display());
    }
    info!("Export font database ready ({} faces)", db.len());
    db
}

// ────────────────────────────────────────────────────────────────────────────
// Capture
// ────────────────────────────────────────────────────────────────────────────

/// Rasterizes the surface at `scale` and slices it per `pagination`.
///
/// `page_aspect` is page height / page width; in paged mode every band is
/// `width * page_aspect` pixels tall except the last, which holds the remainder.
pub fn capture(
    surface: &Surface,
    scale: f32,
    pagination: Pagination,
    page_aspect: f32,
    fontdb: Arc<fontdb::Database>,
) -> Result<Vec<RasterImage>, ExportError> {
    let pixmap = rasterize(surface, scale, fontdb)?;
    match pagination {
        Pagination::Continuous => Ok(vec![encode(&pixmap)?]),
        Pagination::Paged => {
            let band = ((pixmap.width() as f32 * page_aspect).round() as u32).max(1);
            band_rows(pixmap.height(), band)
                .into_iter()
                .map(|(y, h)| {
                    let rect = IntRect::from_xywh(0, y as i32, pixmap.width(), h)
                        .ok_or_else(|| ExportError::Raster(format!("bad band at y={y}")))?;
                    let slice = pixmap
                        .clone_rect(rect)
                        .ok_or_else(|| ExportError::Raster(format!("band at y={y} out of bounds")))?;
                    encode(&slice)
                })
                .collect()
        }
    }
}

/// Renders the surface onto a white pixmap `scale` times its CSS-pixel size.
pub fn rasterize(
    surface: &Surface,
    scale: f32,
    fontdb: Arc<fontdb::Database>,
) -> Result<Pixmap, ExportError> {
    if !(surface.width > 0.0 && surface.height > 0.0) {
        return Err(ExportError::EmptySurface {
            width: surface.width,
            height: surface.height,
        });
    }
    let width = (surface.width * scale).ceil() as u32;
    let height = (surface.height * scale).ceil() as u32;
    if width == 0 || height == 0 || width > MAX_EDGE_PX || height > MAX_EDGE_PX {
        return Err(ExportError::Raster(format!(
            "capture size {width}x{height} outside 1..={MAX_EDGE_PX}"
        )));
    }

    let mut options = usvg::Options::default();
    options.fontdb = fontdb;
    let tree = usvg::Tree::from_str(&surface.to_svg(), &options)
        .map_err(|e| ExportError::Svg(e.to_string()))?;

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| ExportError::Raster(format!("cannot allocate {width}x{height} pixmap")))?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    debug!("Rasterized surface to {width}x{height}px at {scale}x");
    Ok(pixmap)
}

fn encode(pixmap: &Pixmap) -> Result<RasterImage, ExportError> {
    let png = pixmap
        .encode_png()
        .map_err(|e| ExportError::Raster(format!("PNG encoding: {e}")))?;
    Ok(RasterImage {
        png,
        width: pixmap.width(),
        height: pixmap.height(),
    })
}

/// `(top, height)` of each band when `total` rows are cut into `band`-row pieces.
pub fn band_rows(total: u32, band: u32) -> Vec<(u32, u32)> {
    let band = band.max(1);
    (0..total)
        .step_by(band as usize)
        .map(|top| (top, band.min(total - top)))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::surface::Element;
    use crate::layout::Color;

    fn empty_db() -> Arc<fontdb::Database> {
        Arc::new(fontdb::Database::new())
    }

    fn block_surface(width: f32, height: f32) -> Surface {
        let mut surface = Surface::new(width, height);
        surface.push(Element::Rect {
            x: 0.0,
            y: 0.0,
            width: width / 2.0,
            height: height / 2.0,
            radius: 0.0,
            fill: Color::rgb(0, 0, 0),
        });
        surface
    }

    #[test]
    fn test_band_rows_cover_total() {
        assert_eq!(band_rows(10, 4), vec![(0, 4), (4, 4), (8, 2)]);
        assert_eq!(band_rows(8, 4), vec![(0, 4), (4, 4)]);
        assert_eq!(band_rows(3, 10), vec![(0, 3)]);
        assert!(band_rows(0, 10).is_empty());
    }

    #[test]
    fn test_rasterize_scales_and_paints() {
        let pixmap = rasterize(&block_surface(40.0, 20.0), 2.0, empty_db()).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (80, 40));
        let top_left = pixmap.pixel(2, 2).unwrap();
        let bottom_right = pixmap.pixel(78, 38).unwrap();
        assert_eq!((top_left.red(), top_left.alpha()), (0, 255));
        assert_eq!(bottom_right.red(), 255);
    }

    #[test]
    fn test_rasterize_rejects_empty_surface() {
        let err = rasterize(&Surface::new(0.0, 100.0), 2.0, empty_db()).unwrap_err();
        assert!(matches!(err, ExportError::EmptySurface { .. }));
    }

    #[test]
    fn test_continuous_capture_is_one_image() {
        let images = capture(
            &block_surface(50.0, 300.0),
            1.0,
            Pagination::Continuous,
            1.0,
            empty_db(),
        )
        .unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!((images[0].width, images[0].height), (50, 300));
        assert!(images[0].png.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_paged_capture_slices_into_bands() {
        let images = capture(
            &block_surface(50.0, 120.0),
            1.0,
            Pagination::Paged,
            1.0,
            empty_db(),
        )
        .unwrap();
        let heights: Vec<u32> = images.iter().map(|i| i.height).collect();
        assert_eq!(heights, vec![50, 50, 20]);
        assert!(images.iter().all(|i| i.width == 50));
    }

    #[tokio::test]
    async fn test_font_store_loads_once() {
        let store = FontStore::new(None);
        assert!(!store.is_loaded());
        let a = store.get().await.unwrap();
        let b = store.get().await.unwrap();
        assert!(store.is_loaded());
        assert!(Arc::ptr_eq(&a, &b));
    }
}
