//! Encode: captured bands → one `printpdf` page each.

use printpdf::xobject::{XObject, XObjectTransform};
use printpdf::{Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, XObjectId};
use tracing::{debug, warn};

use crate::export::raster::RasterImage;
use crate::export::{ExportError, Pagination};
use crate::layout::PageGeometry;

/// Placement of one band on its page, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePlacement {
    pub page_height_mm: f32,
    /// Height the image occupies, measured down from the top edge.
    pub image_height_mm: f32,
}

/// Page and image heights for an image `px_w` × `px_h` spanning the full page width.
///
/// Continuous pages are exactly as tall as the image. Paged output keeps the fixed page
/// height and anchors a shorter final band at the top.
pub fn place(page: &PageGeometry, pagination: Pagination, px_w: u32, px_h: u32) -> PagePlacement {
    let image_height_mm = page.width_mm * px_h as f32 / px_w.max(1) as f32;
    match pagination {
        Pagination::Continuous => PagePlacement {
            page_height_mm: image_height_mm,
            image_height_mm,
        },
        Pagination::Paged => PagePlacement {
            page_height_mm: page.height_mm,
            image_height_mm: image_height_mm.min(page.height_mm),
        },
    }
}

/// Builds a PDF with one page per image, each image at the page's full width.
pub fn encode_pdf(
    title: &str,
    images: &[RasterImage],
    page: &PageGeometry,
    pagination: Pagination,
) -> Result<Vec<u8>, ExportError> {
    if images.is_empty() {
        return Err(ExportError::Encode("nothing was captured".to_string()));
    }

    let mut doc = PdfDocument::new(title);
    let mut warnings = Vec::new();

    for (index, image) in images.iter().enumerate() {
        let raw = printpdf::image::RawImage::decode_from_bytes(&image.png, &mut warnings)
            .map_err(|e| ExportError::Encode(format!("page {}: {e}", index + 1)))?;
        let id = XObjectId::new();
        doc.resources.xobjects.map.insert(id.clone(), XObject::Image(raw));

        let placement = place(page, pagination, image.width, image.height);
        let page_height_pt: Pt = Mm(placement.page_height_mm).into_pt();
        let image_height_pt: Pt = Mm(placement.image_height_mm).into_pt();
        let width_pt: Pt = Mm(page.width_mm).into_pt();

        // PDF origin is bottom-left; at 72 dpi one image pixel is one point before scaling
        let transform = XObjectTransform {
            translate_x: Some(Pt(0.0)),
            translate_y: Some(Pt(page_height_pt.0 - image_height_pt.0)),
            scale_x: Some(width_pt.0 / image.width as f32),
            scale_y: Some(image_height_pt.0 / image.height as f32),
            rotate: None,
            dpi: Some(72.0),
        };
        let ops = vec![Op::UseXobject { id, transform }];
        doc.pages.push(PdfPage::new(
            Mm(page.width_mm),
            Mm(placement.page_height_mm),
            ops,
        ));
    }

    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        warn!("PDF encoder reported {} warning(s)", warnings.len());
    }
    debug!("Encoded {} page(s), {} bytes", images.len(), bytes.len());
    Ok(bytes)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PageFormat;

    #[test]
    fn test_continuous_height_follows_aspect_ratio() {
        let page = PageGeometry::new(PageFormat::A4);
        // 1588 x 4492 is a 2x capture of a 794 x 2246 surface
        let p = place(&page, Pagination::Continuous, 1588, 4492);
        assert!((p.page_height_mm - 210.0 * 4492.0 / 1588.0).abs() < 1e-3);
        assert_eq!(p.page_height_mm, p.image_height_mm);
    }

    #[test]
    fn test_continuous_single_page_surface_is_a4() {
        let page = PageGeometry::new(PageFormat::A4);
        let p = place(&page, Pagination::Continuous, 1588, 2246);
        assert!((p.page_height_mm - 297.0).abs() < 0.5);
    }

    #[test]
    fn test_paged_keeps_page_height_and_short_last_band() {
        let page = PageGeometry::new(PageFormat::Letter);
        let full = place(&page, Pagination::Paged, 1632, 2112);
        assert_eq!(full.page_height_mm, 279.4);
        assert!((full.image_height_mm - 279.4).abs() < 0.1);

        let last = place(&page, Pagination::Paged, 1632, 500);
        assert_eq!(last.page_height_mm, 279.4);
        assert!(last.image_height_mm < 100.0);
    }

    #[test]
    fn test_encode_rejects_empty_capture() {
        let err = encode_pdf("CV", &[], &PageGeometry::default(), Pagination::Continuous)
            .unwrap_err();
        assert!(matches!(err, ExportError::Encode(_)));
    }

    #[test]
    fn test_encode_rejects_corrupt_png() {
        let image = RasterImage {
            png: vec![1, 2, 3],
            width: 10,
            height: 10,
        };
        let err = encode_pdf("CV", &[image], &PageGeometry::default(), Pagination::Continuous)
            .unwrap_err();
        assert!(matches!(err, ExportError::Encode(_)));
    }
}
