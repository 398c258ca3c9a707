//! Page geometry shared by the renderers and the exporter.
//!
//! The surface is laid out in CSS pixels (96 per inch) at exactly one page width.
//! Height starts at one page and grows with content; the exporter decides what to do
//! with the extra height.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

const PX_PER_MM: f32 = 96.0 / 25.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    A4,
    Letter,
}

impl PageFormat {
    /// Physical (width, height) in millimetres.
    pub fn size_mm(&self) -> (f32, f32) {
        match self {
            PageFormat::A4 => (210.0, 297.0),
            PageFormat::Letter => (215.9, 279.4),
        }
    }
}

impl FromStr for PageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PageFormat::A4),
            "letter" | "us-letter" => Ok(PageFormat::Letter),
            other => Err(format!("unknown page format '{other}' (expected a4 or letter)")),
        }
    }
}

/// Layout parameters for one résumé page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub format: PageFormat,
    pub width_mm: f32,
    pub height_mm: f32,
    /// Surface width in CSS pixels.
    pub width_px: f32,
    /// Minimum surface height; one full page.
    pub min_height_px: f32,
}

impl PageGeometry {
    pub fn new(format: PageFormat) -> Self {
        let (width_mm, height_mm) = format.size_mm();
        PageGeometry {
            format,
            width_mm,
            height_mm,
            width_px: (width_mm * PX_PER_MM).round(),
            min_height_px: (height_mm * PX_PER_MM).round(),
        }
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::new(PageFormat::A4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_in_css_pixels() {
        let page = PageGeometry::new(PageFormat::A4);
        assert_eq!(page.width_px, 794.0);
        assert_eq!(page.min_height_px, 1123.0);
    }

    #[test]
    fn test_letter_in_css_pixels() {
        let page = PageGeometry::new(PageFormat::Letter);
        assert_eq!(page.width_px, 816.0);
        assert_eq!(page.min_height_px, 1056.0);
    }

    #[test]
    fn test_page_format_parse() {
        assert_eq!("A4".parse::<PageFormat>(), Ok(PageFormat::A4));
        assert_eq!(" letter ".parse::<PageFormat>(), Ok(PageFormat::Letter));
        assert!("legal".parse::<PageFormat>().is_err());
    }
}
