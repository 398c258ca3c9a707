//! The ten résumé arrangements.
//!
//! Every arrangement is a pure function of `(document, accent, page)` that returns a
//! `Surface` exactly one page wide. They differ only in composition; none of them
//! alters, filters or reorders the document. Empty strings and empty lists render as
//! nothing.
//!
//! Selection is `template_id % 10`, with 0 mapping to the tenth arrangement.

mod bold;
mod clean;
mod creative;
mod elegant;
mod executive;
mod grid;
mod header_band;
mod minimal;
mod sidebar;
mod timeline;

use serde::{Deserialize, Serialize};

use crate::document::ResumeDocument;
use crate::layout::flow::{Align, Column, Marker, TextStyle};
use crate::layout::page::PageGeometry;
use crate::layout::surface::{Color, Element, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arrangement {
    Minimal,
    TwoColumn,
    HeaderBand,
    CleanProfessional,
    ModernGrid,
    Executive,
    Creative,
    Timeline,
    Elegant,
    BoldModern,
}

impl Arrangement {
    #[cfg(test)]
    pub const ALL: [Arrangement; 10] = [
        Arrangement::Minimal,
        Arrangement::TwoColumn,
        Arrangement::HeaderBand,
        Arrangement::CleanProfessional,
        Arrangement::ModernGrid,
        Arrangement::Executive,
        Arrangement::Creative,
        Arrangement::Timeline,
        Arrangement::Elegant,
        Arrangement::BoldModern,
    ];

    /// Cyclic assignment over groups of ten catalog ids.
    pub fn from_template_id(id: u32) -> Self {
        match id % 10 {
            1 => Arrangement::Minimal,
            2 => Arrangement::TwoColumn,
            3 => Arrangement::HeaderBand,
            4 => Arrangement::CleanProfessional,
            5 => Arrangement::ModernGrid,
            6 => Arrangement::Executive,
            7 => Arrangement::Creative,
            8 => Arrangement::Timeline,
            9 => Arrangement::Elegant,
            _ => Arrangement::BoldModern,
        }
    }

    /// 1-based arrangement number, 1..=10.
    pub fn number(&self) -> u8 {
        match self {
            Arrangement::Minimal => 1,
            Arrangement::TwoColumn => 2,
            Arrangement::HeaderBand => 3,
            Arrangement::CleanProfessional => 4,
            Arrangement::ModernGrid => 5,
            Arrangement::Executive => 6,
            Arrangement::Creative => 7,
            Arrangement::Timeline => 8,
            Arrangement::Elegant => 9,
            Arrangement::BoldModern => 10,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Arrangement::Minimal => "Minimal",
            Arrangement::TwoColumn => "Two Column",
            Arrangement::HeaderBand => "Modern Header",
            Arrangement::CleanProfessional => "Clean Professional",
            Arrangement::ModernGrid => "Modern Grid",
            Arrangement::Executive => "Executive",
            Arrangement::Creative => "Creative",
            Arrangement::Timeline => "Timeline",
            Arrangement::Elegant => "Elegant",
            Arrangement::BoldModern => "Bold Modern",
        }
    }

    pub fn render(&self, doc: &ResumeDocument, accent: Color, page: &PageGeometry) -> Surface {
        let mut surface = Surface::new(page.width_px, page.min_height_px);
        let bottom = match self {
            Arrangement::Minimal => minimal::render(doc, accent, &mut surface),
            Arrangement::TwoColumn => sidebar::render(doc, accent, &mut surface),
            Arrangement::HeaderBand => header_band::render(doc, accent, &mut surface),
            Arrangement::CleanProfessional => clean::render(doc, accent, &mut surface),
            Arrangement::ModernGrid => grid::render(doc, accent, &mut surface),
            Arrangement::Executive => executive::render(doc, accent, &mut surface),
            Arrangement::Creative => creative::render(doc, accent, &mut surface),
            Arrangement::Timeline => timeline::render(doc, accent, &mut surface),
            Arrangement::Elegant => elegant::render(doc, accent, &mut surface),
            Arrangement::BoldModern => bold::render(doc, accent, &mut surface),
        };
        surface.fit_height(bottom);
        surface
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared pieces
// ────────────────────────────────────────────────────────────────────────────

/// Outer padding used by most arrangements.
const MARGIN: f32 = 48.0;

fn page_column(surface: &Surface, padding: f32, top: f32) -> Column {
    Column::new(padding, surface.width - padding * 2.0, top)
}

/// Joins the non-blank parts with `sep`.
fn joined(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
}

fn contact_line(doc: &ResumeDocument, sep: &str) -> String {
    doc.contact_items().join(sep)
}

/// Items laid out left-to-right in `cols` columns, row by row.
fn marked_grid(
    col: &mut Column,
    surface: &mut Surface,
    items: &[String],
    cols: usize,
    gap: f32,
    style: &TextStyle,
    marker: Marker,
) {
    for (row_index, row) in items.chunks(cols.max(1)).enumerate() {
        if row_index > 0 {
            col.gap(gap);
        }
        let mut cells = col.split(cols, gap);
        for (cell, item) in cells.iter_mut().zip(row) {
            cell.marked(surface, item, style, marker);
        }
        col.join(&cells);
    }
}

/// Inline-block heading on a filled pill, centered in the column.
fn pill_heading(
    col: &mut Column,
    surface: &mut Surface,
    text: &str,
    style: &TextStyle,
    fill: Color,
    pad_x: f32,
    pad_y: f32,
) {
    let label = if style.uppercase {
        text.to_uppercase()
    } else {
        text.to_string()
    };
    let width = (style.font().width_of(&label) + pad_x * 2.0).min(col.width);
    let x = col.x + (col.width - width) / 2.0;
    let mut inner = Column::new(x + pad_x, (width - pad_x * 2.0).max(1.0), col.y + pad_y);
    let height = inner.measure(&label, style).max(style.line_px()) + pad_y * 2.0;
    surface.push(Element::Rect {
        x,
        y: col.y,
        width,
        height,
        radius: 0.0,
        fill,
    });
    inner.text(surface, &label, &style.align(Align::Center));
    col.y += height;
}

/// Paints a full-height band behind everything at `mark`, once the final height is known.
fn backfill_band(surface: &mut Surface, mark: usize, x: f32, width: f32, bottom: f32, fill: Color) {
    let height = bottom.max(surface.height);
    surface.insert_at(
        mark,
        Element::Rect {
            x,
            y: 0.0,
            width,
            height,
            radius: 0.0,
            fill,
        },
    );
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::model::{EducationEntry, ExperienceEntry};
    use crate::layout::page::PageFormat;

    const ACCENT: &str = "#2563eb";

    fn marked_document() -> ResumeDocument {
        ResumeDocument {
            full_name: "XNAME".to_string(),
            title: "XTITLE".to_string(),
            email: "XEMAIL".to_string(),
            phone: "XPHONE".to_string(),
            location: "XLOCATION".to_string(),
            summary: "XSUMMARY".to_string(),
            experience: (0..3)
                .map(|i| ExperienceEntry {
                    title: format!("XJOB{i}"),
                    company: format!("XCOMPANY{i}"),
                    period: format!("XPERIOD{i}"),
                    description: format!("XDESC{i}"),
                })
                .collect(),
            education: (0..2)
                .map(|i| EducationEntry {
                    degree: format!("XDEGREE{i}"),
                    institution: format!("XSCHOOL{i}"),
                    year: format!("XYEAR{i}"),
                })
                .collect(),
            skills: (0..5).map(|i| format!("XSKILL{i}")).collect(),
        }
    }

    fn all_text(surface: &Surface) -> String {
        surface.text_content().join("\n")
    }

    fn uses_color(surface: &Surface, color: Color) -> bool {
        surface.elements.iter().any(|e| match e {
            Element::Rect { fill, .. } | Element::Circle { fill, .. } => {
                fill.to_hex() == color.to_hex()
            }
            Element::Polygon { fill, .. } => fill.to_hex() == color.to_hex(),
            Element::Frame { stroke, .. } => stroke.to_hex() == color.to_hex(),
            Element::Text(run) => run.color.to_hex() == color.to_hex(),
        })
    }

    fn assert_in_order(text: &str, markers: &[String], arrangement: Arrangement) {
        let mut last = 0;
        for marker in markers {
            let pos = text[last..]
                .find(marker.as_str())
                .map(|p| p + last)
                .unwrap_or_else(|| panic!("{arrangement:?}: '{marker}' missing or out of order"));
            last = pos + marker.len();
        }
    }

    #[test]
    fn test_selection_by_id_mod_ten() {
        assert_eq!(Arrangement::from_template_id(1), Arrangement::Minimal);
        assert_eq!(Arrangement::from_template_id(11), Arrangement::Minimal);
        assert_eq!(Arrangement::from_template_id(9), Arrangement::Elegant);
        assert_eq!(Arrangement::from_template_id(10), Arrangement::BoldModern);
        assert_eq!(Arrangement::from_template_id(20), Arrangement::BoldModern);
        assert_eq!(Arrangement::from_template_id(20).number(), 10);
    }

    #[test]
    fn test_selection_is_periodic() {
        for id in 1..=200u32 {
            assert_eq!(
                Arrangement::from_template_id(id),
                Arrangement::from_template_id(id + 10)
            );
            assert_eq!(
                Arrangement::from_template_id(id).number() as u32 % 10,
                id % 10
            );
        }
    }

    #[test]
    fn test_numbers_cover_one_to_ten() {
        let numbers: Vec<u8> = Arrangement::ALL.iter().map(Arrangement::number).collect();
        assert_eq!(numbers, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_every_arrangement_renders_blank_document() {
        let page = PageGeometry::default();
        let doc = ResumeDocument::blank();
        for arrangement in Arrangement::ALL {
            let surface = arrangement.render(&doc, Color::accent(ACCENT), &page);
            assert_eq!(surface.width, page.width_px, "{arrangement:?}");
            assert!(surface.height >= page.min_height_px, "{arrangement:?}");
            for run in surface.text_runs() {
                assert!(!run.content.starts_with('X'), "{arrangement:?} invented content");
            }
        }
    }

    #[test]
    fn test_every_arrangement_renders_all_content_in_order() {
        let page = PageGeometry::default();
        let doc = marked_document();
        for arrangement in Arrangement::ALL {
            let surface = arrangement.render(&doc, Color::accent(ACCENT), &page);
            let text = all_text(&surface);
            for scalar in ["XNAME", "XTITLE", "XEMAIL", "XPHONE", "XLOCATION", "XSUMMARY"] {
                assert!(text.contains(scalar), "{arrangement:?} lost {scalar}");
            }
            let jobs: Vec<String> = (0..3).map(|i| format!("XJOB{i}")).collect();
            let descs: Vec<String> = (0..3).map(|i| format!("XDESC{i}")).collect();
            let companies: Vec<String> = (0..3).map(|i| format!("XCOMPANY{i}")).collect();
            let periods: Vec<String> = (0..3).map(|i| format!("XPERIOD{i}")).collect();
            let degrees: Vec<String> = (0..2).map(|i| format!("XDEGREE{i}")).collect();
            let schools: Vec<String> = (0..2).map(|i| format!("XSCHOOL{i}")).collect();
            let years: Vec<String> = (0..2).map(|i| format!("XYEAR{i}")).collect();
            let skills: Vec<String> = (0..5).map(|i| format!("XSKILL{i}")).collect();
            for list in [
                &jobs, &descs, &companies, &periods, &degrees, &schools, &years, &skills,
            ] {
                assert_in_order(&text, list, arrangement);
            }
        }
    }

    #[test]
    fn test_every_arrangement_applies_accent() {
        let page = PageGeometry::default();
        let accent = Color::accent("#b91c1c");
        for arrangement in Arrangement::ALL {
            let surface = arrangement.render(&ResumeDocument::placeholder(), accent, &page);
            assert!(uses_color(&surface, accent), "{arrangement:?} ignores accent");
        }
    }

    #[test]
    fn test_every_arrangement_keeps_text_inside_page() {
        let page = PageGeometry::new(PageFormat::Letter);
        let mut doc = marked_document();
        doc.summary = "word ".repeat(1200);
        doc.experience[1].description = "averyveryverylongunbreakabletoken".repeat(8);
        for arrangement in Arrangement::ALL {
            let surface = arrangement.render(&doc, Color::accent(ACCENT), &page);
            assert_eq!(surface.width, page.width_px);
            assert!(surface.height > page.min_height_px, "{arrangement:?} did not grow");
            for run in surface.text_runs() {
                assert!(run.x >= 0.0 && run.x <= page.width_px, "{arrangement:?}");
                assert!(run.baseline <= surface.height, "{arrangement:?}");
            }
        }
    }

    #[test]
    fn test_long_skill_is_never_truncated() {
        let page = PageGeometry::default();
        let skill = "Distributed systems design and performance engineering for databases";
        let mut doc = ResumeDocument::blank();
        doc.skills = vec![skill.to_string(), "Go".to_string()];
        for arrangement in Arrangement::ALL {
            let surface = arrangement.render(&doc, Color::accent(ACCENT), &page);
            let words: Vec<String> = surface
                .text_content()
                .join(" ")
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect();
            let expected: Vec<String> = skill
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect();
            let start = words
                .iter()
                .position(|w| w == &expected[0])
                .unwrap_or_else(|| panic!("{arrangement:?} lost the skill"));
            assert_eq!(
                words[start..start + expected.len()],
                expected[..],
                "{arrangement:?} cut the skill"
            );
            assert!(words.contains(&"go".to_string()), "{arrangement:?} lost the next skill");
        }
    }

    #[test]
    fn test_minimal_heading_uses_accent() {
        let accent = Color::accent(ACCENT);
        let mut doc = ResumeDocument::placeholder();
        doc.full_name = "Ada Lovelace".to_string();
        let surface = Arrangement::Minimal.render(&doc, accent, &PageGeometry::default());
        let name = surface
            .text_runs()
            .find(|r| r.content == "Ada Lovelace")
            .expect("name rendered");
        assert_eq!(name.color.to_hex(), "#2563eb");
    }

    #[test]
    fn test_render_is_deterministic() {
        let page = PageGeometry::default();
        let doc = ResumeDocument::placeholder();
        for arrangement in Arrangement::ALL {
            let a = arrangement.render(&doc, Color::accent(ACCENT), &page).to_svg();
            let b = arrangement.render(&doc, Color::accent(ACCENT), &page).to_svg();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_joined_skips_blank_parts() {
        assert_eq!(joined(&["Acme", "", "2020"], " | "), "Acme | 2020");
        assert_eq!(joined(&["", " "], " | "), "");
    }
}
