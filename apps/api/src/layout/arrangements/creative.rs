use crate::document::ResumeDocument;
use crate::layout::flow::{Align, BoxStyle, ChipStyle, TextStyle};
use crate::layout::font_metrics::FontWeight;
use crate::layout::surface::{Color, Element, Surface};

use super::{contact_line, joined, page_column, pill_heading, MARGIN};

const BAND_MIN: f32 = 256.0;
const SLANT: f32 = 32.0;

/// Accent hero band with a slanted lower edge, centered identity, pill section
/// headings and accent-edged experience cards.
pub(super) fn render(doc: &ResumeDocument, accent: Color, surface: &mut Surface) -> f32 {
    let width = surface.width;
    let mark = surface.mark();
    let white = Color::WHITE;
    let center = Align::Center;

    // identity block, vertically centered in the band
    let name = TextStyle::new(60.0, white).bold().align(center);
    let title = TextStyle::new(30.0, white).weight(FontWeight::Light).align(center);
    let probe = page_column(surface, MARGIN, 0.0);
    let name_h = probe.measure(&doc.full_name, &name);
    let title_h = probe.measure(&doc.title, &title);
    let gap = if name_h > 0.0 && title_h > 0.0 { 12.0 } else { 0.0 };
    let block = name_h + gap + title_h;
    let band_height = BAND_MIN.max(block + MARGIN * 2.0);

    let mut hero = page_column(surface, MARGIN, (band_height - block) / 2.0);
    hero.text_then(surface, &doc.full_name, &name, gap);
    hero.text(surface, &doc.title, &title);

    surface.insert_at(
        mark,
        Element::Rect {
            x: 0.0,
            y: 0.0,
            width,
            height: band_height,
            radius: 0.0,
            fill: accent,
        },
    );
    // white wedge cutting the bottom edge: high on the left, flat on the right
    surface.push(Element::Polygon {
        points: vec![
            (0.0, band_height - SLANT),
            (width, band_height - SLANT / 2.0),
            (width, band_height),
            (0.0, band_height),
        ],
        fill: white,
    });

    let mut col = page_column(surface, MARGIN, band_height + MARGIN);
    let small = TextStyle::new(14.0, Color::GRAY_600).align(center);
    let body = TextStyle::new(16.0, Color::GRAY_700);
    let pill = TextStyle::new(24.0, white).bold().uppercase();
    let pill_small = TextStyle::new(20.0, white).bold().uppercase();

    col.text_then(surface, &contact_line(doc, " • "), &small, 32.0);

    pill_heading(&mut col, surface, "About Me", &pill, accent, 24.0, 8.0);
    col.gap(16.0);
    col.text(surface, &doc.summary, &body.relaxed().align(center));
    col.gap(32.0);

    pill_heading(&mut col, surface, "Experience", &pill, accent, 24.0, 8.0);
    col.gap(24.0);
    for exp in &doc.experience {
        col.boxed(
            surface,
            &BoxStyle::edged(accent, 4.0, 16.0).padding(16.0),
            |inner, surface| {
                inner.text(surface, &exp.title, &TextStyle::new(18.0, Color::GRAY_900).bold());
                inner.text(
                    surface,
                    &joined(&[&exp.company, &exp.period], " | "),
                    &body.color(Color::GRAY_600),
                );
                if !exp.description.trim().is_empty() {
                    inner.gap(8.0);
                    inner.text(surface, &exp.description, &body);
                }
            },
        );
        col.gap(24.0);
    }
    col.gap(8.0);

    let mut halves = col.split(2, 32.0);
    let education = &mut halves[0];
    pill_heading(education, surface, "Education", &pill_small, accent, 16.0, 4.0);
    education.gap(16.0);
    for edu in &doc.education {
        education.text(surface, &edu.degree, &TextStyle::new(16.0, Color::GRAY_900).bold().align(center));
        education.text(surface, &edu.institution, &body.color(Color::GRAY_600).align(center));
        education.text(surface, &edu.year, &body.color(Color::GRAY_500).align(center));
        education.gap(12.0);
    }

    let skills = &mut halves[1];
    pill_heading(skills, surface, "Skills", &pill_small, accent, 16.0, 4.0);
    skills.gap(16.0);
    skills.chips(
        surface,
        &doc.skills,
        &ChipStyle {
            text: TextStyle::new(14.0, white),
            fill: Some(accent),
            border: None,
            radius: 4.0,
            pad_x: 12.0,
            pad_y: 4.0,
            gap: 8.0,
            align: center,
        },
    );
    col.join(&halves);

    col.y + MARGIN
}
