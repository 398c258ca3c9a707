use crate::document::ResumeDocument;
use crate::layout::flow::{Align, BoxStyle, ChipStyle, TextStyle};
use crate::layout::font_metrics::FontWeight;
use crate::layout::surface::{Color, Element, Surface};

use super::{contact_line, page_column, MARGIN};

/// Opacity of the experience card tint, the equivalent of a `10` alpha suffix on a hex color.
const CARD_TINT: f32 = 16.0 / 255.0;

/// Heavy uppercase type on an accent header, tinted experience cards, solid skill pills.
pub(super) fn render(doc: &ResumeDocument, accent: Color, surface: &mut Surface) -> f32 {
    let width = surface.width;
    let mark = surface.mark();
    let white = Color::WHITE;

    let mut header = page_column(surface, MARGIN, MARGIN);
    header.text_then(
        surface,
        &doc.full_name,
        &TextStyle::new(60.0, white).weight(FontWeight::Black).uppercase(),
        16.0,
    );
    header.text_then(
        surface,
        &doc.title,
        &TextStyle::new(30.0, white).weight(FontWeight::Light),
        24.0,
    );
    header.text(surface, &contact_line(doc, " • "), &TextStyle::new(14.0, white));
    let header_bottom = header.y + MARGIN;
    surface.insert_at(
        mark,
        Element::Rect {
            x: 0.0,
            y: 0.0,
            width,
            height: header_bottom,
            radius: 0.0,
            fill: accent,
        },
    );

    let heading = TextStyle::new(30.0, accent).weight(FontWeight::Black).uppercase();
    let sub_heading = TextStyle::new(24.0, accent).weight(FontWeight::Black).uppercase();
    let body = TextStyle::new(16.0, Color::GRAY_700);
    let mut col = page_column(surface, MARGIN, header_bottom + MARGIN);

    col.text_then(surface, "About", &heading, 16.0);
    col.text(surface, &doc.summary, &TextStyle::new(18.0, Color::GRAY_700).relaxed());
    col.gap(40.0);

    col.text_then(surface, "Experience", &heading, 24.0);
    for exp in &doc.experience {
        col.boxed(
            surface,
            &BoxStyle::filled(accent.with_alpha(CARD_TINT), 24.0).radius(8.0),
            |inner, surface| {
                inner.split_row(
                    surface,
                    &exp.title,
                    &TextStyle::new(24.0, accent).bold(),
                    &exp.period,
                    &body.color(Color::GRAY_500).weight(FontWeight::Semibold),
                );
                inner.gap(12.0);
                inner.text_then(
                    surface,
                    &exp.company,
                    &TextStyle::new(18.0, Color::GRAY_700).weight(FontWeight::Semibold),
                    12.0,
                );
                inner.text(surface, &exp.description, &body);
            },
        );
        col.gap(32.0);
    }
    col.gap(8.0);

    let mut halves = col.split(2, 40.0);
    let education = &mut halves[0];
    education.text_then(surface, "Education", &sub_heading, 16.0);
    for edu in &doc.education {
        education.boxed(
            surface,
            &BoxStyle::edged(accent, 4.0, 16.0).padding(16.0),
            |inner, surface| {
                inner.text(surface, &edu.degree, &TextStyle::new(18.0, Color::GRAY_900).bold());
                inner.text(surface, &edu.institution, &body.color(Color::GRAY_600));
                inner.text(surface, &edu.year, &body.color(Color::GRAY_500));
            },
        );
        education.gap(16.0);
    }

    let skills = &mut halves[1];
    skills.text_then(surface, "Skills", &sub_heading, 16.0);
    skills.chips(
        surface,
        &doc.skills,
        &ChipStyle {
            text: TextStyle::new(16.0, white).bold(),
            fill: Some(accent),
            border: None,
            radius: 8.0,
            pad_x: 16.0,
            pad_y: 8.0,
            gap: 12.0,
            align: Align::Left,
        },
    );
    col.join(&halves);

    col.y + MARGIN
}
