use crate::document::ResumeDocument;
use crate::layout::flow::{Align, ChipStyle, TextStyle};
use crate::layout::font_metrics::FontWeight;
use crate::layout::surface::{Color, Surface};

use super::{contact_line, joined, page_column, MARGIN};

/// Single column; accent-colored name over a thick accent rule, pill skills.
pub(super) fn render(doc: &ResumeDocument, accent: Color, surface: &mut Surface) -> f32 {
    let mut col = page_column(surface, MARGIN, MARGIN);

    let name = TextStyle::new(36.0, accent).bold();
    let title = TextStyle::new(20.0, Color::GRAY_600);
    let small = TextStyle::new(14.0, Color::GRAY_600);
    let heading = TextStyle::new(24.0, accent).bold();
    let body = TextStyle::new(16.0, Color::GRAY_700);

    col.text_then(surface, &doc.full_name, &name, 8.0);
    col.text_then(surface, &doc.title, &title, 16.0);
    col.text(surface, &contact_line(doc, " • "), &small);
    col.gap(24.0);
    col.rule(surface, 4.0, accent);
    col.gap(24.0);

    col.text_then(surface, "Professional Summary", &heading, 12.0);
    col.text(surface, &doc.summary, &body.relaxed());
    col.gap(24.0);

    col.text_then(surface, "Work Experience", &heading, 12.0);
    for exp in &doc.experience {
        col.text(surface, &exp.title, &TextStyle::new(18.0, Color::GRAY_900).bold());
        col.text(surface, &joined(&[&exp.company, &exp.period], " | "), &body.color(Color::GRAY_600));
        if !exp.description.trim().is_empty() {
            col.gap(8.0);
            col.text(surface, &exp.description, &body);
        }
        col.gap(16.0);
    }
    col.gap(8.0);

    col.text_then(surface, "Education", &heading, 12.0);
    for edu in &doc.education {
        col.text(surface, &edu.degree, &TextStyle::new(16.0, Color::GRAY_900).bold());
        col.text(
            surface,
            &joined(&[&edu.institution, &edu.year], " | "),
            &body.color(Color::GRAY_600),
        );
        col.gap(12.0);
    }
    col.gap(12.0);

    col.text_then(surface, "Skills", &heading, 12.0);
    col.chips(
        surface,
        &doc.skills,
        &ChipStyle {
            text: TextStyle::new(14.0, Color::GRAY_900).weight(FontWeight::Regular),
            fill: Some(Color::GRAY_200),
            border: None,
            radius: 999.0,
            pad_x: 12.0,
            pad_y: 4.0,
            gap: 8.0,
            align: Align::Left,
        },
    );

    col.y + MARGIN
}
