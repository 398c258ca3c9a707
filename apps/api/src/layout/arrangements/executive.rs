use crate::document::ResumeDocument;
use crate::layout::flow::{Align, Column, Marker, TextStyle};
use crate::layout::font_metrics::FontWeight;
use crate::layout::surface::{Color, Surface};

use super::{marked_grid, page_column, MARGIN};

/// Large name with contact details flush right, accent bar, then stacked sections
/// closing with education and bulleted competencies side by side.
pub(super) fn render(doc: &ResumeDocument, accent: Color, surface: &mut Surface) -> f32 {
    let mut col = page_column(surface, MARGIN, MARGIN);
    let small = TextStyle::new(14.0, Color::GRAY_600);

    // header: identity on the left, contact block on the right
    let contact: Vec<&str> = doc.contact_items();
    let contact_width = contact
        .iter()
        .map(|c| small.font().width_of(c))
        .fold(0.0_f32, f32::max)
        .min(col.width * 0.4);
    let reserve = if contact_width > 0.0 { contact_width + 24.0 } else { 0.0 };

    let mut identity = Column::new(col.x, col.width - reserve, col.y);
    identity.text_then(surface, &doc.full_name, &TextStyle::new(60.0, accent).bold(), 8.0);
    identity.text(surface, &doc.title, &TextStyle::new(24.0, Color::GRAY_600));

    let mut aside = Column::new(col.right() - contact_width.max(1.0), contact_width.max(1.0), col.y);
    for item in &contact {
        aside.text(surface, item, &small.align(Align::Right));
    }
    col.join(&[identity, aside]);
    col.gap(32.0);

    col.rule(surface, 4.0, accent);
    col.gap(32.0);

    let heading = TextStyle::new(24.0, accent).bold().uppercase();
    let body = TextStyle::new(16.0, Color::GRAY_700);

    col.text_then(surface, "Executive Summary", &heading, 16.0);
    col.text(surface, &doc.summary, &TextStyle::new(18.0, Color::GRAY_700).relaxed());
    col.gap(32.0);

    col.text_then(surface, "Professional Experience", &heading, 16.0);
    for exp in &doc.experience {
        col.split_row(
            surface,
            &exp.title,
            &TextStyle::new(20.0, Color::GRAY_900).bold(),
            &exp.period,
            &body.color(Color::GRAY_500),
        );
        col.gap(8.0);
        col.text_then(
            surface,
            &exp.company,
            &body.color(Color::GRAY_600).weight(FontWeight::Semibold),
            8.0,
        );
        col.text(surface, &exp.description, &body);
        col.gap(24.0);
    }
    col.gap(8.0);

    let mut halves = col.split(2, 32.0);
    let education = &mut halves[0];
    education.text_then(surface, "Education", &heading, 16.0);
    for edu in &doc.education {
        education.text(surface, &edu.degree, &TextStyle::new(18.0, Color::GRAY_900).bold());
        education.text(surface, &edu.institution, &body.color(Color::GRAY_600));
        education.text(surface, &edu.year, &body.color(Color::GRAY_500));
        education.gap(12.0);
    }

    let competencies = &mut halves[1];
    competencies.text_then(surface, "Core Competencies", &heading, 16.0);
    marked_grid(
        competencies,
        surface,
        &doc.skills,
        1,
        8.0,
        &body,
        Marker::Glyph {
            glyph: "•",
            style: body,
        },
    );
    col.join(&halves);

    col.y + MARGIN
}
