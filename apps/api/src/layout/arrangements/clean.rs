use crate::document::ResumeDocument;
use crate::layout::flow::{Align, BoxStyle, Marker, TextStyle};
use crate::layout::surface::{Color, Surface};

use super::{contact_line, joined, marked_grid, page_column, MARGIN};

/// Centered header, boxed italic summary, accent-edged experience entries and a
/// two-column grid of square-marked skills.
pub(super) fn render(doc: &ResumeDocument, accent: Color, surface: &mut Surface) -> f32 {
    let mut col = page_column(surface, MARGIN, MARGIN);
    let centered = Align::Center;

    col.text_then(
        surface,
        &doc.full_name,
        &TextStyle::new(48.0, accent).bold().align(centered),
        12.0,
    );
    col.text_then(
        surface,
        &doc.title,
        &TextStyle::new(20.0, Color::GRAY_600).align(centered),
        16.0,
    );
    col.text(
        surface,
        &contact_line(doc, " • "),
        &TextStyle::new(14.0, Color::GRAY_600).align(centered),
    );
    col.gap(24.0);
    col.rule(surface, 2.0, accent);
    col.gap(32.0);

    let body = TextStyle::new(16.0, Color::GRAY_700);
    if !doc.summary.trim().is_empty() {
        col.boxed(surface, &BoxStyle::filled(Color::GRAY_100, 16.0), |inner, surface| {
            inner.text(surface, &doc.summary, &body.relaxed().italic().align(centered));
        });
        col.gap(32.0);
    }

    let heading = TextStyle::new(24.0, accent).bold().uppercase();
    col.text_then(surface, "Professional Experience", &heading, 16.0);
    for (i, exp) in doc.experience.iter().enumerate() {
        if i > 0 {
            col.gap(24.0);
        }
        col.boxed(surface, &BoxStyle::edged(accent, 4.0, 16.0), |inner, surface| {
            inner.text(surface, &exp.title, &TextStyle::new(18.0, Color::GRAY_900).bold());
            inner.text_then(
                surface,
                &joined(&[&exp.company, &exp.period], " • "),
                &body.color(Color::GRAY_600),
                8.0,
            );
            inner.text(surface, &exp.description, &body);
        });
    }
    col.gap(32.0);

    col.text_then(surface, "Education", &heading, 16.0);
    for (i, edu) in doc.education.iter().enumerate() {
        if i > 0 {
            col.gap(16.0);
        }
        col.text(surface, &edu.degree, &TextStyle::new(18.0, Color::GRAY_900).bold());
        col.text(
            surface,
            &joined(&[&edu.institution, &edu.year], " • "),
            &body.color(Color::GRAY_600),
        );
    }
    col.gap(32.0);

    col.text_then(surface, "Core Skills", &heading, 16.0);
    marked_grid(
        &mut col,
        surface,
        &doc.skills,
        2,
        12.0,
        &body,
        Marker::Square {
            color: accent,
            size: 12.0,
        },
    );

    col.y + MARGIN
}
