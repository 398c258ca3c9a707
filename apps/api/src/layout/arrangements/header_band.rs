use crate::document::ResumeDocument;
use crate::layout::flow::{Marker, TextStyle};
use crate::layout::surface::{Color, Element, Surface};

use super::{contact_line, marked_grid, page_column, MARGIN};

/// Full-width accent header band; uppercase section titles, period on the right of
/// each role, education and skills side by side.
pub(super) fn render(doc: &ResumeDocument, accent: Color, surface: &mut Surface) -> f32 {
    let mark = surface.mark();
    let white = Color::WHITE;

    let mut band = page_column(surface, MARGIN, MARGIN);
    band.text_then(surface, &doc.full_name, &TextStyle::new(48.0, white).bold(), 8.0);
    band.text_then(surface, &doc.title, &TextStyle::new(24.0, white.with_alpha(0.9)), 16.0);
    band.text(surface, &contact_line(doc, " • "), &TextStyle::new(14.0, white));
    let band_bottom = band.y + MARGIN;
    let width = surface.width;
    surface.insert_at(
        mark,
        Element::Rect {
            x: 0.0,
            y: 0.0,
            width,
            height: band_bottom,
            radius: 0.0,
            fill: accent,
        },
    );

    let heading = TextStyle::new(24.0, accent).bold().uppercase();
    let body = TextStyle::new(16.0, Color::GRAY_700);
    let mut col = page_column(surface, MARGIN, band_bottom + MARGIN);

    col.text_then(surface, "About Me", &heading, 16.0);
    col.text(surface, &doc.summary, &body.relaxed());
    col.gap(32.0);

    col.text_then(surface, "Professional Experience", &heading, 16.0);
    for exp in &doc.experience {
        col.split_row(
            surface,
            &exp.title,
            &TextStyle::new(18.0, Color::GRAY_900).bold(),
            &exp.period,
            &TextStyle::new(14.0, Color::GRAY_500),
        );
        col.gap(8.0);
        col.text_then(surface, &exp.company, &body.color(Color::GRAY_600), 8.0);
        col.text(surface, &exp.description, &body);
        col.gap(24.0);
    }
    col.gap(8.0);

    let mut halves = col.split(2, 32.0);
    let education = &mut halves[0];
    education.text_then(surface, "Education", &heading, 16.0);
    for edu in &doc.education {
        education.text(surface, &edu.degree, &TextStyle::new(16.0, Color::GRAY_900).bold());
        education.text(surface, &edu.institution, &body.color(Color::GRAY_600));
        education.text(surface, &edu.year, &TextStyle::new(14.0, Color::GRAY_500));
        education.gap(16.0);
    }

    let skills = &mut halves[1];
    skills.text_then(surface, "Skills", &heading, 16.0);
    marked_grid(
        skills,
        surface,
        &doc.skills,
        1,
        8.0,
        &TextStyle::new(16.0, Color::GRAY_900),
        Marker::Dot {
            color: accent,
            diameter: 8.0,
        },
    );
    col.join(&halves);

    col.y + MARGIN
}
