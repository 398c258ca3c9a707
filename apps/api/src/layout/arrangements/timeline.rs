use crate::document::ResumeDocument;
use crate::layout::flow::{BoxStyle, TextStyle};
use crate::layout::font_metrics::FontWeight;
use crate::layout::surface::{Color, Element, Surface};

use super::{contact_line, page_column, MARGIN};

const LINE_WIDTH: f32 = 2.0;
const DOT: f32 = 16.0;
const ENTRY_INDENT: f32 = 24.0;

/// Experience hung off a vertical accent line with a dot per entry; tinted cards
/// for education and skills.
pub(super) fn render(doc: &ResumeDocument, accent: Color, surface: &mut Surface) -> f32 {
    let mut col = page_column(surface, MARGIN, MARGIN);

    col.text_then(surface, &doc.full_name, &TextStyle::new(48.0, accent).bold(), 8.0);
    col.text_then(surface, &doc.title, &TextStyle::new(24.0, Color::GRAY_600), 16.0);
    col.text(surface, &contact_line(doc, " | "), &TextStyle::new(14.0, Color::GRAY_600));
    col.gap(40.0);

    let heading = TextStyle::new(24.0, accent).bold();
    let body = TextStyle::new(16.0, Color::GRAY_700);
    let small = TextStyle::new(14.0, Color::GRAY_500);

    col.text_then(surface, "Professional Profile", &heading, 16.0);
    if !doc.summary.trim().is_empty() {
        col.boxed(
            surface,
            &BoxStyle::filled(Color::GRAY_50, 16.0).with_edge(accent, 4.0),
            |inner, surface| {
                inner.text(surface, &doc.summary, &body.relaxed());
            },
        );
    }
    col.gap(40.0);

    col.text_then(surface, "Career Timeline", &heading, 24.0);
    if !doc.experience.is_empty() {
        let line_top = col.y;
        let line_mark = surface.mark();
        let mut track = col.inset(LINE_WIDTH + ENTRY_INDENT, 0.0);
        for exp in &doc.experience {
            surface.push(Element::Circle {
                cx: col.x + LINE_WIDTH / 2.0,
                cy: track.y + 6.0 + DOT / 2.0,
                r: DOT / 2.0,
                fill: accent,
            });
            track.boxed(surface, &BoxStyle::filled(Color::GRAY_50, 16.0), |inner, surface| {
                inner.text(surface, &exp.title, &TextStyle::new(18.0, accent).bold());
                inner.text(
                    surface,
                    &exp.company,
                    &body.color(Color::GRAY_600).weight(FontWeight::Semibold),
                );
                inner.text_then(surface, &exp.period, &small, 8.0);
                inner.text(surface, &exp.description, &body);
            });
            track.gap(32.0);
        }
        surface.insert_at(
            line_mark,
            Element::Rect {
                x: col.x,
                y: line_top,
                width: LINE_WIDTH,
                height: track.y - line_top,
                radius: 0.0,
                fill: accent,
            },
        );
        col.y = track.y;
    }
    col.gap(8.0);

    let mut halves = col.split(2, 32.0);
    let education = &mut halves[0];
    education.text_then(surface, "Education", &heading, 16.0);
    for edu in &doc.education {
        education.boxed(surface, &BoxStyle::filled(Color::GRAY_50, 12.0), |inner, surface| {
            inner.text(surface, &edu.degree, &TextStyle::new(16.0, Color::GRAY_900).bold());
            inner.text(surface, &edu.institution, &body.color(Color::GRAY_600));
            inner.text(surface, &edu.year, &small);
        });
        education.gap(16.0);
    }

    let skills = &mut halves[1];
    skills.text_then(surface, "Key Skills", &heading, 16.0);
    for skill in &doc.skills {
        skills.boxed(
            surface,
            &BoxStyle::filled(Color::GRAY_50, 8.0).with_edge(accent, 4.0),
            |inner, surface| {
                // keep the card one line tall when the skill is empty
                let used = inner.text(surface, skill, &body);
                if used == 0.0 {
                    inner.gap(body.line_px());
                }
            },
        );
        skills.gap(8.0);
    }
    col.join(&halves);

    col.y + MARGIN
}
