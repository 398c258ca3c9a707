use crate::document::ResumeDocument;
use crate::layout::flow::{Align, ChipStyle, TextStyle};
use crate::layout::surface::{Color, Element, Surface};

use super::{contact_line, joined, page_column, MARGIN};

const SUMMARY_MEASURE: f32 = 560.0;

/// Serif, centered and quiet: an accent rule the width of the name, italic details,
/// hairlines between roles and outlined skill pills stacked one per line.
pub(super) fn render(doc: &ResumeDocument, accent: Color, surface: &mut Surface) -> f32 {
    let mut col = page_column(surface, MARGIN, MARGIN);
    let center = Align::Center;

    let name = TextStyle::new(60.0, accent).serif().bold().align(center);
    col.text_then(surface, &doc.full_name, &name, 12.0);
    if !doc.full_name.trim().is_empty() {
        let rule_width = name.font().width_of(doc.full_name.trim()).min(col.width);
        surface.push(Element::Rect {
            x: col.x + (col.width - rule_width) / 2.0,
            y: col.y,
            width: rule_width,
            height: 4.0,
            radius: 0.0,
            fill: accent,
        });
        col.gap(4.0 + 12.0);
    }
    col.text(
        surface,
        &doc.title,
        &TextStyle::new(20.0, Color::GRAY_600).serif().italic().align(center),
    );
    col.gap(40.0);

    col.text_then(
        surface,
        &contact_line(doc, " • "),
        &TextStyle::new(14.0, Color::GRAY_600).align(center),
        40.0,
    );

    let heading = TextStyle::new(24.0, accent).serif().bold().align(center);
    let sub_heading = TextStyle::new(20.0, accent).serif().bold().align(center);
    let body = TextStyle::new(16.0, Color::GRAY_700);

    col.text_then(surface, "Profile", &heading, 16.0);
    let side = (col.width - SUMMARY_MEASURE).max(0.0) / 2.0;
    let mut summary = col.inset(side, side);
    summary.text(surface, &doc.summary, &body.relaxed().italic().align(center));
    col.y = summary.y;
    col.gap(40.0);

    col.text_then(surface, "Professional Experience", &heading, 24.0);
    for exp in &doc.experience {
        col.text_then(
            surface,
            &exp.title,
            &TextStyle::new(20.0, Color::GRAY_900).serif().bold(),
            4.0,
        );
        col.text_then(
            surface,
            &joined(&[&exp.company, &exp.period], " • "),
            &body.color(Color::GRAY_600).italic(),
            8.0,
        );
        col.text(surface, &exp.description, &body.relaxed());
        col.gap(24.0);
        col.rule(surface, 1.0, Color::GRAY_200);
        col.gap(24.0);
    }
    col.gap(16.0);

    let mut halves = col.split(2, 40.0);
    let education = &mut halves[0];
    education.text_then(surface, "Education", &sub_heading, 16.0);
    for edu in &doc.education {
        education.text(
            surface,
            &edu.degree,
            &TextStyle::new(16.0, Color::GRAY_900).serif().bold().align(center),
        );
        education.text(surface, &edu.institution, &body.color(Color::GRAY_600).italic().align(center));
        education.text(surface, &edu.year, &TextStyle::new(14.0, Color::GRAY_500).align(center));
        education.gap(16.0);
    }

    let skills = &mut halves[1];
    skills.text_then(surface, "Skills", &sub_heading, 16.0);
    let pill = ChipStyle {
        text: TextStyle::new(14.0, accent),
        fill: None,
        border: Some(accent),
        radius: 999.0,
        pad_x: 16.0,
        pad_y: 4.0,
        gap: 8.0,
        align: center,
    };
    for (i, skill) in doc.skills.iter().enumerate() {
        if i > 0 {
            skills.gap(pill.gap);
        }
        skills.chips(surface, std::slice::from_ref(skill), &pill);
    }
    col.join(&halves);

    col.y + MARGIN
}
