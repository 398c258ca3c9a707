use crate::document::ResumeDocument;
use crate::layout::flow::{Column, TextStyle};
use crate::layout::font_metrics::FontWeight;
use crate::layout::surface::{Color, Surface};

use super::{backfill_band, joined};

const PAD: f32 = 32.0;

/// Accent sidebar (a third of the page) with identity, contact, skills and education;
/// summary and experience in the main column.
pub(super) fn render(doc: &ResumeDocument, accent: Color, surface: &mut Surface) -> f32 {
    let band_width = (surface.width / 3.0).round();
    let mark = surface.mark();

    let white = Color::WHITE;
    let mut side = Column::new(PAD, band_width - PAD * 2.0, PAD);
    side.text_then(surface, &doc.full_name, &TextStyle::new(30.0, white).bold(), 8.0);
    side.text(surface, &doc.title, &TextStyle::new(18.0, white.with_alpha(0.9)));
    side.gap(32.0);

    let small = TextStyle::new(14.0, white);
    sidebar_heading(&mut side, surface, "Contact");
    for item in doc.contact_items() {
        side.text_then(surface, item, &small, 8.0);
    }
    side.gap(16.0);

    sidebar_heading(&mut side, surface, "Skills");
    for skill in &doc.skills {
        side.text_then(surface, skill, &small, 8.0);
    }
    side.gap(16.0);

    sidebar_heading(&mut side, surface, "Education");
    for edu in &doc.education {
        side.text(surface, &edu.degree, &small.weight(FontWeight::Semibold));
        side.text(surface, &edu.institution, &small.color(white.with_alpha(0.9)));
        side.text(surface, &edu.year, &small.color(white.with_alpha(0.75)));
        side.gap(12.0);
    }
    side.gap(PAD - 12.0);

    let heading = TextStyle::new(24.0, accent).bold();
    let body = TextStyle::new(16.0, Color::GRAY_700);
    let mut main = Column::new(band_width + PAD, surface.width - band_width - PAD * 2.0, PAD);
    main.text_then(surface, "Summary", &heading, 12.0);
    main.text(surface, &doc.summary, &body.relaxed());
    main.gap(24.0);

    main.text_then(surface, "Experience", &heading, 12.0);
    for exp in &doc.experience {
        main.text(surface, &exp.title, &TextStyle::new(18.0, Color::GRAY_900).bold());
        main.text_then(
            surface,
            &joined(&[&exp.company, &exp.period], " | "),
            &body.color(Color::GRAY_600),
            8.0,
        );
        main.text(surface, &exp.description, &body);
        main.gap(20.0);
    }
    main.gap(PAD - 20.0);

    let bottom = side.y.max(main.y);
    backfill_band(surface, mark, 0.0, band_width, bottom, accent);
    bottom
}

/// Bold heading over a translucent white underline.
fn sidebar_heading(col: &mut Column, surface: &mut Surface, text: &str) {
    col.text(surface, text, &TextStyle::new(20.0, Color::WHITE).bold());
    col.gap(8.0);
    col.rule(surface, 1.0, Color::WHITE.with_alpha(0.3));
    col.gap(12.0);
}
