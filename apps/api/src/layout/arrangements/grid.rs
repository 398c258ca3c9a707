use crate::document::ResumeDocument;
use crate::layout::flow::{Column, TextStyle};
use crate::layout::font_metrics::FontWeight;
use crate::layout::surface::{Color, Surface};

use super::{backfill_band, MARGIN};

const SIDE_PAD: f32 = 32.0;

/// Two-thirds main column on the left; accent panel on the right with contact,
/// education and skills.
pub(super) fn render(doc: &ResumeDocument, accent: Color, surface: &mut Surface) -> f32 {
    let main_width = (surface.width * 2.0 / 3.0).round();
    let mark = surface.mark();

    let heading = TextStyle::new(20.0, accent).bold().uppercase();
    let body = TextStyle::new(16.0, Color::GRAY_700);
    let small = TextStyle::new(14.0, Color::GRAY_500);

    let mut main = Column::new(MARGIN, main_width - MARGIN * 2.0, MARGIN);
    main.text_then(surface, &doc.full_name, &TextStyle::new(48.0, accent).bold(), 8.0);
    main.text_then(surface, &doc.title, &TextStyle::new(24.0, Color::GRAY_600), 24.0);

    main.text_then(surface, "Profile", &heading, 12.0);
    main.text(surface, &doc.summary, &body.relaxed());
    main.gap(32.0);

    main.text_then(surface, "Experience", &heading, 12.0);
    for exp in &doc.experience {
        main.text(surface, &exp.title, &TextStyle::new(18.0, Color::GRAY_900).bold());
        main.text(surface, &exp.company, &body.color(Color::GRAY_600));
        main.text_then(surface, &exp.period, &small, 8.0);
        main.text(surface, &exp.description, &small.color(Color::GRAY_700));
        main.gap(20.0);
    }
    main.gap(MARGIN - 20.0);

    let white = Color::WHITE;
    let side_heading = TextStyle::new(18.0, white).bold().uppercase();
    let side_text = TextStyle::new(14.0, white);
    let mut side = Column::new(
        main_width + SIDE_PAD,
        surface.width - main_width - SIDE_PAD * 2.0,
        SIDE_PAD,
    );

    side.text_then(surface, "Contact", &side_heading, 16.0);
    for item in doc.contact_items() {
        side.text_then(surface, item, &side_text, 12.0);
    }
    side.gap(20.0);

    side.text_then(surface, "Education", &side_heading, 16.0);
    for edu in &doc.education {
        side.text(surface, &edu.degree, &side_text.weight(FontWeight::Semibold));
        side.text(surface, &edu.institution, &side_text.color(white.with_alpha(0.9)));
        side.text(surface, &edu.year, &side_text.color(white.with_alpha(0.75)));
        side.gap(16.0);
    }
    side.gap(16.0);

    side.text_then(surface, "Skills", &side_heading, 16.0);
    for skill in &doc.skills {
        side.text_then(surface, skill, &side_text, 8.0);
    }
    side.gap(SIDE_PAD);

    let bottom = main.y.max(side.y);
    let side_width = surface.width - main_width;
    backfill_band(surface, mark, main_width, side_width, bottom, accent);
    bottom
}
