//! Block flow helpers shared by the arrangements.
//!
//! A `Column` is a vertical cursor over a horizontal band of the page. Drawing into it
//! emits elements onto a `Surface` and advances the cursor by the height used. Columns
//! are plain values, so side-by-side layouts are two columns started at the same `y`
//! and the row ends at the larger of the two.
//!
//! Blank text draws nothing and takes no space.

use crate::layout::font_metrics::{FontFamily, FontSpec, FontWeight};
use crate::layout::surface::{Color, Element, Surface, TextAnchor, TextRun};

// ────────────────────────────────────────────────────────────────────────────
// Text style
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size_px: f32,
    pub color: Color,
    pub italic: bool,
    pub uppercase: bool,
    /// Line box height as a multiple of the font size.
    pub line_height: f32,
    pub align: Align,
}

impl TextStyle {
    /// Regular sans text with the line height a browser type scale would use at `size_px`.
    pub fn new(size_px: f32, color: Color) -> Self {
        TextStyle {
            family: FontFamily::Sans,
            weight: FontWeight::Regular,
            size_px,
            color,
            italic: false,
            uppercase: false,
            line_height: default_line_height(size_px),
            align: Align::Left,
        }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn bold(self) -> Self {
        self.weight(FontWeight::Bold)
    }

    pub fn serif(mut self) -> Self {
        self.family = FontFamily::Serif;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    pub fn relaxed(mut self) -> Self {
        self.line_height = 1.625;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn font(&self) -> FontSpec {
        FontSpec {
            family: self.family,
            weight: self.weight,
            size_px: self.size_px,
        }
    }

    pub fn line_px(&self) -> f32 {
        self.size_px * self.line_height
    }

    fn transform<'a>(&self, text: &'a str) -> std::borrow::Cow<'a, str> {
        if self.uppercase {
            std::borrow::Cow::Owned(text.to_uppercase())
        } else {
            std::borrow::Cow::Borrowed(text)
        }
    }
}

fn default_line_height(size_px: f32) -> f32 {
    match size_px {
        s if s >= 48.0 => 1.0,
        s if s >= 36.0 => 1.11,
        s if s >= 30.0 => 1.2,
        s if s >= 24.0 => 1.33,
        s if s >= 20.0 => 1.4,
        s if s >= 18.0 => 1.56,
        s if s >= 16.0 => 1.5,
        _ => 1.43,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Decorations
// ────────────────────────────────────────────────────────────────────────────

/// A small shape drawn to the left of a list item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker {
    Dot { color: Color, diameter: f32 },
    Square { color: Color, size: f32 },
    /// A text glyph such as "•".
    Glyph { glyph: &'static str, style: TextStyle },
}

/// Pill-shaped label used for skill tags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipStyle {
    pub text: TextStyle,
    pub fill: Option<Color>,
    pub border: Option<Color>,
    pub radius: f32,
    pub pad_x: f32,
    pub pad_y: f32,
    pub gap: f32,
    pub align: Align,
}

/// Background and accent edge drawn behind a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStyle {
    pub fill: Option<Color>,
    pub radius: f32,
    pub pad_x: f32,
    pub pad_y: f32,
    /// Left border color and width.
    pub edge: Option<(Color, f32)>,
}

impl BoxStyle {
    pub fn filled(fill: Color, padding: f32) -> Self {
        BoxStyle {
            fill: Some(fill),
            radius: 4.0,
            pad_x: padding,
            pad_y: padding,
            edge: None,
        }
    }

    /// Left border only, content indented by `indent` with no vertical padding.
    pub fn edged(color: Color, width: f32, indent: f32) -> Self {
        BoxStyle {
            fill: None,
            radius: 0.0,
            pad_x: indent,
            pad_y: 0.0,
            edge: Some((color, width)),
        }
    }

    pub fn with_edge(mut self, color: Color, width: f32) -> Self {
        self.edge = Some((color, width));
        self.radius = 0.0;
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.pad_x = padding;
        self.pad_y = padding;
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Column
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub x: f32,
    pub width: f32,
    pub y: f32,
}

impl Column {
    pub fn new(x: f32, width: f32, y: f32) -> Self {
        Column { x, width, y }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn gap(&mut self, dy: f32) {
        self.y += dy;
    }

    /// Narrower column at the current cursor.
    pub fn inset(&self, left: f32, right: f32) -> Column {
        Column::new(self.x + left, (self.width - left - right).max(1.0), self.y)
    }

    /// Splits the band into `n` equal columns separated by `gutter`, all starting at the cursor.
    pub fn split(&self, n: usize, gutter: f32) -> Vec<Column> {
        let n = n.max(1);
        let each = (self.width - gutter * (n as f32 - 1.0)) / n as f32;
        (0..n)
            .map(|i| Column::new(self.x + i as f32 * (each + gutter), each, self.y))
            .collect()
    }

    /// Moves the cursor below the lowest of `others`.
    pub fn join(&mut self, others: &[Column]) {
        for other in others {
            self.y = self.y.max(other.y);
        }
    }

    /// Height that `text` would occupy, without drawing it.
    pub fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        let text = style.transform(text);
        style.font().wrap(&text, self.width).len() as f32 * style.line_px()
    }

    /// Wrapped paragraph. Returns the height used.
    pub fn text(&mut self, surface: &mut Surface, text: &str, style: &TextStyle) -> f32 {
        let text = style.transform(text);
        let lines = style.font().wrap(&text, self.width);
        let line_px = style.line_px();
        let (x, anchor) = match style.align {
            Align::Left => (self.x, TextAnchor::Start),
            Align::Center => (self.x + self.width / 2.0, TextAnchor::Middle),
            Align::Right => (self.right(), TextAnchor::End),
        };
        for (i, line) in lines.iter().enumerate() {
            surface.push(Element::Text(TextRun {
                x,
                baseline: baseline(self.y + i as f32 * line_px, style),
                content: line.clone(),
                family: style.family,
                weight: style.weight,
                size_px: style.size_px,
                italic: style.italic,
                color: style.color,
                anchor,
            }));
        }
        let used = lines.len() as f32 * line_px;
        self.y += used;
        used
    }

    /// Paragraph followed by `after` spacing, both skipped when the text is blank.
    pub fn text_then(&mut self, surface: &mut Surface, text: &str, style: &TextStyle, after: f32) {
        if self.text(surface, text, style) > 0.0 {
            self.gap(after);
        }
    }

    /// `left` flush left and `right` flush right on the same line, like a
    /// justify-between row. The left text wraps in the space the right text leaves.
    pub fn split_row(
        &mut self,
        surface: &mut Surface,
        left: &str,
        left_style: &TextStyle,
        right: &str,
        right_style: &TextStyle,
    ) {
        let right_text = right_style.transform(right);
        let right_w = right_style.font().width_of(&right_text).min(self.width * 0.45);
        let reserve = if right_w > 0.0 { right_w + 16.0 } else { 0.0 };
        let top = self.y;

        let mut left_col = Column::new(self.x, self.width - reserve, top);
        left_col.text(surface, left, &left_style.align(Align::Left));

        let mut right_col = Column::new(self.right() - right_w.max(1.0), right_w.max(1.0), top);
        // baseline-align the aside with the first line of the left text
        let first_line = left_style.line_px().max(right_style.line_px());
        right_col.y = top + (first_line - right_style.line_px()).max(0.0) * 0.75;
        right_col.text(surface, right, &right_style.align(Align::Right));

        self.y = left_col.y.max(right_col.y);
    }

    /// Full-width bar of the given thickness.
    pub fn rule(&mut self, surface: &mut Surface, thickness: f32, color: Color) {
        surface.push(Element::Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: thickness,
            radius: 0.0,
            fill: color,
        });
        self.y += thickness;
    }

    /// List item with a marker in a hanging indent.
    pub fn marked(&mut self, surface: &mut Surface, text: &str, style: &TextStyle, marker: Marker) {
        let line_px = style.line_px();
        let indent = match marker {
            Marker::Dot { diameter, .. } => diameter + 8.0,
            Marker::Square { size, .. } => size + 8.0,
            Marker::Glyph { glyph, style: glyph_style } => {
                glyph_style.font().width_of(glyph) + 6.0
            }
        };
        let mid = self.y + line_px / 2.0;
        match marker {
            Marker::Dot { color, diameter } => surface.push(Element::Circle {
                cx: self.x + diameter / 2.0,
                cy: mid,
                r: diameter / 2.0,
                fill: color,
            }),
            Marker::Square { color, size } => surface.push(Element::Rect {
                x: self.x,
                y: mid - size / 2.0,
                width: size,
                height: size,
                radius: 2.0,
                fill: color,
            }),
            Marker::Glyph { glyph, style: glyph_style } => {
                let mut at = Column::new(self.x, indent, self.y);
                at.text(surface, glyph, &glyph_style.align(Align::Left));
            }
        }
        let mut body = self.inset(indent, 0.0);
        let used = body.text(surface, text, style);
        // an empty item still occupies one line, like an empty list row in a browser
        self.y += used.max(line_px);
    }

    /// Wrapping row of pills. Every item is drawn, including empty strings.
    /// A label wider than the column wraps inside its pill, which grows to fit.
    pub fn chips(&mut self, surface: &mut Surface, items: &[String], chip: &ChipStyle) {
        if items.is_empty() {
            return;
        }
        let font = chip.text.font();
        let line_px = chip.text.line_px();
        let max_label = (self.width - chip.pad_x * 2.0).max(1.0);

        // first pass: size each pill and assign it to a row
        let mut rows: Vec<Vec<(&str, f32, f32)>> = vec![Vec::new()];
        let mut row_width = 0.0_f32;
        for item in items {
            let label = chip.text.transform(item);
            let label_w = font.width_of(&label).min(max_label);
            let lines = font.wrap(&label, label_w).len().max(1);
            let w = label_w + chip.pad_x * 2.0;
            let h = lines as f32 * line_px + chip.pad_y * 2.0;
            let needed = if row_width > 0.0 { chip.gap + w } else { w };
            if row_width > 0.0 && row_width + needed > self.width {
                rows.push(Vec::new());
                row_width = 0.0;
            }
            row_width += if row_width > 0.0 { chip.gap + w } else { w };
            if let Some(row) = rows.last_mut() {
                row.push((item.as_str(), w, h));
            }
        }

        let label_style = TextStyle {
            align: Align::Center,
            ..chip.text
        };
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                self.y += chip.gap;
            }
            let total: f32 =
                row.iter().map(|(_, w, _)| *w).sum::<f32>() + chip.gap * (row.len() as f32 - 1.0);
            let mut x = match chip.align {
                Align::Left => self.x,
                Align::Center => self.x + (self.width - total) / 2.0,
                Align::Right => self.right() - total,
            };
            let mut row_height = 0.0_f32;
            for (label, w, h) in row {
                if let Some(fill) = chip.fill {
                    surface.push(Element::Rect {
                        x,
                        y: self.y,
                        width: *w,
                        height: *h,
                        radius: chip.radius,
                        fill,
                    });
                }
                if let Some(stroke) = chip.border {
                    surface.push(Element::Frame {
                        x,
                        y: self.y,
                        width: *w,
                        height: *h,
                        radius: chip.radius,
                        stroke,
                        stroke_width: 2.0,
                    });
                }
                let mut inner =
                    Column::new(x + chip.pad_x, *w - chip.pad_x * 2.0, self.y + chip.pad_y);
                inner.text(surface, label, &label_style);
                row_height = row_height.max(*h);
                x += w + chip.gap;
            }
            self.y += row_height;
        }
    }

    /// Runs `content` in a padded inner column and paints a background and optional
    /// left edge beneath it, sized to whatever the content used.
    pub fn boxed<F>(&mut self, surface: &mut Surface, style: &BoxStyle, content: F)
    where
        F: FnOnce(&mut Column, &mut Surface),
    {
        let edge_w = style.edge.map(|(_, w)| w).unwrap_or(0.0);
        let mark = surface.mark();
        let top = self.y;
        let mut inner = Column::new(
            self.x + edge_w + style.pad_x,
            (self.width - edge_w - style.pad_x * 2.0).max(1.0),
            top + style.pad_y,
        );
        content(&mut inner, surface);
        let bottom = inner.y + style.pad_y;
        let height = bottom - top;

        if let Some((color, width)) = style.edge {
            surface.insert_at(
                mark,
                Element::Rect {
                    x: self.x,
                    y: top,
                    width,
                    height,
                    radius: 0.0,
                    fill: color,
                },
            );
        }
        if let Some(fill) = style.fill {
            surface.insert_at(
                mark,
                Element::Rect {
                    x: self.x,
                    y: top,
                    width: self.width,
                    height,
                    radius: style.radius,
                    fill,
                },
            );
        }
        self.y = bottom;
    }
}

/// Baseline for a line whose box starts at `line_top`: half-leading above, then ascent.
fn baseline(line_top: f32, style: &TextStyle) -> f32 {
    let half_leading = (style.line_px() - style.size_px) / 2.0;
    line_top + half_leading + style.size_px * 0.8
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> TextStyle {
        TextStyle::new(16.0, Color::GRAY_700)
    }

    #[test]
    fn test_text_advances_by_line_count() {
        let mut surface = Surface::new(300.0, 100.0);
        let mut col = Column::new(10.0, 120.0, 0.0);
        let used = col.text(
            &mut surface,
            "one two three four five six seven eight nine ten",
            &body(),
        );
        let lines = surface.text_content().len();
        assert!(lines > 1);
        assert!((used - lines as f32 * 24.0).abs() < 1e-3);
        assert!((col.y - used).abs() < 1e-3);
    }

    #[test]
    fn test_blank_text_takes_no_space() {
        let mut surface = Surface::new(300.0, 100.0);
        let mut col = Column::new(0.0, 300.0, 50.0);
        col.text_then(&mut surface, "", &body(), 12.0);
        assert_eq!(col.y, 50.0);
        assert!(surface.elements.is_empty());
    }

    #[test]
    fn test_center_alignment_anchors_middle() {
        let mut surface = Surface::new(300.0, 100.0);
        let mut col = Column::new(100.0, 200.0, 0.0);
        col.text(&mut surface, "Hi", &body().align(Align::Center));
        let run = surface.text_runs().next().unwrap();
        assert_eq!(run.anchor, TextAnchor::Middle);
        assert_eq!(run.x, 200.0);
    }

    #[test]
    fn test_uppercase_transforms_content() {
        let mut surface = Surface::new(300.0, 100.0);
        let mut col = Column::new(0.0, 300.0, 0.0);
        col.text(&mut surface, "Skills", &body().uppercase());
        assert_eq!(surface.text_content(), vec!["SKILLS"]);
    }

    #[test]
    fn test_split_divides_width_with_gutter() {
        let col = Column::new(48.0, 698.0, 10.0);
        let parts = col.split(2, 32.0);
        assert_eq!(parts.len(), 2);
        assert!((parts[0].width - 333.0).abs() < 1e-3);
        assert!((parts[1].x - (48.0 + 333.0 + 32.0)).abs() < 1e-3);
        assert!(parts.iter().all(|c| c.y == 10.0));
    }

    #[test]
    fn test_chips_keep_order_and_wrap() {
        let mut surface = Surface::new(400.0, 100.0);
        let mut col = Column::new(0.0, 200.0, 0.0);
        let items: Vec<String> = (0..8).map(|i| format!("Skill {i}")).collect();
        let chip = ChipStyle {
            text: TextStyle::new(14.0, Color::GRAY_900),
            fill: Some(Color::GRAY_200),
            border: None,
            radius: 12.0,
            pad_x: 12.0,
            pad_y: 4.0,
            gap: 8.0,
            align: Align::Left,
        };
        col.chips(&mut surface, &items, &chip);
        let expected: Vec<&str> = items.iter().map(String::as_str).collect();
        assert_eq!(surface.text_content(), expected);
        assert!(col.y > 28.0 + 8.0, "eight chips cannot fit one 200px row");
    }

    #[test]
    fn test_chip_wider_than_column_grows_instead_of_truncating() {
        let mut surface = Surface::new(400.0, 100.0);
        let mut col = Column::new(0.0, 160.0, 0.0);
        let chip = ChipStyle {
            text: TextStyle::new(14.0, Color::GRAY_900),
            fill: Some(Color::GRAY_200),
            border: None,
            radius: 12.0,
            pad_x: 12.0,
            pad_y: 4.0,
            gap: 8.0,
            align: Align::Left,
        };
        let label = "Distributed systems design and performance engineering".to_string();
        col.chips(&mut surface, &[label.clone()], &chip);

        let lines = surface.text_content();
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), label);
        let line_px = chip.text.line_px();
        assert!((col.y - (lines.len() as f32 * line_px + 8.0)).abs() < 1e-3);
        match &surface.elements[0] {
            Element::Rect { width, height, .. } => {
                assert!(*width <= 160.0 + 1e-3);
                assert!((*height - col.y).abs() < 1e-3);
            }
            other => panic!("expected pill background, got {other:?}"),
        }
    }

    #[test]
    fn test_marked_empty_item_still_takes_a_line() {
        let mut surface = Surface::new(300.0, 100.0);
        let mut col = Column::new(0.0, 300.0, 0.0);
        col.marked(
            &mut surface,
            "",
            &body(),
            Marker::Dot {
                color: Color::GRAY_900,
                diameter: 8.0,
            },
        );
        assert_eq!(col.y, 24.0);
    }

    #[test]
    fn test_boxed_paints_background_beneath_content() {
        let mut surface = Surface::new(300.0, 300.0);
        let mut col = Column::new(0.0, 300.0, 0.0);
        col.text(&mut surface, "Heading", &body());
        col.boxed(
            &mut surface,
            &BoxStyle::filled(Color::GRAY_100, 16.0).with_edge(Color::GRAY_900, 4.0),
            |inner, surface| {
                inner.text(surface, "inside", &body());
            },
        );
        // heading, fill, edge, text
        assert!(matches!(surface.elements[0], Element::Text(_)));
        assert!(matches!(surface.elements[1], Element::Rect { .. }));
        assert!(matches!(surface.elements[2], Element::Rect { .. }));
        assert!(matches!(surface.elements[3], Element::Text(_)));
        assert!((col.y - (24.0 + 16.0 + 24.0 + 16.0)).abs() < 1e-3);
    }

    #[test]
    fn test_split_row_places_aside_at_right_edge() {
        let mut surface = Surface::new(500.0, 100.0);
        let mut col = Column::new(0.0, 500.0, 0.0);
        col.split_row(
            &mut surface,
            "Senior Engineer",
            &body().bold(),
            "2020 - 2024",
            &TextStyle::new(14.0, Color::GRAY_500),
        );
        let runs: Vec<&TextRun> = surface.text_runs().collect();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1].anchor, TextAnchor::End);
        assert!((runs[1].x - 500.0).abs() < 1e-3);
    }
}
