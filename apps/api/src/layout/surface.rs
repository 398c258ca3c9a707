//! The visual surface: a positioned display list produced by an arrangement.
//!
//! Coordinates are CSS pixels with the origin at the top-left corner. Text `y` is the
//! baseline. The surface is resolution-independent; `to_svg` is the single serialization
//! used both for the live preview and as the input to export capture.

use std::fmt::Write as _;

use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::{FontFamily, FontWeight};

// ────────────────────────────────────────────────────────────────────────────
// Color
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// 0.0 (transparent) – 1.0 (opaque).
    pub alpha: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const GRAY_50: Color = Color::rgb(0xf9, 0xfa, 0xfb);
    pub const GRAY_100: Color = Color::rgb(0xf3, 0xf4, 0xf6);
    pub const GRAY_200: Color = Color::rgb(0xe5, 0xe7, 0xeb);
    pub const GRAY_500: Color = Color::rgb(0x6b, 0x72, 0x80);
    pub const GRAY_600: Color = Color::rgb(0x4b, 0x55, 0x63);
    pub const GRAY_700: Color = Color::rgb(0x37, 0x41, 0x51);
    pub const GRAY_900: Color = Color::rgb(0x11, 0x18, 0x27);
    /// Used when a descriptor carries a color that does not parse.
    pub const FALLBACK_ACCENT: Color = Color::rgb(0x37, 0x41, 0x51);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, alpha: 1.0 }
    }

    /// Parses `#rgb` or `#rrggbb` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize, len: usize| u8::from_str_radix(&hex[i..i + len], 16).ok();
        match hex.len() {
            3 => {
                let r = channel(0, 1)?;
                let g = channel(1, 1)?;
                let b = channel(2, 1)?;
                Some(Color::rgb(r * 17, g * 17, b * 17))
            }
            6 => Some(Color::rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            _ => None,
        }
    }

    /// Accent lookup that never fails.
    pub fn accent(s: &str) -> Self {
        Color::from_hex(s).unwrap_or(Color::FALLBACK_ACCENT)
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Elements
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn svg_value(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub x: f32,
    pub baseline: f32,
    pub content: String,
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size_px: f32,
    pub italic: bool,
    pub color: Color,
    pub anchor: TextAnchor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        fill: Color,
    },
    /// Outline-only rectangle (pill borders).
    Frame {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        stroke: Color,
        stroke_width: f32,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: Color,
    },
    Polygon {
        points: Vec<(f32, f32)>,
        fill: Color,
    },
    Text(TextRun),
}

// ────────────────────────────────────────────────────────────────────────────
// Surface
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
    pub elements: Vec<Element>,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Surface {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Current paint position. Pair with `insert_at` to draw a background whose size is
    /// only known after its content has flowed.
    pub fn mark(&self) -> usize {
        self.elements.len()
    }

    /// Inserts `element` at a position previously returned by `mark`, so it paints
    /// beneath everything drawn since then but above everything drawn before.
    pub fn insert_at(&mut self, mark: usize, element: Element) {
        let mark = mark.min(self.elements.len());
        self.elements.insert(mark, element);
    }

    /// Grows the surface to at least `content_bottom`. Never shrinks below the initial height.
    pub fn fit_height(&mut self, content_bottom: f32) {
        if content_bottom > self.height {
            self.height = content_bottom.ceil();
        }
    }

    /// Text of every run, in paint order.
    #[cfg(test)]
    pub fn text_content(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Text(run) => Some(run.content.as_str()),
                _ => None,
            })
            .collect()
    }

    #[cfg(test)]
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Serializes the surface as a standalone SVG document on a white page.
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(256 + self.elements.len() * 160);
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(self.width),
            h = fmt_num(self.height),
        );
        let _ = write!(
            out,
            r##"<rect x="0" y="0" width="{}" height="{}" fill="#ffffff"/>"##,
            fmt_num(self.width),
            fmt_num(self.height),
        );
        for element in &self.elements {
            write_element(&mut out, element);
        }
        out.push_str("</svg>");
        out
    }
}

fn write_element(out: &mut String, element: &Element) {
    match element {
        Element::Rect {
            x,
            y,
            width,
            height,
            radius,
            fill,
        } => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}"{}/>"#,
                fmt_num(*x),
                fmt_num(*y),
                fmt_num(*width),
                fmt_num(*height),
                fmt_num(*radius),
                fill_attrs(fill),
            );
        }
        Element::Frame {
            x,
            y,
            width,
            height,
            radius,
            stroke,
            stroke_width,
        } => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                fmt_num(*x),
                fmt_num(*y),
                fmt_num(*width),
                fmt_num(*height),
                fmt_num(*radius),
                stroke.to_hex(),
                fmt_num(*stroke_width),
            );
        }
        Element::Circle { cx, cy, r, fill } => {
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}"{}/>"#,
                fmt_num(*cx),
                fmt_num(*cy),
                fmt_num(*r),
                fill_attrs(fill),
            );
        }
        Element::Polygon { points, fill } => {
            let pts: Vec<String> = points
                .iter()
                .map(|(x, y)| format!("{},{}", fmt_num(*x), fmt_num(*y)))
                .collect();
            let _ = write!(
                out,
                r#"<polygon points="{}"{}/>"#,
                pts.join(" "),
                fill_attrs(fill)
            );
        }
        Element::Text(run) => {
            if run.content.is_empty() {
                return;
            }
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" text-anchor="{}"{}{}>{}</text>"#,
                fmt_num(run.x),
                fmt_num(run.baseline),
                escape(run.family.css_stack()),
                fmt_num(run.size_px),
                run.weight.css_value(),
                run.anchor.svg_value(),
                if run.italic { r#" font-style="italic""# } else { "" },
                fill_attrs(&run.color),
                escape(run.content.as_str()),
            );
        }
    }
}

fn fill_attrs(color: &Color) -> String {
    if color.alpha >= 1.0 {
        format!(r#" fill="{}""#, color.to_hex())
    } else {
        format!(
            r#" fill="{}" fill-opacity="{}""#,
            color.to_hex(),
            fmt_num(color.alpha)
        )
    }
}

/// Two decimals, trailing zeros trimmed, so output is stable and compact.
fn fmt_num(v: f32) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
