//! Static font-metric tables for the two résumé type families.
//!
//! Character widths are in em units (relative to font size). This is an intentional
//! approximation: the exporter rasterizes with whatever matching system font it finds,
//! so the tables only need to be close enough that wrapped lines never overflow their
//! column. Bold weights are modelled as a uniform widening factor.
//!
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Families and weights
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// Humanist sans-serif, used by every arrangement except the elegant one.
    Sans,
    /// Old-style serif for the elegant arrangement.
    Serif,
}

impl FontFamily {
    /// CSS font stack written into the SVG. Generic family last so the rasterizer
    /// can always resolve something.
    pub fn css_stack(&self) -> &'static str {
        match self {
            FontFamily::Sans => "Inter, 'Helvetica Neue', Arial, sans-serif",
            FontFamily::Serif => "'EB Garamond', Georgia, 'Times New Roman', serif",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    Regular,
    Semibold,
    Bold,
    Black,
}

impl FontWeight {
    pub fn css_value(&self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
            FontWeight::Black => 900,
        }
    }

    /// Multiplier applied to regular-weight advance widths.
    fn width_factor(&self) -> f32 {
        match self {
            FontWeight::Light => 0.97,
            FontWeight::Regular => 1.0,
            FontWeight::Semibold => 1.04,
            FontWeight::Bold => 1.07,
            FontWeight::Black => 1.12,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font family.
///
/// `widths[i]` = width of ASCII character `(i + 32)`, covering 0x20 (space) through 0x7E (~).
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the width of a string in em units at regular weight.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static SANS_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.58,
    space_width: 0.25,
};

/// Serif widths run a little wider than the sans table, like Georgia.
static SERIF_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.24, 0.31, 0.40, 0.64, 0.57, 0.81, 0.71, 0.22, 0.37, 0.37, 0.44, 0.64, 0.27, 0.37, 0.27, 0.43,
        // 0     1     2     3     4     5     6     7     8     9
        0.59, 0.43, 0.55, 0.56, 0.58, 0.54, 0.58, 0.51, 0.59, 0.58,
        // :     ;     <     =     >     ?     @
        0.27, 0.27, 0.64, 0.64, 0.64, 0.48, 0.93,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.65, 0.64, 0.73, 0.65, 0.60, 0.72, 0.82, 0.39, 0.52, 0.70, 0.61, 0.93,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.77, 0.74, 0.60, 0.74, 0.70, 0.56, 0.62, 0.76, 0.67, 0.99, 0.71, 0.62, 0.60,
        // [     \     ]     ^     _     `
        0.37, 0.43, 0.37, 0.64, 0.64, 0.50,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.53, 0.56, 0.46, 0.57, 0.48, 0.34, 0.50, 0.59, 0.30, 0.29, 0.54, 0.29, 0.89,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.59, 0.54, 0.57, 0.56, 0.43, 0.44, 0.35, 0.58, 0.50, 0.75, 0.50, 0.50, 0.45,
        // {     |     }     ~
        0.41, 0.35, 0.41, 0.64,
    ],
    average_char_width: 0.60,
    space_width: 0.24,
};

/// Returns the static metric table for a given font family.
pub fn get_metrics(family: FontFamily) -> &'static FontMetricTable {
    match family {
        FontFamily::Sans => &SANS_TABLE,
        FontFamily::Serif => &SERIF_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Measuring and wrapping in pixels
// ────────────────────────────────────────────────────────────────────────────

const WIDTH_EPSILON: f32 = 0.01;

/// Everything needed to measure a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size_px: f32,
}

impl FontSpec {
    /// Rendered width of `s` in pixels.
    pub fn width_of(&self, s: &str) -> f32 {
        get_metrics(self.family).measure_str(s) * self.size_px * self.weight.width_factor()
    }

    fn space_px(&self) -> f32 {
        get_metrics(self.family).space_width * self.size_px * self.weight.width_factor()
    }

    /// Greedy word wrap at `max_width_px`.
    ///
    /// Whitespace runs (including newlines) collapse to a single space, as in a browser.
    /// A word wider than the line is split between characters. Blank input yields no lines.
    pub fn wrap(&self, s: &str, max_width_px: f32) -> Vec<String> {
        // absorbs float drift between summing per-word and per-line widths
        let max_width_px = max_width_px + WIDTH_EPSILON;
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;
        let space = self.space_px();

        for word in s.split_whitespace() {
            let word_w = self.width_of(word);

            if word_w > max_width_px {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let mut pieces = self.split_word(word, max_width_px);
                let tail = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
                current_width = self.width_of(&tail);
                current = tail;
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + space + word_w > max_width_px {
                lines.push(std::mem::replace(&mut current, word.to_string()));
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_w;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }

    fn split_word(&self, word: &str, max_width_px: f32) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut piece = String::new();
        for c in word.chars() {
            let mut candidate = piece.clone();
            candidate.push(c);
            if !piece.is_empty() && self.width_of(&candidate) > max_width_px {
                pieces.push(std::mem::take(&mut piece));
                piece.push(c);
            } else {
                piece = candidate;
            }
        }
        if !piece.is_empty() {
            pieces.push(piece);
        }
        pieces
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sans(size_px: f32) -> FontSpec {
        FontSpec {
            family: FontFamily::Sans,
            weight: FontWeight::Regular,
            size_px,
        }
    }

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(get_metrics(FontFamily::Sans).measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        // "Rust" = R(0.61) + u(0.56) + s(0.44) + t(0.39) = 2.00
        let width = get_metrics(FontFamily::Sans).measure_str("Rust");
        assert!((width - 2.00).abs() < 1e-3, "Rust width should be ~2.00, got {width}");
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(FontFamily::Sans);
        let width = metrics.measure_str("é");
        assert!((width - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_width_scales_with_size_and_weight() {
        let regular = sans(10.0).width_of("Hello");
        let bigger = sans(20.0).width_of("Hello");
        assert!((bigger - 2.0 * regular).abs() < 1e-3);
        let bold = FontSpec {
            weight: FontWeight::Bold,
            ..sans(10.0)
        }
        .width_of("Hello");
        assert!(bold > regular);
    }

    #[test]
    fn test_serif_is_wider_than_sans_for_prose() {
        let text = "Experienced engineer building reliable systems";
        let serif = FontSpec {
            family: FontFamily::Serif,
            ..sans(16.0)
        };
        assert!(serif.width_of(text) > sans(16.0).width_of(text));
    }

    #[test]
    fn test_wrap_blank_is_empty() {
        assert!(sans(16.0).wrap("", 100.0).is_empty());
        assert!(sans(16.0).wrap("  \n\t ", 100.0).is_empty());
    }

    #[test]
    fn test_wrap_fits_each_line_within_width() {
        let font = sans(16.0);
        let text = "Architected a distributed caching layer using consistent hashing, \
                    reducing p99 latency by 40% under peak load";
        let lines = font.wrap(text, 200.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(font.width_of(line) <= 200.01, "line too wide: {line}");
        }
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        let lines = sans(16.0).wrap("a\n\n  b", 500.0);
        assert_eq!(lines, vec!["a b"]);
    }

    #[test]
    fn test_wrap_splits_overlong_word() {
        let font = sans(16.0);
        let word = "x".repeat(80);
        let lines = font.wrap(&word, 100.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(font.width_of(line) <= 100.01);
        }
    }

    #[test]
    fn test_css_values() {
        assert_eq!(FontWeight::Black.css_value(), 900);
        assert!(FontFamily::Serif.css_stack().ends_with("serif"));
    }
}
