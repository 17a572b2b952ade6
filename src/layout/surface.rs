//! Drawing-surface contract and text measurement.
//!
//! The layout engine is platform-free: it never touches a PDF library or the
//! filesystem. Everything it needs from the output device is behind these
//! traits, so any backend that can fill rectangles, draw lines and place text
//! can render a document.

// ─── Geometry ────────────────────────────────────────────────────────────────

/// A point in page space, millimetres from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle, origin at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }
}

// ─── Styling ─────────────────────────────────────────────────────────────────

/// 8-bit RGB fill/text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
}

/// Text style as far as layout cares: size drives the character advance used
/// for wrapping, the rest is passed through to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_pt: f64,
    pub bold: bool,
    pub color: Color,
}

impl TextStyle {
    pub const fn regular(size_pt: f64) -> Self {
        Self {
            size_pt,
            bold: false,
            color: Color::BLACK,
        }
    }

    pub const fn bold(size_pt: f64) -> Self {
        Self {
            size_pt,
            bold: true,
            color: Color::BLACK,
        }
    }

    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Horizontal anchoring of a text run relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

// ─── Traits ──────────────────────────────────────────────────────────────────

/// Word-wraps text to a maximum width in millimetres.
///
/// Layout runs entirely off this measurement, so the measurer a document was
/// laid out with must be the one its surface renders with, or line counts
/// drift.
pub trait TextMeasurer {
    fn wrap(&self, text: &str, style: &TextStyle, max_width: f64) -> Vec<String>;
}

/// The primitive drawing surface a document plays back onto.
pub trait DrawSurface: TextMeasurer {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect);
    fn line(&mut self, from: Point, to: Point);
    fn text(&mut self, content: &str, at: Point, style: &TextStyle, align: Align);
    /// Finish the document under the suggested file name (no extension).
    fn save_page(&mut self, suggested_name: &str);
}

// ─── CharGridMeasurer ────────────────────────────────────────────────────────

const PT_TO_MM: f64 = 0.352_778;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Advance {
    /// Fraction of the font size, the usual approximation for proportional text.
    Em(f64),
    /// Absolute width per character in millimetres, independent of style.
    Fixed(f64),
}

/// Deterministic greedy word-wrapper on a fixed character advance.
///
/// Good enough for forms whose fonts the embedder controls, and exactly
/// reproducible in tests. Words wider than a whole line are hard-split at
/// character boundaries rather than overflowing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharGridMeasurer {
    advance: Advance,
}

impl CharGridMeasurer {
    /// Default advance: 0.5 em, a serviceable Helvetica-like average.
    pub const fn new() -> Self {
        Self {
            advance: Advance::Em(0.5),
        }
    }

    /// Every character exactly `width_mm` wide, whatever the style says.
    pub const fn fixed(width_mm: f64) -> Self {
        Self {
            advance: Advance::Fixed(width_mm),
        }
    }

    fn char_width(&self, style: &TextStyle) -> f64 {
        match self.advance {
            Advance::Em(em) => style.size_pt * PT_TO_MM * em,
            Advance::Fixed(mm) => mm,
        }
    }
}

impl Default for CharGridMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for CharGridMeasurer {
    fn wrap(&self, text: &str, style: &TextStyle, max_width: f64) -> Vec<String> {
        let per_line = (max_width / self.char_width(style)).floor() as usize;
        let per_line = per_line.max(1);

        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in text.split_whitespace() {
            let word_len = word.chars().count();

            if word_len > per_line {
                // Flush, then hard-split the oversized word.
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let chars: Vec<char> = word.chars().collect();
                for chunk in chars.chunks(per_line) {
                    let piece: String = chunk.iter().collect();
                    if chunk.len() == per_line {
                        lines.push(piece);
                    } else {
                        current_len = chunk.len();
                        current = piece;
                    }
                }
                continue;
            }

            let needed = if current_len == 0 { word_len } else { current_len + 1 + word_len };
            if needed > per_line {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
                current_len = word_len;
            } else {
                if current_len > 0 {
                    current.push(' ');
                }
                current.push_str(word);
                current_len = needed;
            }
        }
        if current_len > 0 {
            lines.push(current);
        }
        lines
    }
}
