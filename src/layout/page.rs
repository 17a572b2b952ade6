//! Recorded page descriptions.
//!
//! The layout engines emit fully positioned draw operations into pages; a
//! `Document` is the finished recording plus its suggested file name. Playing
//! a document replays the operations onto any [`DrawSurface`] in order.

use super::surface::{Align, Color, DrawSurface, Point, Rect, TextStyle};

/// One positioned drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
    },
    Line {
        from: Point,
        to: Point,
    },
    Text {
        content: String,
        at: Point,
        style: TextStyle,
        align: Align,
    },
}

impl DrawOp {
    /// Lowest page coordinate this op reaches (y grows downward).
    pub fn bottom_extent(&self) -> f64 {
        match self {
            Self::FillRect { rect, .. } | Self::StrokeRect { rect } => rect.bottom(),
            Self::Line { from, to } => from.y.max(to.y),
            Self::Text { at, .. } => at.y,
        }
    }
}

/// One page of recorded operations, drawn in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    ops: Vec<DrawOp>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    pub fn stroke_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::StrokeRect { rect });
    }

    pub fn line(&mut self, from: Point, to: Point) {
        self.ops.push(DrawOp::Line { from, to });
    }

    pub fn text(
        &mut self,
        content: impl Into<String>,
        at: Point,
        style: TextStyle,
        align: Align,
    ) {
        self.ops.push(DrawOp::Text {
            content: content.into(),
            at,
            style,
            align,
        });
    }

    /// Lowest coordinate over all ops; 0 for an empty page.
    pub fn bottom_extent(&self) -> f64 {
        self.ops
            .iter()
            .map(DrawOp::bottom_extent)
            .fold(0.0_f64, f64::max)
    }
}

/// A finished, fully positioned document ready for any drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pages: Vec<Page>,
    suggested_name: String,
}

impl Document {
    pub fn new(pages: Vec<Page>, suggested_name: impl Into<String>) -> Self {
        Self {
            pages,
            suggested_name: suggested_name.into(),
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// File name the export should use, without extension.
    pub fn suggested_name(&self) -> &str {
        &self.suggested_name
    }

    /// Replay every operation onto the surface and hand over the name.
    pub fn play<S: DrawSurface>(&self, surface: &mut S) {
        for page in &self.pages {
            for op in page.ops() {
                match op {
                    DrawOp::FillRect { rect, color } => surface.fill_rect(*rect, *color),
                    DrawOp::StrokeRect { rect } => surface.stroke_rect(*rect),
                    DrawOp::Line { from, to } => surface.line(*from, *to),
                    DrawOp::Text {
                        content,
                        at,
                        style,
                        align,
                    } => surface.text(content, *at, style, *align),
                }
            }
        }
        surface.save_page(&self.suggested_name);
    }
}
