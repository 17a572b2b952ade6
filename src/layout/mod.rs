//! Document layout — converts order records into fully positioned page
//! descriptions for a drawing surface.
//!
//! Two rendering modes share one engine: the tabular ledger report
//! ([`LayoutEngine::ledger_report`]) and the single-record form
//! ([`LayoutEngine::order_form`]). Both are pure, total functions of their
//! input: geometry comes out of a forward-only cursor driven by measured
//! text height, so variable-length descriptions push everything below them
//! down instead of overlapping it.

mod form;
pub mod page;
mod report;
pub mod surface;

pub use page::{Document, DrawOp, Page};
pub use surface::{
    Align, CharGridMeasurer, Color, DrawSurface, Point, Rect, TextMeasurer, TextStyle,
};

use crate::shared::Capabilities;

// ─── Page metrics (A4 portrait, millimetres) ─────────────────────────────────

pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;
pub const MARGIN: f64 = 10.0;
pub const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;

/// Vertical advance per wrapped text line.
pub const LINE_HEIGHT: f64 = 5.0;
/// Gap between the last drawn element and the form's outer frame bottom.
pub const FRAME_MARGIN: f64 = 4.0;

// ─── Fixed palette (cosmetic contract, reproduced for format fidelity) ───────

pub const HEADER_FILL: Color = Color::rgb(41, 128, 185);
pub const ROW_ALT_FILL: Color = Color::rgb(240, 240, 240);
pub const BANNER_STANDARD: Color = Color::rgb(21, 101, 192);
pub const BANNER_ECO: Color = Color::rgb(46, 125, 50);

// ─── LayoutEngine ────────────────────────────────────────────────────────────

/// Stateless layout engine, parameterized by the text measurer and the
/// deployment's capability flags.
///
/// Records reaching the engine are already validated upstream; the engine
/// does not re-check content. An empty record set in report mode is not an
/// error, it lays out a header-only document.
#[derive(Debug, Clone)]
pub struct LayoutEngine<M: TextMeasurer = CharGridMeasurer> {
    capabilities: Capabilities,
    measurer: M,
}

impl LayoutEngine<CharGridMeasurer> {
    pub fn new() -> Self {
        Self::with(CharGridMeasurer::new(), Capabilities::default())
    }
}

impl Default for LayoutEngine<CharGridMeasurer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: TextMeasurer> LayoutEngine<M> {
    pub fn with(measurer: M, capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            measurer,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub(crate) fn measurer(&self) -> &M {
        &self.measurer
    }
}
