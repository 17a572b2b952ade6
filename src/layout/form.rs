//! Single-record form mode — one printable work-order sheet.
//!
//! Geometry is a running cursor that only ever advances. The description
//! block reserves exactly as many lines as the measurer reports, every later
//! element starts below it, and the outer frame's height is derived from the
//! final cursor position rather than fixed.

use super::page::{Document, Page};
use super::surface::{Align, Color, Point, Rect, TextMeasurer, TextStyle};
use super::{
    LayoutEngine, BANNER_ECO, BANNER_STANDARD, CONTENT_WIDTH, FRAME_MARGIN, LINE_HEIGHT, MARGIN,
};
use crate::domain::order::OrderRecord;
use crate::shared::fmt;

const BANNER_HEIGHT: f64 = 12.0;
const BANNER_TITLE: &str = "Requisição de Serviço";
const BANNER_TITLE_ECO: &str = "Requisição de Serviço (Ecológico)";
const BANNER_STYLE: TextStyle = TextStyle::bold(13.0).with_color(Color::WHITE);

const LABEL_STYLE: TextStyle = TextStyle::bold(9.0);
const VALUE_STYLE: TextStyle = TextStyle::regular(9.0);

/// Horizontal inset of content inside the frame.
const PAD: f64 = 3.0;
/// Value text starts this far right of its label.
const LABEL_OFFSET: f64 = 38.0;
/// Gap after a label/value row.
const ROW_GAP: f64 = 2.0;

/// The deliveries/invoices sub-table is always present and always empty:
/// it is filled in by hand after printing.
const DELIVERY_ROWS: usize = 10;
const DELIVERY_ROW_H: f64 = 6.0;

impl<M: TextMeasurer> LayoutEngine<M> {
    /// Lay out one order as a printable form.
    ///
    /// Banner, label/value grid, measured description block, separator,
    /// remaining field rows, the empty deliveries sub-table and a derived
    /// outer frame, in that order, on a single page.
    pub fn order_form(&self, record: &OrderRecord) -> Document {
        let mut page = Page::new();
        let mut y = MARGIN;

        // Banner. Color and title follow the eco flag.
        let (banner_color, banner_title) = if record.is_eco_flagged {
            (BANNER_ECO, BANNER_TITLE_ECO)
        } else {
            (BANNER_STANDARD, BANNER_TITLE)
        };
        page.fill_rect(
            Rect::new(MARGIN, y, CONTENT_WIDTH, BANNER_HEIGHT),
            banner_color,
        );
        page.text(
            banner_title,
            Point::new(MARGIN + CONTENT_WIDTH / 2.0, y + BANNER_HEIGHT / 2.0 + 1.5),
            BANNER_STYLE,
            Align::Center,
        );
        y += BANNER_HEIGHT;

        // The frame starts at the banner's bottom edge; its height falls out
        // of the final cursor position.
        let frame_top = y;
        let left = MARGIN + PAD;
        let right_col = MARGIN + CONTENT_WIDTH / 2.0 + PAD;
        y += PAD + LINE_HEIGHT;

        Self::label_value(&mut page, left, y, "Data", &fmt::display_date(record.created_date));
        Self::label_value(&mut page, right_col, y, "N.º", &record.sequence_number.to_string());
        y += ROW_GAP + LINE_HEIGHT;

        if self.capabilities().invoice_number {
            if let Some(invoice) = &record.invoice_number {
                Self::label_value(&mut page, left, y, "Fatura", invoice);
                y += ROW_GAP + LINE_HEIGHT;
            }
        }

        // Description block: label line, then exactly the measured number of
        // wrapped lines of vertical space.
        page.text(
            "Artigo/Serviço:",
            Point::new(left, y),
            LABEL_STYLE,
            Align::Left,
        );
        y += LINE_HEIGHT;
        let desc_width = CONTENT_WIDTH - 2.0 * PAD;
        let lines = self
            .measurer()
            .wrap(&record.description, &VALUE_STYLE, desc_width);
        for line in &lines {
            page.text(line.clone(), Point::new(left, y), VALUE_STYLE, Align::Left);
            y += LINE_HEIGHT;
        }
        if lines.is_empty() {
            // Keep one blank line so the block never collapses to nothing.
            y += LINE_HEIGHT;
        }
        y += ROW_GAP;

        // Separator between the description and the field grid.
        page.line(
            Point::new(MARGIN, y),
            Point::new(MARGIN + CONTENT_WIDTH, y),
        );
        y += PAD + LINE_HEIGHT;

        Self::label_value(&mut page, left, y, "Cliente", &record.client_name);
        Self::label_value(&mut page, right_col, y, "Secção", &record.section);
        y += ROW_GAP + LINE_HEIGHT;

        Self::label_value(&mut page, left, y, "Quantidade", &record.quantity);
        if self.capabilities().commercial_agent {
            Self::label_value(&mut page, right_col, y, "Agente Comercial", &record.commercial_agent);
        }
        y += ROW_GAP + LINE_HEIGHT;

        Self::label_value(&mut page, left, y, "Estado", record.status.label());
        Self::label_value(
            &mut page,
            right_col,
            y,
            "Tipo",
            if record.is_eco_flagged { "Ecológico" } else { "Normal" },
        );
        y += ROW_GAP + LINE_HEIGHT;

        y = Self::deliveries_table(&mut page, y);

        // Outer frame: banner bottom to final cursor plus the fixed margin.
        page.stroke_rect(Rect::new(
            MARGIN,
            frame_top,
            CONTENT_WIDTH,
            y - frame_top + FRAME_MARGIN,
        ));

        let name = if record.sequence_number == 0 {
            "order_na".to_string()
        } else {
            format!("order_{}", record.sequence_number)
        };
        Document::new(vec![page], name)
    }

    fn label_value(page: &mut Page, x: f64, y: f64, label: &str, value: &str) {
        page.text(format!("{label}:"), Point::new(x, y), LABEL_STYLE, Align::Left);
        page.text(value, Point::new(x + LABEL_OFFSET, y), VALUE_STYLE, Align::Left);
    }

    /// Header plus a fixed grid of empty rows. Returns the cursor below the
    /// table's bottom rule.
    fn deliveries_table(page: &mut Page, y: f64) -> f64 {
        let mut y = y + LINE_HEIGHT;
        page.text(
            "Entregas / Faturas",
            Point::new(MARGIN + PAD, y),
            LABEL_STYLE,
            Align::Left,
        );
        y += ROW_GAP;

        let x0 = MARGIN + PAD;
        let width = CONTENT_WIDTH - 2.0 * PAD;
        let col_edges = [x0, x0 + 30.0, x0 + 105.0, x0 + width];
        let header_h = DELIVERY_ROW_H;
        let table_h = header_h + DELIVERY_ROWS as f64 * DELIVERY_ROW_H;

        for (title, edge) in ["Data", "Guia de Remessa", "Fatura"].iter().zip(col_edges) {
            page.text(
                *title,
                Point::new(edge + 1.5, y + header_h - 1.5),
                LABEL_STYLE,
                Align::Left,
            );
        }

        // Horizontal rules: top, under the header, one per empty row.
        let mut rule = y;
        for _ in 0..=(DELIVERY_ROWS + 1) {
            page.line(Point::new(x0, rule), Point::new(x0 + width, rule));
            rule += DELIVERY_ROW_H;
        }
        // Vertical rules over the full table height.
        for edge in col_edges {
            page.line(Point::new(edge, y), Point::new(edge, y + table_h));
        }

        y + table_h
    }
}
