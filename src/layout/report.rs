//! Ledger report mode — the full filtered view as a fixed-column table.

use super::page::{Document, Page};
use super::surface::{Align, Color, Point, Rect, TextMeasurer, TextStyle};
use super::{
    LayoutEngine, CONTENT_WIDTH, HEADER_FILL, LINE_HEIGHT, MARGIN, PAGE_HEIGHT, PAGE_WIDTH,
    ROW_ALT_FILL,
};
use crate::domain::order::OrderRecord;
use crate::shared::fmt;
use chrono::NaiveDateTime;

const TITLE: &str = "Registo de Requisições";
const TITLE_STYLE: TextStyle = TextStyle::bold(14.0);
const STAMP_STYLE: TextStyle = TextStyle::regular(9.0);
const BODY_STYLE: TextStyle = TextStyle::regular(8.0);
const HEAD_STYLE: TextStyle = TextStyle::bold(8.0).with_color(Color::WHITE);

/// Inner padding of every table cell.
const CELL_PAD: f64 = 1.5;
/// Baseline sits this far above the line's bottom edge.
const BASELINE_LIFT: f64 = 1.2;

/// Index of the description column; the only one whose cell wraps.
const DESC_COL: usize = 3;

struct Column {
    title: &'static str,
    width: f64,
}

impl<M: TextMeasurer> LayoutEngine<M> {
    /// Lay out the ledger report: title block, generation-timestamp line and
    /// one table row per record, newest-first as given.
    ///
    /// All column widths are fixed except that the description cell wraps and
    /// its row grows to hold every wrapped line. Rows that would cross the
    /// bottom margin move to a fresh page with the header row repeated.
    pub fn ledger_report(
        &self,
        records: &[OrderRecord],
        generated_at: NaiveDateTime,
    ) -> Document {
        let columns = self.report_columns();
        let mut pages = Vec::new();
        let mut page = Page::new();
        let mut y = MARGIN;

        page.text(
            TITLE,
            Point::new(PAGE_WIDTH / 2.0, y + 6.0),
            TITLE_STYLE,
            Align::Center,
        );
        y += 10.0;
        page.text(
            format!("Gerado em {}", fmt::display_timestamp(generated_at)),
            Point::new(MARGIN, y + 4.0),
            STAMP_STYLE,
            Align::Left,
        );
        y += 8.0;

        y = Self::header_row(&mut page, y, &columns);

        for (index, record) in records.iter().enumerate() {
            let desc_width = columns[DESC_COL].width - 2.0 * CELL_PAD;
            let desc_lines = self
                .measurer()
                .wrap(&record.description, &BODY_STYLE, desc_width);
            let row_h = desc_lines.len().max(1) as f64 * LINE_HEIGHT + 2.0 * CELL_PAD;

            if y + row_h > PAGE_HEIGHT - MARGIN {
                pages.push(std::mem::take(&mut page));
                y = Self::header_row(&mut page, MARGIN, &columns);
            }

            if index % 2 == 1 {
                page.fill_rect(Rect::new(MARGIN, y, CONTENT_WIDTH, row_h), ROW_ALT_FILL);
            }

            let cells = self.row_cells(record);
            let mut x = MARGIN;
            for (ci, (col, cell)) in columns.iter().zip(&cells).enumerate() {
                let inner = col.width - 2.0 * CELL_PAD;
                let baseline = |line: usize| {
                    y + CELL_PAD + (line as f64 + 1.0) * LINE_HEIGHT - BASELINE_LIFT
                };
                if ci == DESC_COL {
                    for (k, line) in desc_lines.iter().enumerate() {
                        page.text(
                            line.clone(),
                            Point::new(x + CELL_PAD, baseline(k)),
                            BODY_STYLE,
                            Align::Left,
                        );
                    }
                } else {
                    // Single-line cells clip to their first wrapped line.
                    let clipped = self
                        .measurer()
                        .wrap(cell, &BODY_STYLE, inner)
                        .into_iter()
                        .next()
                        .unwrap_or_default();
                    page.text(
                        clipped,
                        Point::new(x + CELL_PAD, baseline(0)),
                        BODY_STYLE,
                        Align::Left,
                    );
                }
                page.stroke_rect(Rect::new(x, y, col.width, row_h));
                x += col.width;
            }

            y += row_h;
        }

        pages.push(page);
        Document::new(
            pages,
            format!("orders_{}", fmt::iso_date(generated_at.date())),
        )
    }

    /// Filled header row. Returns the cursor below it.
    fn header_row(page: &mut Page, y: f64, columns: &[Column]) -> f64 {
        let row_h = LINE_HEIGHT + 2.0 * CELL_PAD;
        page.fill_rect(Rect::new(MARGIN, y, CONTENT_WIDTH, row_h), HEADER_FILL);
        let mut x = MARGIN;
        for col in columns {
            page.text(
                col.title,
                Point::new(x + CELL_PAD, y + CELL_PAD + LINE_HEIGHT - BASELINE_LIFT),
                HEAD_STYLE,
                Align::Left,
            );
            x += col.width;
        }
        y + row_h
    }

    /// Fixed column set; the agent column exists only under its capability
    /// flag and its width goes to the description column otherwise.
    fn report_columns(&self) -> Vec<Column> {
        let agent = self.capabilities().commercial_agent;
        let mut columns = vec![
            Column { title: "Data", width: 18.0 },
            Column { title: "N.º", width: 10.0 },
            Column { title: "Eco", width: 8.0 },
            Column {
                title: "Artigo/Serviço",
                width: if agent { 58.0 } else { 82.0 },
            },
            Column { title: "Qtd.", width: 14.0 },
            Column { title: "Cliente", width: 30.0 },
        ];
        if agent {
            columns.push(Column { title: "Agente", width: 24.0 });
        }
        columns.push(Column { title: "Secção", width: 16.0 });
        columns.push(Column { title: "Estado", width: 12.0 });
        columns
    }

    /// Cell strings in column order. The description slot is a placeholder;
    /// its cell is wrapped separately.
    fn row_cells(&self, record: &OrderRecord) -> Vec<String> {
        let mut cells = vec![
            fmt::display_date(record.created_date),
            record.sequence_number.to_string(),
            if record.is_eco_flagged { "Sim" } else { "" }.to_string(),
            String::new(),
            record.quantity.clone(),
            record.client_name.clone(),
        ];
        if self.capabilities().commercial_agent {
            cells.push(record.commercial_agent.clone());
        }
        cells.push(record.section.clone());
        cells.push(record.status.label().to_string());
        cells
    }
}
