//! Query view — derived, read-only projections of the ledger.
//!
//! Rebuilt from scratch on every call. The ledger is small; correctness and
//! the absence of cache-invalidation state matter more than throughput here.

use crate::domain::order::OrderRecord;
use crate::shared::OrderStatus;

// ─── OrderFilter ─────────────────────────────────────────────────────────────

/// Filter criteria for the ledger view. All present criteria must hold
/// simultaneously (logical AND); an empty filter passes everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    /// Case-insensitive substring of the client name.
    pub client_contains: Option<String>,
    /// Substring of the decimal string form of the sequence number, not a
    /// numeric comparison: "1" matches 1, 10, 11, 21…
    pub sequence_contains: Option<String>,
    /// Exact status match.
    pub status: Option<OrderStatus>,
}

impl OrderFilter {
    pub fn matches(&self, record: &OrderRecord) -> bool {
        if let Some(needle) = &self.client_contains {
            if !record
                .client_name
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(needle) = &self.sequence_contains {
            if !record.sequence_number.to_string().contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        true
    }
}

// ─── SortKey ─────────────────────────────────────────────────────────────────

/// Which sort policy the view applies. Both exist as legitimate product
/// variants; a view is configured with exactly one, never a mix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Numeric sequence number, highest (newest) first. The default.
    #[default]
    SequenceDesc,
    /// Creation date, newest first. The historical variant; same-day ties
    /// fall back to sequence descending so output stays deterministic.
    CreatedDateDesc,
}

// ─── QueryView ───────────────────────────────────────────────────────────────

/// A configured projection: filter + sort over a ledger snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryView {
    pub sort: SortKey,
}

impl QueryView {
    pub fn new(sort: SortKey) -> Self {
        Self { sort }
    }

    /// Pure function of (records, filter): identical inputs give an
    /// identical ordered sequence.
    pub fn compute(&self, records: &[OrderRecord], filter: &OrderFilter) -> Vec<OrderRecord> {
        let mut out: Vec<OrderRecord> = records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        match self.sort {
            SortKey::SequenceDesc => {
                out.sort_by(|a, b| b.sequence_number.cmp(&a.sequence_number));
            }
            SortKey::CreatedDateDesc => {
                out.sort_by(|a, b| {
                    b.created_date
                        .cmp(&a.created_date)
                        .then_with(|| b.sequence_number.cmp(&a.sequence_number))
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::OrderId;
    use chrono::NaiveDate;

    fn record(seq: u32, client: &str, day: u32, status: OrderStatus) -> OrderRecord {
        OrderRecord {
            id: OrderId::new(),
            sequence_number: seq,
            invoice_number: None,
            created_date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            description: "Brochuras".into(),
            quantity: "100".into(),
            client_name: client.into(),
            commercial_agent: String::new(),
            section: "Impressão".into(),
            is_eco_flagged: false,
            status,
        }
    }

    fn sample() -> Vec<OrderRecord> {
        vec![
            record(11, "Padaria Sul", 3, OrderStatus::Pending),
            record(10, "Clínica Boa Vista", 2, OrderStatus::Completed),
            record(2, "padaria do bairro", 2, OrderStatus::Pending),
            record(1, "Oficina Martins", 1, OrderStatus::Cancelled),
        ]
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let view = QueryView::default();
        let out = view.compute(&sample(), &OrderFilter::default());
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_client_filter_is_case_insensitive() {
        let view = QueryView::default();
        let filter = OrderFilter {
            client_contains: Some("PADARIA".into()),
            ..Default::default()
        };
        let out = view.compute(&sample(), &filter);
        let seqs: Vec<u32> = out.iter().map(|r| r.sequence_number).collect();
        assert_eq!(seqs, vec![11, 2]);
    }

    #[test]
    fn test_sequence_filter_matches_decimal_substring() {
        let view = QueryView::default();
        let filter = OrderFilter {
            sequence_contains: Some("1".into()),
            ..Default::default()
        };
        let out = view.compute(&sample(), &filter);
        let seqs: Vec<u32> = out.iter().map(|r| r.sequence_number).collect();
        assert_eq!(seqs, vec![11, 10, 1], "\"1\" matches 11, 10 and 1 but not 2");
    }

    #[test]
    fn test_filters_combine_with_and() {
        let view = QueryView::default();
        let filter = OrderFilter {
            client_contains: Some("padaria".into()),
            status: Some(OrderStatus::Pending),
            sequence_contains: Some("1".into()),
        };
        let out = view.compute(&sample(), &filter);
        let seqs: Vec<u32> = out.iter().map(|r| r.sequence_number).collect();
        assert_eq!(seqs, vec![11]);
    }

    #[test]
    fn test_sequence_sort_is_numeric_not_lexicographic() {
        let view = QueryView::new(SortKey::SequenceDesc);
        let out = view.compute(&sample(), &OrderFilter::default());
        let seqs: Vec<u32> = out.iter().map(|r| r.sequence_number).collect();
        assert_eq!(seqs, vec![11, 10, 2, 1]);
    }

    #[test]
    fn test_date_sort_variant_breaks_ties_by_sequence() {
        let view = QueryView::new(SortKey::CreatedDateDesc);
        let out = view.compute(&sample(), &OrderFilter::default());
        let seqs: Vec<u32> = out.iter().map(|r| r.sequence_number).collect();
        assert_eq!(seqs, vec![11, 10, 2, 1]);
    }

    #[test]
    fn test_compute_is_pure() {
        let view = QueryView::default();
        let records = sample();
        let filter = OrderFilter {
            status: Some(OrderStatus::Pending),
            ..Default::default()
        };
        assert_eq!(
            view.compute(&records, &filter),
            view.compute(&records, &filter)
        );
    }
}
