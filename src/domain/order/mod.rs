//! Order domain — the record model and its field contract.

mod convert;
pub mod wire;

use crate::error::LedgerError;
use crate::shared::{OrderId, OrderStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── OrderRecord ─────────────────────────────────────────────────────────────

/// A validated, ledger-owned work order.
///
/// `id` is permanent; `sequence_number` is a position-derived display number
/// the ledger recomputes on every structural change. Free-text fields are
/// mutated only by whole-record replacement, `status` through its own
/// operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRecord {
    pub id: OrderId,
    pub sequence_number: u32,
    pub invoice_number: Option<String>,
    pub created_date: NaiveDate,
    pub description: String,
    pub quantity: String,
    pub client_name: String,
    pub commercial_agent: String,
    pub section: String,
    pub is_eco_flagged: bool,
    pub status: OrderStatus,
}

// ─── OrderFormData ───────────────────────────────────────────────────────────

/// Raw form input for creating or replacing a record.
///
/// Callers are expected to block submission client-side, but the model
/// re-validates: `description`, `client_name` and `section` must be non-empty
/// after trimming. `quantity` and `commercial_agent` may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderFormData {
    pub description: String,
    pub quantity: String,
    pub client_name: String,
    pub commercial_agent: String,
    pub section: String,
    pub is_eco_flagged: bool,
    /// Overrides the creation date; `None` means today. Replacement ignores it.
    pub created_date: Option<NaiveDate>,
}

impl OrderFormData {
    /// Checks required fields in declaration order and reports the first
    /// missing one.
    pub fn validate(&self) -> Result<(), LedgerError> {
        for (field, value) in [
            ("description", &self.description),
            ("client_name", &self.client_name),
            ("section", &self.section),
        ] {
            if value.trim().is_empty() {
                return Err(LedgerError::Validation { field });
            }
        }
        Ok(())
    }
}
