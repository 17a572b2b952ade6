//! Wire types for persisted ledger snapshots.
//!
//! The snapshot schema is additive-only: every field added after the first
//! release is optional here and defaulted during conversion, so snapshots
//! written by older schema versions keep loading.

use crate::shared::{OrderId, OrderStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One persisted order record, as stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderSnapshot {
    /// Missing ids (pre-identifier snapshots) are minted fresh on read.
    #[serde(default)]
    pub id: OrderId,
    pub created_date: NaiveDate,
    pub description: String,
    pub client_name: String,
    pub section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commercial_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_eco_flagged: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl OrderSnapshot {
    /// True when any optional field was absent and will take its default.
    pub fn needs_defaulting(&self) -> bool {
        self.quantity.is_none()
            || self.commercial_agent.is_none()
            || self.is_eco_flagged.is_none()
            || self.status.is_none()
    }
}
