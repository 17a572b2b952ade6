//! Ledger — the authoritative, app-owned collection of order records.
//!
//! Held newest-first. Sequence numbers are never a stored counter: they are
//! recomputed from position after every structural change, which keeps the
//! numbering a dense `1..=N` with the newest record always on top, and makes
//! it independent of the order a snapshot happened to be stored in.

use crate::domain::order::{wire, OrderFormData, OrderRecord};
use crate::error::LedgerError;
use crate::persist::{PersistenceGateway, Snapshot};
use crate::shared::{OrderId, OrderStatus};
use chrono::Local;

/// Single-writer order ledger.
///
/// All mutations complete synchronously before the next is issued; there is
/// no locking because there is no concurrent access. Persistence is
/// best-effort: a failed save is logged and swallowed, the in-memory state
/// stays the source of truth for the session.
pub struct Ledger<G: PersistenceGateway> {
    records: Vec<OrderRecord>,
    gateway: G,
}

impl<G: PersistenceGateway> Ledger<G> {
    /// Empty ledger over a gateway, without touching storage.
    pub fn new(gateway: G) -> Self {
        Self {
            records: Vec::new(),
            gateway,
        }
    }

    /// Load whatever the gateway has. A failed or absent load yields an
    /// empty ledger; partial data is preferred over no data.
    pub fn open(gateway: G) -> Self {
        let mut ledger = Self::new(gateway);
        match ledger.gateway.load() {
            Ok(Some(snapshot)) => ledger.hydrate(snapshot),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!("snapshot load failed, starting empty: {err}");
            }
        }
        ledger
    }

    // ─── Reads ───────────────────────────────────────────────────────────────

    /// Records in canonical newest-first order.
    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &OrderId) -> Option<&OrderRecord> {
        self.records.iter().find(|r| r.id == *id)
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    // ─── Mutations ───────────────────────────────────────────────────────────

    /// Create a record from form input and insert it at the head.
    ///
    /// Assigns a fresh permanent id, `sequence_number = len + 1` and
    /// `Pending` status. Cannot fail once the input validates.
    pub fn add(&mut self, input: OrderFormData) -> Result<OrderRecord, LedgerError> {
        input.validate()?;

        let record = OrderRecord {
            id: OrderId::new(),
            sequence_number: self.records.len() as u32 + 1,
            invoice_number: None,
            created_date: input
                .created_date
                .unwrap_or_else(|| Local::now().date_naive()),
            description: input.description,
            quantity: input.quantity,
            client_name: input.client_name,
            commercial_agent: input.commercial_agent,
            section: input.section,
            is_eco_flagged: input.is_eco_flagged,
            status: OrderStatus::Pending,
        };
        self.records.insert(0, record.clone());
        self.persist();
        Ok(record)
    }

    /// Remove a record and renumber every survivor.
    pub fn remove(&mut self, id: &OrderId) -> Result<(), LedgerError> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == *id)
            .ok_or(LedgerError::NotFound { id: *id })?;
        self.records.remove(pos);
        self.renumber();
        self.persist();
        Ok(())
    }

    /// Replace only the status, in place. Position and sequence number are
    /// untouched; any status may follow any other.
    pub fn set_status(&mut self, id: &OrderId, status: OrderStatus) -> Result<(), LedgerError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or(LedgerError::NotFound { id: *id })?;
        record.status = status;
        self.persist();
        Ok(())
    }

    /// Replace the free-text fields of an existing record.
    ///
    /// `id`, `sequence_number`, `created_date`, `invoice_number` and
    /// `status` survive; the form's date override is ignored here.
    pub fn replace(&mut self, id: &OrderId, input: OrderFormData) -> Result<(), LedgerError> {
        input.validate()?;
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or(LedgerError::NotFound { id: *id })?;
        record.description = input.description;
        record.quantity = input.quantity;
        record.client_name = input.client_name;
        record.commercial_agent = input.commercial_agent;
        record.section = input.section;
        record.is_eco_flagged = input.is_eco_flagged;
        self.persist();
        Ok(())
    }

    // ─── Snapshots ───────────────────────────────────────────────────────────

    /// Current serialized form, newest-first.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.records.iter().map(wire::OrderSnapshot::from).collect())
    }

    /// Replace the in-memory state from a snapshot.
    ///
    /// Missing optional fields take their defaults (`Pending` status, empty
    /// agent). Numbering is recomputed from position afterwards, so stored
    /// sequence numbers are advisory only.
    pub fn hydrate(&mut self, snapshot: Snapshot) {
        let defaulted = snapshot
            .records()
            .iter()
            .filter(|s| s.needs_defaulting())
            .count();
        if defaulted > 0 {
            tracing::warn!(defaulted, "snapshot records upgraded with defaults");
        }
        self.records = snapshot
            .into_records()
            .into_iter()
            .map(OrderRecord::from)
            .collect();
        self.renumber();
    }

    /// Best-effort save. Never fails the mutation that triggered it.
    pub fn persist(&mut self) {
        let snapshot = self.snapshot();
        if let Err(err) = self.gateway.save(&snapshot) {
            tracing::warn!("persist failed, in-memory ledger unaffected: {err}");
        }
    }

    /// Recompute all sequence numbers from position: the record at
    /// newest-first index `i` gets `len - i`, i.e. a dense `1..=N` counting
    /// up from the oldest end. Idempotent.
    fn renumber(&mut self) {
        let len = self.records.len();
        for (i, record) in self.records.iter_mut().enumerate() {
            record.sequence_number = (len - i) as u32;
        }
        tracing::debug!(len, "ledger renumbered");
    }
}
