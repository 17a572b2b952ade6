//! Persistence gateway — the ledger's save/load contract.
//!
//! The storage medium is the embedder's concern; this module fixes the
//! contract and the snapshot codec. The codec is deliberately lenient on
//! read: records that fail to decode are skipped with a warning, because
//! partial data beats refusing to load.

use crate::domain::order::wire::OrderSnapshot;
use crate::error::PersistError;
use serde::{Deserialize, Serialize};

// ─── Snapshot ────────────────────────────────────────────────────────────────

/// The ledger's serialized form: an ordered (newest-first) sequence of
/// record snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    records: Vec<OrderSnapshot>,
}

impl Snapshot {
    pub fn new(records: Vec<OrderSnapshot>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[OrderSnapshot] {
        &self.records
    }

    pub fn into_records(self) -> Vec<OrderSnapshot> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize to the stored JSON form.
    pub fn encode(&self) -> Result<Vec<u8>, PersistError> {
        Ok(serde_json::to_vec(&self.records)?)
    }

    /// Decode stored JSON, skipping records that no longer parse.
    ///
    /// The outer array must be intact; inside it, each element is decoded on
    /// its own so one corrupt record cannot take the whole snapshot down.
    pub fn decode(bytes: &[u8]) -> Result<Self, PersistError> {
        let raw: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
        let total = raw.len();
        let mut records = Vec::with_capacity(total);
        for value in raw {
            match serde_json::from_value::<OrderSnapshot>(value) {
                Ok(snap) => records.push(snap),
                Err(err) => {
                    tracing::warn!("skipping undecodable snapshot record: {err}");
                }
            }
        }
        if records.len() < total {
            tracing::warn!(
                kept = records.len(),
                total,
                "snapshot loaded with records dropped"
            );
        }
        Ok(Self { records })
    }
}

// ─── PersistenceGateway ──────────────────────────────────────────────────────

/// Save/load contract handed to the ledger.
///
/// `save` is fire-and-forget from the ledger's point of view: failures are
/// logged by the caller and never block the in-memory mutation.
pub trait PersistenceGateway {
    /// `Ok(None)` means no snapshot has ever been written.
    fn load(&self) -> Result<Option<Snapshot>, PersistError>;

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistError>;
}

// ─── MemoryGateway ───────────────────────────────────────────────────────────

/// In-memory gateway holding the encoded snapshot bytes.
///
/// Ships with the crate for embedding and tests; going through the byte
/// codec (instead of keeping the `Snapshot` value) exercises the same path
/// a real medium would. Failure injection covers the swallowed-save
/// contract.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    stored: Option<Vec<u8>>,
    fail_saves: bool,
    saves: usize,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-existing snapshot bytes (e.g. a legacy fixture).
    pub fn with_stored(bytes: Vec<u8>) -> Self {
        Self {
            stored: Some(bytes),
            ..Self::default()
        }
    }

    /// Make every subsequent `save` fail.
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn stored_bytes(&self) -> Option<&[u8]> {
        self.stored.as_deref()
    }
}

impl PersistenceGateway for MemoryGateway {
    fn load(&self) -> Result<Option<Snapshot>, PersistError> {
        match &self.stored {
            Some(bytes) => Snapshot::decode(bytes).map(Some),
            None => Ok(None),
        }
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistError> {
        if self.fail_saves {
            return Err(PersistError::Unavailable);
        }
        self.stored = Some(snapshot.encode()?);
        self.saves += 1;
        Ok(())
    }
}
