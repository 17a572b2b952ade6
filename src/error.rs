//! Unified error types.

use crate::shared::OrderId;
use thiserror::Error;

/// Errors surfaced by ledger mutations.
///
/// Persistence failures never appear here: the in-memory ledger is the source
/// of truth for the session, so a failed save is logged and swallowed at the
/// ledger boundary instead of rolling back the mutation.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A required form field was empty after trimming. Carries the first
    /// missing field in declaration order.
    #[error("missing required field: {field}")]
    Validation { field: &'static str },

    /// The operation targeted an id not present in the ledger. No partial
    /// effect took place.
    #[error("no order with id {id}")]
    NotFound { id: OrderId },
}

/// Errors produced by a [`PersistenceGateway`](crate::persist::PersistenceGateway).
///
/// Consumed inside the ledger (logged, never propagated out of mutations)
/// and by embedders that drive the gateway directly.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("storage I/O failed: {0}")]
    Io(String),

    #[error("snapshot codec error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("storage unavailable")]
    Unavailable,
}
