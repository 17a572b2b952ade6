//! # Worklog SDK
//!
//! The order ledger core of the Worklog internal work-order tracker: record
//! model, numbering invariants, query views and printable document layout.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Shared** — Identifier and status newtypes, fixed-locale formatting
//! 2. **Domain** — `OrderRecord`, the `Ledger` and its numbering invariant,
//!    `QueryView` projections
//! 3. **Persist** — The `PersistenceGateway` save/load contract and snapshot
//!    codec; the medium itself belongs to the embedder
//! 4. **Layout** — `LayoutEngine` turning records into positioned page
//!    descriptions for any `DrawSurface`
//!
//! ## Quick Start
//!
//! ```rust
//! use worklog_sdk::prelude::*;
//!
//! let mut ledger = Ledger::new(MemoryGateway::new());
//! let record = ledger.add(OrderFormData {
//!     description: "Cartazes A2 para montra".into(),
//!     quantity: "120".into(),
//!     client_name: "Livraria Horizonte".into(),
//!     commercial_agent: String::new(),
//!     section: "Impressão".into(),
//!     is_eco_flagged: true,
//!     created_date: None,
//! }).unwrap();
//!
//! let view = QueryView::default().compute(ledger.records(), &OrderFilter::default());
//! let form = LayoutEngine::new().order_form(&record);
//! assert_eq!(form.suggested_name(), "order_1");
//! assert_eq!(view.len(), 1);
//! ```
//!
//! The ledger is single-writer and synchronous: every mutation completes
//! before the next is issued, and a failed persist never blocks or rolls
//! back the in-memory state.

// ── Layer 1: Shared ──────────────────────────────────────────────────────────

/// Shared newtypes: identifiers, status, capability flags, formatting.
pub mod shared;

/// Unified error types.
pub mod error;

// ── Layer 2: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): record model, ledger, query views.
pub mod domain;

// ── Layer 3: Persistence contract ────────────────────────────────────────────

/// Save/load gateway contract and snapshot codec.
pub mod persist;

// ── Layer 4: Document layout ─────────────────────────────────────────────────

/// Page-geometry engine for printable reports and forms.
pub mod layout;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Capabilities, OrderId, OrderStatus};

    // Domain types — order
    pub use crate::domain::order::{OrderFormData, OrderRecord};

    // Domain types — ledger + query
    pub use crate::domain::ledger::Ledger;
    pub use crate::domain::query::{OrderFilter, QueryView, SortKey};

    // Errors
    pub use crate::error::{LedgerError, PersistError};

    // Persistence
    pub use crate::persist::{MemoryGateway, PersistenceGateway, Snapshot};

    // Layout engine + surface contract
    pub use crate::layout::{
        Align, CharGridMeasurer, Color, Document, DrawOp, DrawSurface, LayoutEngine, Page, Point,
        Rect, TextMeasurer, TextStyle,
    };
}
