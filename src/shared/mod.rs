//! Shared newtypes and enums used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw snapshot format, so they can be used directly in
//! wire types without conversion overhead.

pub mod fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use ulid::Ulid;

// ─── OrderId ─────────────────────────────────────────────────────────────────

/// Opaque unique identifier for an order record.
///
/// Assigned once at creation and never reused, including after deletions.
/// Serializes transparently as a ULID string. Not the display number — see
/// `sequence_number` on the record for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(Ulid);

impl OrderId {
    /// Mint a fresh identifier.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Ulid::from_str(s)?))
    }
}

impl From<Ulid> for OrderId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

impl Serialize for OrderId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ulid::from_str(&s).map(Self).map_err(serde::de::Error::custom)
    }
}

// ─── OrderStatus ─────────────────────────────────────────────────────────────

/// Status of a work order.
///
/// Any state is reachable from any state; the enumeration itself is the only
/// constraint. `Display` yields the fixed pt-PT label used on printed
/// documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Fixed-locale label printed on documents.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::InProgress => "Em curso",
            Self::Completed => "Concluída",
            Self::Cancelled => "Cancelada",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ─── Capabilities ────────────────────────────────────────────────────────────

/// Which optional fields the deployment actually uses.
///
/// The record schema always carries the optional fields; these flags only
/// control whether views and printed documents show them. Replaces the
/// source's parallel form/list variants with one parameterized pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub commercial_agent: bool,
    pub invoice_number: bool,
}

impl Capabilities {
    /// Every optional field enabled.
    pub const fn full() -> Self {
        Self {
            commercial_agent: true,
            invoice_number: true,
        }
    }

    /// Only the required field set.
    pub const fn minimal() -> Self {
        Self {
            commercial_agent: false,
            invoice_number: false,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_serde_roundtrip() {
        let id = OrderId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_order_id_is_string_transparent() {
        let id = OrderId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert!(json.starts_with('"') && json.ends_with('"'));
    }

    #[test]
    fn test_order_ids_are_unique() {
        let a = OrderId::new();
        let b = OrderId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_status_serde() {
        let s: OrderStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(s, OrderStatus::InProgress);
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"in_progress\"");
    }

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(OrderStatus::Pending.label(), "Pendente");
        assert_eq!(OrderStatus::Cancelled.to_string(), "Cancelada");
    }
}
