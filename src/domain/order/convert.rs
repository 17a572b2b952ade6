//! Conversions: snapshot wire types ↔ order domain types.

use super::wire;
use super::OrderRecord;

impl From<wire::OrderSnapshot> for OrderRecord {
    fn from(snap: wire::OrderSnapshot) -> Self {
        OrderRecord {
            id: snap.id,
            // Position-derived; the ledger renumbers right after hydration.
            sequence_number: snap.sequence_number.unwrap_or(0),
            invoice_number: snap.invoice_number,
            created_date: snap.created_date,
            description: snap.description,
            quantity: snap.quantity.unwrap_or_default(),
            client_name: snap.client_name,
            commercial_agent: snap.commercial_agent.unwrap_or_default(),
            section: snap.section,
            is_eco_flagged: snap.is_eco_flagged.unwrap_or(false),
            status: snap.status.unwrap_or_default(),
        }
    }
}

impl From<&OrderRecord> for wire::OrderSnapshot {
    fn from(record: &OrderRecord) -> Self {
        wire::OrderSnapshot {
            id: record.id,
            created_date: record.created_date,
            description: record.description.clone(),
            client_name: record.client_name.clone(),
            section: record.section.clone(),
            sequence_number: Some(record.sequence_number),
            invoice_number: record.invoice_number.clone(),
            quantity: Some(record.quantity.clone()),
            commercial_agent: Some(record.commercial_agent.clone()),
            is_eco_flagged: Some(record.is_eco_flagged),
            status: Some(record.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::OrderStatus;
    use chrono::NaiveDate;

    #[test]
    fn test_legacy_snapshot_defaults() {
        let json = r#"{
            "created_date": "2019-06-02",
            "description": "Etiquetas autocolantes",
            "client_name": "Mercearia Bívar",
            "section": "Corte"
        }"#;
        let snap: wire::OrderSnapshot = serde_json::from_str(json).unwrap();
        assert!(snap.needs_defaulting());

        let record: OrderRecord = snap.into();
        assert_eq!(record.status, OrderStatus::Pending);
        assert_eq!(record.commercial_agent, "");
        assert_eq!(record.quantity, "");
        assert!(!record.is_eco_flagged);
        assert_eq!(
            record.created_date,
            NaiveDate::from_ymd_opt(2019, 6, 2).unwrap()
        );
    }

    #[test]
    fn test_roundtrip_preserves_fields() {
        let record = OrderRecord {
            id: crate::shared::OrderId::new(),
            sequence_number: 7,
            invoice_number: Some("FT 2025/118".into()),
            created_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            description: "Lona publicitária 3x1m".into(),
            quantity: "2".into(),
            client_name: "Café Aliança".into(),
            commercial_agent: "R. Teixeira".into(),
            section: "Grande formato".into(),
            is_eco_flagged: true,
            status: OrderStatus::InProgress,
        };
        let snap = wire::OrderSnapshot::from(&record);
        assert!(!snap.needs_defaulting());
        let back: OrderRecord = snap.into();
        assert_eq!(back, record);
    }
}
