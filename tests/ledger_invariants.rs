//! Ledger invariants across arbitrary mutation sequences, plus snapshot
//! migration behavior.

use chrono::NaiveDate;
use proptest::prelude::*;
use worklog_sdk::prelude::*;

fn form(client: &str, day: u32) -> OrderFormData {
    OrderFormData {
        description: "Impressão e acabamento".into(),
        quantity: "50".into(),
        client_name: client.into(),
        commercial_agent: String::new(),
        section: "Oficina".into(),
        is_eco_flagged: false,
        created_date: Some(NaiveDate::from_ymd_opt(2025, 7, day).unwrap()),
    }
}

/// Dense `1..=N` numbering, newest-first position i holding `N - i`, and
/// globally unique ids.
fn assert_numbering(ledger: &Ledger<MemoryGateway>) {
    let n = ledger.len();
    for (i, record) in ledger.records().iter().enumerate() {
        assert_eq!(
            record.sequence_number as usize,
            n - i,
            "record at newest-first position {i} of {n}"
        );
    }
    let mut ids: Vec<OrderId> = ledger.records().iter().map(|r| r.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), n, "duplicate ids in ledger");
}

#[test]
fn spec_example_scenario() {
    // Add A, B, C: newest-first numbering is [3, 2, 1] for C, B, A.
    let mut ledger = Ledger::new(MemoryGateway::new());
    for client in ["A", "B", "C"] {
        ledger.add(form(client, 1)).unwrap();
    }
    let view: Vec<(String, u32)> = ledger
        .records()
        .iter()
        .map(|r| (r.client_name.clone(), r.sequence_number))
        .collect();
    assert_eq!(
        view,
        vec![
            ("C".to_string(), 3),
            ("B".to_string(), 2),
            ("A".to_string(), 1)
        ]
    );

    // Remove B (sequence 2): C and A renumber to [2, 1].
    let b = ledger
        .records()
        .iter()
        .find(|r| r.client_name == "B")
        .unwrap()
        .id;
    ledger.remove(&b).unwrap();
    let view: Vec<(String, u32)> = ledger
        .records()
        .iter()
        .map(|r| (r.client_name.clone(), r.sequence_number))
        .collect();
    assert_eq!(view, vec![("C".to_string(), 2), ("A".to_string(), 1)]);

    // Filtering "1" on [C:2, A:1] returns only A.
    let out = QueryView::default().compute(
        ledger.records(),
        &OrderFilter {
            sequence_contains: Some("1".into()),
            ..Default::default()
        },
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].client_name, "A");
}

#[test]
fn status_round_trip_keeps_identity() {
    let mut ledger = Ledger::new(MemoryGateway::new());
    let created = ledger.add(form("Drogaria Paiva", 3)).unwrap();
    ledger.add(form("Outro Cliente", 4)).unwrap();

    ledger.set_status(&created.id, OrderStatus::InProgress).unwrap();
    ledger.set_status(&created.id, OrderStatus::Completed).unwrap();

    let record = ledger.get(&created.id).unwrap();
    assert_eq!(record.status, OrderStatus::Completed);
    assert_eq!(record.id, created.id);
    assert_eq!(record.sequence_number, created.sequence_number);
}

#[test]
fn legacy_snapshot_defaults_then_reload_is_idempotent() {
    // Pre-status schema: no status, no commercial_agent, no eco flag.
    let legacy = r#"[
        {"created_date": "2018-09-12", "description": "Faixa de inauguração", "client_name": "Sapataria Ideal", "section": "Grande formato"},
        {"created_date": "2018-09-10", "description": "Blocos de notas", "client_name": "Escritório Silva", "section": "Acabamento"}
    ]"#;

    let ledger = Ledger::open(MemoryGateway::with_stored(legacy.as_bytes().to_vec()));
    assert_eq!(ledger.len(), 2);
    for record in ledger.records() {
        assert_eq!(record.status, OrderStatus::Pending);
        assert_eq!(record.commercial_agent, "");
        assert!(!record.is_eco_flagged);
    }
    assert_numbering(&ledger);

    // Save, reload, save again: the effective state and the stored bytes
    // both stabilize after the first migration.
    let mut first = ledger;
    first.persist();
    let bytes1 = first.gateway().stored_bytes().unwrap().to_vec();

    let mut second = Ledger::open(MemoryGateway::with_stored(bytes1.clone()));
    assert_eq!(second.records(), first.records());
    second.persist();
    let bytes2 = second.gateway().stored_bytes().unwrap().to_vec();
    assert_eq!(bytes1, bytes2);
}

#[test]
fn remove_of_missing_id_leaves_everything_unchanged() {
    let mut ledger = Ledger::new(MemoryGateway::new());
    for client in ["A", "B", "C"] {
        ledger.add(form(client, 2)).unwrap();
    }
    let before: Vec<OrderRecord> = ledger.records().to_vec();
    assert!(matches!(
        ledger.remove(&OrderId::new()),
        Err(LedgerError::NotFound { .. })
    ));
    assert_eq!(ledger.records(), &before[..]);
}

// ─── Property tests ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Add,
    /// Remove the record at this newest-first position, modulo current size.
    Remove(usize),
    /// Set the status of the record at this position, modulo current size.
    SetStatus(usize, u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        2 => (0usize..32).prop_map(Op::Remove),
        1 => ((0usize..32), (0u8..4)).prop_map(|(i, s)| Op::SetStatus(i, s)),
    ]
}

proptest! {
    #[test]
    fn numbering_stays_dense_under_any_mutation_sequence(
        ops in proptest::collection::vec(op_strategy(), 0..64)
    ) {
        let mut ledger = Ledger::new(MemoryGateway::new());
        let mut counter = 0u32;
        let mut seen_ids: Vec<OrderId> = Vec::new();

        for op in ops {
            match op {
                Op::Add => {
                    counter += 1;
                    let record = ledger
                        .add(form(&format!("cliente-{counter}"), 1))
                        .unwrap();
                    prop_assert!(
                        !seen_ids.contains(&record.id),
                        "id reuse across the ledger lifetime"
                    );
                    seen_ids.push(record.id);
                }
                Op::Remove(i) => {
                    if !ledger.is_empty() {
                        let id = ledger.records()[i % ledger.len()].id;
                        ledger.remove(&id).unwrap();
                    }
                }
                Op::SetStatus(i, s) => {
                    if !ledger.is_empty() {
                        let id = ledger.records()[i % ledger.len()].id;
                        ledger.set_status(&id, OrderStatus::ALL[s as usize]).unwrap();
                    }
                }
            }

            let n = ledger.len();
            for (i, record) in ledger.records().iter().enumerate() {
                prop_assert_eq!(record.sequence_number as usize, n - i);
            }
        }
    }

    #[test]
    fn query_compute_is_deterministic(
        clients in proptest::collection::vec("[a-zA-Z]{1,8}", 1..12),
        needle in "[a-zA-Z0-9]{0,2}",
    ) {
        let mut ledger = Ledger::new(MemoryGateway::new());
        for client in &clients {
            ledger.add(form(client, 5)).unwrap();
        }
        let filter = OrderFilter {
            client_contains: Some(needle.clone()),
            sequence_contains: Some("1".into()),
            status: Some(OrderStatus::Pending),
        };
        let view = QueryView::new(SortKey::SequenceDesc);
        let a = view.compute(ledger.records(), &filter);
        let b = view.compute(ledger.records(), &filter);
        prop_assert_eq!(a, b);
    }
}
