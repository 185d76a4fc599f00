use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{Bill, BillStatus, NewBill};

/// Round-trip: a bill written through the write path and read back with the
/// store's server-assigned timestamp form normalizes to equivalent dates.
#[test]
fn written_bill_reads_back_with_equal_dates() {
    let paid = Utc.with_ymd_and_hms(2024, 2, 20, 0, 0, 0).unwrap();
    let due = Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap();

    let written = NewBill {
        member_id: "mem-2".into(),
        member_name: "Sarah Johnson".into(),
        package_id: "pkg-2".into(),
        package_name: "Standard".into(),
        amount: 2499,
        paid_date: paid,
        due_date: due,
        status: BillStatus::Paid,
    };

    // What the client sent over the wire.
    let mut wire = serde_json::to_value(&written).unwrap();

    // Simulate the store echoing the document back with the due date
    // rewritten into the provider timestamp form and an id assigned.
    wire["id"] = json!("bill-2");
    wire["due_date"] = json!({ "seconds": due.timestamp(), "nanos": 0 });

    let read: Bill = serde_json::from_value(wire).unwrap();
    assert_eq!(read.paid_date, paid);
    assert_eq!(read.due_date, due);
    assert_eq!(read.status, BillStatus::Paid);
}

/// Both stored forms of the same instant normalize identically.
#[test]
fn provider_and_local_forms_are_interchangeable() {
    let instant = Utc.with_ymd_and_hms(2024, 7, 15, 8, 30, 0).unwrap();

    let from_local: Bill = serde_json::from_value(bill_doc(json!(instant))).unwrap();
    let from_provider: Bill =
        serde_json::from_value(bill_doc(json!({ "seconds": instant.timestamp() }))).unwrap();

    assert_eq!(from_local.due_date, from_provider.due_date);
    assert_eq!(from_local.due_date, instant);
}

fn bill_doc(due_date: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "bill-1",
        "member_id": "mem-1",
        "member_name": "John Smith",
        "package_id": "pkg-3",
        "package_name": "Premium",
        "amount": 4499,
        "paid_date": "2024-01-15T00:00:00Z",
        "due_date": due_date,
        "status": "paid"
    })
}
