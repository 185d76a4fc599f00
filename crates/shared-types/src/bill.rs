use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment status of a bill, stored as lowercase text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Paid,
    Pending,
    Overdue,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Paid => "paid",
            BillStatus::Pending => "pending",
            BillStatus::Overdue => "overdue",
        }
    }
}

/// A payment receipt. Member and package names are denormalized onto the
/// bill so tables render without joins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bill {
    #[serde(default)]
    pub id: String,
    pub member_id: String,
    pub member_name: String,
    pub package_id: String,
    pub package_name: String,
    /// Whole-rupee amount.
    pub amount: i64,
    #[serde(deserialize_with = "crate::timestamp::deserialize_normalized")]
    pub paid_date: DateTime<Utc>,
    #[serde(deserialize_with = "crate::timestamp::deserialize_normalized")]
    pub due_date: DateTime<Utc>,
    pub status: BillStatus,
}

/// Write payload for creating a bill document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBill {
    pub member_id: String,
    pub member_name: String,
    pub package_id: String,
    pub package_name: String,
    pub amount: i64,
    pub paid_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub status: BillStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bill_deserializes_mixed_date_forms() {
        // paid_date written by a client (RFC 3339), due_date stamped by the
        // server (provider timestamp); both must normalize.
        let json = r#"{
            "id": "bill-1",
            "member_id": "mem-1",
            "member_name": "John Smith",
            "package_id": "pkg-3",
            "package_name": "Premium",
            "amount": 4499,
            "paid_date": "2024-01-15T00:00:00Z",
            "due_date": {"seconds": 1721001600},
            "status": "paid"
        }"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.status, BillStatus::Paid);
        assert_eq!(bill.paid_date.timestamp(), 1_705_276_800);
        assert_eq!(bill.due_date.timestamp(), 1_721_001_600);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&BillStatus::Overdue).unwrap(), "\"overdue\"");
    }
}
