use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Membership lifecycle status, stored as lowercase text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
    Expired,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Inactive => "inactive",
            MemberStatus::Expired => "expired",
        }
    }
}

/// A gym member document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    /// Document id, assigned by the store on create.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(deserialize_with = "crate::timestamp::deserialize_normalized")]
    pub join_date: DateTime<Utc>,
    pub package_id: String,
    pub status: MemberStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Write payload for creating a member document (no id; the store assigns
/// one, along with the server-side create timestamp).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub join_date: DateTime<Utc>,
    pub package_id: String,
    pub status: MemberStatus,
}

impl NewMember {
    /// Default profile written when a signed-up principal has no member
    /// document yet (self-healing on the member dashboard).
    pub fn default_profile(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            address: String::new(),
            join_date: Utc::now(),
            package_id: "pkg-1".to_string(),
            status: MemberStatus::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_deserializes_with_provider_timestamp() {
        let json = r#"{
            "id": "mem-9",
            "name": "John Smith",
            "email": "john@example.com",
            "phone": "+1 234 567 890",
            "address": "123 Main St, City",
            "join_date": {"seconds": 1705276800, "nanos": 0},
            "package_id": "pkg-3",
            "status": "active"
        }"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.status, MemberStatus::Active);
        assert_eq!(member.join_date.timestamp(), 1_705_276_800);
    }

    #[test]
    fn default_profile_starts_on_basic_package() {
        let new = NewMember::default_profile("Jane", "jane@example.com");
        assert_eq!(new.package_id, "pkg-1");
        assert_eq!(new.status, MemberStatus::Active);
        assert!(new.phone.is_empty());
    }
}
