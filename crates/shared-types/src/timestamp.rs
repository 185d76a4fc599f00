use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned timestamp as the document store returns it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderTimestamp {
    pub seconds: i64,
    #[serde(default)]
    pub nanos: u32,
}

/// A date read back from the document store.
///
/// A stored value is either a provider timestamp (`{seconds, nanos}`, set by
/// the server on write) or an RFC 3339 string written by a client. Both forms
/// must normalize identically, so the boundary resolves them through this
/// union instead of shape-sniffing the payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StoredDate {
    Provider(ProviderTimestamp),
    Local(DateTime<Utc>),
}

impl StoredDate {
    /// Normalize to a local datetime. Out-of-range provider seconds clamp to
    /// the epoch rather than failing the whole document.
    pub fn to_utc(self) -> DateTime<Utc> {
        match self {
            StoredDate::Provider(ts) => {
                DateTime::from_timestamp(ts.seconds, ts.nanos).unwrap_or(DateTime::UNIX_EPOCH)
            }
            StoredDate::Local(dt) => dt,
        }
    }
}

impl From<DateTime<Utc>> for StoredDate {
    fn from(dt: DateTime<Utc>) -> Self {
        StoredDate::Local(dt)
    }
}

/// `deserialize_with` adapter: accept either stored form, yield a normalized
/// `DateTime<Utc>` so entity fields stay plain dates.
pub fn deserialize_normalized<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    StoredDate::deserialize(deserializer).map(StoredDate::to_utc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn local_form_normalizes_to_itself() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();
        let stored: StoredDate = serde_json::from_str("\"2024-01-15T08:30:00Z\"").unwrap();
        assert_eq!(stored.to_utc(), dt);
    }

    #[test]
    fn provider_form_normalizes_to_equivalent_local() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();
        let json = format!("{{\"seconds\":{},\"nanos\":0}}", dt.timestamp());
        let stored: StoredDate = serde_json::from_str(&json).unwrap();
        assert_eq!(stored.to_utc(), dt);
    }

    #[test]
    fn both_forms_normalize_identically() {
        let dt = Utc.with_ymd_and_hms(2024, 7, 15, 0, 0, 0).unwrap();
        let local: StoredDate = serde_json::from_value(serde_json::json!(dt)).unwrap();
        let provider: StoredDate =
            serde_json::from_value(serde_json::json!({"seconds": dt.timestamp()})).unwrap();
        assert_eq!(local.to_utc(), provider.to_utc());
    }

    #[test]
    fn write_then_read_roundtrip() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let written = serde_json::to_string(&StoredDate::from(dt)).unwrap();
        let read: StoredDate = serde_json::from_str(&written).unwrap();
        assert_eq!(read.to_utc(), dt);
    }

    #[test]
    fn out_of_range_provider_seconds_clamp_to_epoch() {
        let stored = StoredDate::Provider(ProviderTimestamp {
            seconds: i64::MAX,
            nanos: 0,
        });
        assert_eq!(stored.to_utc(), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn missing_nanos_defaults_to_zero() {
        let stored: StoredDate = serde_json::from_str("{\"seconds\":1700000000}").unwrap();
        let StoredDate::Provider(ts) = stored else {
            panic!("expected provider form");
        };
        assert_eq!(ts.nanos, 0);
    }
}
