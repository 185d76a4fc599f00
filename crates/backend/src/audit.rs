use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::store::{collections, StoreClient};

/// Mirrors significant domain events into the `system_logs` collection.
///
/// Writes are fire-and-forget: a failed append degrades to a tracing warning
/// and never surfaces to the caller.
#[derive(Clone)]
pub struct AuditLog {
    store: StoreClient,
}

#[derive(Serialize)]
struct AuditEntry {
    level: &'static str,
    action: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    detail: Value,
    /// Client clock, for local ordering; the store stamps the authoritative
    /// create time on write.
    timestamp: chrono::DateTime<Utc>,
}

impl AuditLog {
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }

    fn record(&self, level: &'static str, action: String, detail: Value) {
        let store = self.store.clone();
        let entry = AuditEntry {
            level,
            action,
            detail,
            timestamp: Utc::now(),
        };
        tokio::spawn(async move {
            if let Err(err) = store.add_doc(collections::SYSTEM_LOGS, &entry).await {
                tracing::warn!(error = %err, action = %entry.action, "audit append failed");
            }
        });
    }

    pub fn info(&self, action: impl Into<String>, detail: Value) {
        let action = action.into();
        tracing::info!(action = %action, "audit");
        self.record("info", action, detail);
    }

    pub fn warn(&self, action: impl Into<String>, detail: Value) {
        let action = action.into();
        tracing::warn!(action = %action, "audit");
        self.record("warn", action, detail);
    }

    pub fn error(&self, action: impl Into<String>, detail: Value) {
        let action = action.into();
        tracing::error!(action = %action, "audit");
        self.record("error", action, detail);
    }
}
