use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_types::AppError;
use tokio::sync::mpsc;

use crate::config::BackendConfig;

/// Collection names used by the dashboard.
pub mod collections {
    pub const MEMBERS: &str = "members";
    pub const BILLS: &str = "bills";
    pub const SYSTEM_LOGS: &str = "system_logs";
}

/// Interval between polls while a subscription is open.
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Sort direction for `order_by`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldFilter {
    pub field: String,
    pub equals: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

/// A collection-scoped query: equality filters, an optional sort, a limit.
#[derive(Debug, Clone, Serialize)]
pub struct Query {
    #[serde(skip)]
    pub collection: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<FieldFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Query {
    pub fn collection(name: impl Into<String>) -> Self {
        Self {
            collection: name.into(),
            filters: Vec::new(),
            order_by: None,
            limit: None,
        }
    }

    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(FieldFilter {
            field: field.into(),
            equals: value.into(),
        });
        self
    }

    pub fn order_by_desc(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(OrderBy {
            field: field.into(),
            direction: Direction::Desc,
        });
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// One document as the store returns it.
#[derive(Debug, Clone, Deserialize)]
struct WireDocument {
    id: String,
    fields: Value,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    documents: Vec<WireDocument>,
}

/// Response from a document create: the assigned id plus the server-side
/// create timestamp (provider form, normalized on read).
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedDoc {
    pub id: String,
    #[serde(deserialize_with = "shared_types::timestamp::deserialize_normalized")]
    pub create_time: DateTime<Utc>,
}

/// Guard for a background listener task. Dropping it flips the liveness flag
/// and aborts the task, so nothing is emitted after teardown.
#[derive(Debug)]
pub struct ListenerGuard {
    alive: Arc<AtomicBool>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl ListenerGuard {
    pub fn new(alive: Arc<AtomicBool>, task: tokio::task::JoinHandle<()>) -> Self {
        Self {
            alive,
            task: Some(task),
        }
    }

    /// Guard without an owned task, for listeners driven externally (tests
    /// feed snapshots through a channel).
    pub fn from_flag(alive: Arc<AtomicBool>) -> Self {
        Self { alive, task: None }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::Relaxed);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// An open subscription to a collection query. Each emission is a full
/// snapshot of the query result. Dropping the listener unsubscribes.
pub struct Listener<T> {
    rx: mpsc::UnboundedReceiver<Result<Vec<T>, AppError>>,
    _guard: ListenerGuard,
}

impl<T> Listener<T> {
    pub fn from_parts(
        rx: mpsc::UnboundedReceiver<Result<Vec<T>, AppError>>,
        guard: ListenerGuard,
    ) -> Self {
        Self { rx, _guard: guard }
    }

    /// Next snapshot, or `None` once the subscription has ended.
    /// Cancel-safe.
    pub async fn recv(&mut self) -> Option<Result<Vec<T>, AppError>> {
        self.rx.recv().await
    }
}

/// Client for the document-store REST surface.
#[derive(Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    config: &'static BackendConfig,
}

impl StoreClient {
    pub fn new(config: &'static BackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn documents_url(&self, collection: &str) -> String {
        format!(
            "{}/v1/projects/{}/collections/{}/documents",
            self.config.store_url, self.config.project_id, collection
        )
    }

    /// Run a query once, returning raw documents with the id merged into the
    /// field object.
    async fn get_raw(&self, query: &Query) -> Result<Vec<Value>, AppError> {
        let url = format!("{}:query", self.documents_url(&query.collection));
        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .json(query)
            .send()
            .await
            .map_err(|e| AppError::backend(format!("query request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::backend(format!(
                "query on '{}' returned {}",
                query.collection,
                response.status()
            )));
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| AppError::backend(format!("malformed query response: {e}")))?;

        Ok(body
            .documents
            .into_iter()
            .map(|doc| {
                let mut fields = doc.fields;
                if let Value::Object(map) = &mut fields {
                    map.insert("id".to_string(), Value::String(doc.id));
                }
                fields
            })
            .collect())
    }

    /// One-shot typed query.
    pub async fn get_docs<T: DeserializeOwned>(&self, query: &Query) -> Result<Vec<T>, AppError> {
        let raw = self.get_raw(query).await?;
        raw.into_iter()
            .map(|doc| {
                serde_json::from_value(doc)
                    .map_err(|e| AppError::backend(format!("malformed document: {e}")))
            })
            .collect()
    }

    /// Open a subscription: a background task polls the query and emits a
    /// snapshot whenever the result set changes. The first snapshot is
    /// emitted as soon as the initial poll completes. A backend error ends
    /// the subscription after a single `Err` emission; errors are terminal
    /// at this layer.
    pub fn listen<T>(&self, query: Query) -> Listener<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let alive = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&alive);
        let client = self.clone();

        let task = tokio::spawn(async move {
            let mut last: Option<Vec<Value>> = None;
            let mut ticker = tokio::time::interval(POLL_INTERVAL);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if !flag.load(Ordering::Relaxed) {
                    break;
                }
                match client.get_raw(&query).await {
                    Ok(raw) => {
                        if last.as_ref() == Some(&raw) {
                            continue;
                        }
                        let decoded: Result<Vec<T>, _> = raw
                            .iter()
                            .cloned()
                            .map(serde_json::from_value)
                            .collect();
                        match decoded {
                            Ok(rows) => {
                                last = Some(raw);
                                if !flag.load(Ordering::Relaxed) || tx.send(Ok(rows)).is_err() {
                                    break;
                                }
                            }
                            Err(e) => {
                                if flag.load(Ordering::Relaxed) {
                                    let _ = tx.send(Err(AppError::backend(format!(
                                        "malformed document in '{}': {e}",
                                        query.collection
                                    ))));
                                }
                                break;
                            }
                        }
                    }
                    Err(err) => {
                        if flag.load(Ordering::Relaxed) {
                            let _ = tx.send(Err(err));
                        }
                        break;
                    }
                }
            }
        });

        Listener::from_parts(rx, ListenerGuard::new(alive, task))
    }

    /// Create a document. The store assigns the id and create timestamp.
    pub async fn add_doc<R: Serialize>(
        &self,
        collection: &str,
        record: &R,
    ) -> Result<CreatedDoc, AppError> {
        let response = self
            .http
            .post(self.documents_url(collection))
            .header("x-api-key", &self.config.api_key)
            .json(record)
            .send()
            .await
            .map_err(|e| AppError::backend(format!("create request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::backend(format!(
                "create in '{collection}' returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::backend(format!("malformed create response: {e}")))
    }

    /// Delete a document by id.
    pub async fn delete_doc(&self, collection: &str, id: &str) -> Result<(), AppError> {
        let url = format!("{}/{id}", self.documents_url(collection));
        let response = self
            .http
            .delete(&url)
            .header("x-api-key", &self.config.api_key)
            .send()
            .await
            .map_err(|e| AppError::backend(format!("delete request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::backend(format!(
                "delete in '{collection}' returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_builder_serializes_filters_and_sort() {
        let query = Query::collection(collections::BILLS)
            .where_eq("member_id", "mem-1")
            .order_by_desc("due_date")
            .limit(50);

        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["filters"][0]["field"], "member_id");
        assert_eq!(json["filters"][0]["equals"], "mem-1");
        assert_eq!(json["order_by"]["direction"], "desc");
        assert_eq!(json["limit"], 50);
        // Collection routes through the URL, never the body.
        assert!(json.get("collection").is_none());
    }

    #[test]
    fn empty_query_omits_optional_clauses() {
        let query = Query::collection(collections::MEMBERS);
        let json = serde_json::to_value(&query).unwrap();
        assert!(json.get("filters").is_none());
        assert!(json.get("order_by").is_none());
        assert!(json.get("limit").is_none());
    }

    #[test]
    fn created_doc_normalizes_provider_create_time() {
        let doc: CreatedDoc = serde_json::from_str(
            r#"{"id": "mem-7", "create_time": {"seconds": 1700000000, "nanos": 0}}"#,
        )
        .unwrap();
        assert_eq!(doc.id, "mem-7");
        assert_eq!(doc.create_time.timestamp(), 1_700_000_000);
    }
}
