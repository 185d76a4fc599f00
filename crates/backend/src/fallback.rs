use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use shared_types::AppError;
use tokio::sync::mpsc;

use crate::store::{Listener, ListenerGuard};

/// Outcome of a bounded fetch, governing which dataset a page renders.
///
/// `Fallback` and `Empty` both resolve to the static substitute dataset; they
/// stay distinguishable so diagnostics can tell a slow backend from an empty
/// live result.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// Live backend data arrived within the bound.
    Live(T),
    /// Timeout or backend error; static data substituted.
    Fallback(T),
    /// The live result was empty; treated as fallback-worthy.
    Empty,
}

impl<T> FetchOutcome<T> {
    pub fn is_live(&self) -> bool {
        matches!(self, FetchOutcome::Live(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchOutcome::Live(data) | FetchOutcome::Fallback(data) => Some(data),
            FetchOutcome::Empty => None,
        }
    }

    /// The dataset to render: carried data, or `substitute()` for `Empty`.
    pub fn resolve_or(self, substitute: impl FnOnce() -> T) -> T {
        match self {
            FetchOutcome::Live(data) | FetchOutcome::Fallback(data) => data,
            FetchOutcome::Empty => substitute(),
        }
    }

    /// Diagnostic tag for log lines.
    pub fn label(&self) -> &'static str {
        match self {
            FetchOutcome::Live(_) => "live",
            FetchOutcome::Fallback(_) => "fallback",
            FetchOutcome::Empty => "empty",
        }
    }
}

/// Outcome stream produced by [`bounded_listen`]. Dropping it tears down the
/// race task and the underlying subscription.
pub struct BoundedStream<T> {
    rx: mpsc::UnboundedReceiver<FetchOutcome<Vec<T>>>,
    _guard: ListenerGuard,
}

impl<T> BoundedStream<T> {
    /// Next outcome update, or `None` once the stream has ended.
    /// Cancel-safe.
    pub async fn next(&mut self) -> Option<FetchOutcome<Vec<T>>> {
        self.rx.recv().await
    }
}

/// Listen-style bounded fetch: race the subscription's first snapshot
/// against a timer so the consumer is never blocked past `timeout`.
///
/// First outcome:
/// - non-empty snapshot before the timer → `Live`
/// - empty snapshot before the timer → `Empty`
/// - timer first → `Fallback(fallback)`; the subscription is left open and a
///   later non-empty snapshot supersedes the fallback as a `Live` update
/// - subscription error before the timer → `Fallback(fallback)`, timer
///   cancelled, stream ends
///
/// `Fallback` is emitted at most once per instance; an outcome never
/// downgrades a `Live` already shown. All emissions check the liveness flag,
/// so nothing fires after the stream is dropped.
pub fn bounded_listen<T>(
    mut listener: Listener<T>,
    fallback: Vec<T>,
    timeout: Duration,
) -> BoundedStream<T>
where
    T: Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let alive = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&alive);

    let task = tokio::spawn(async move {
        let timer = tokio::time::sleep(timeout);
        tokio::pin!(timer);
        let mut settled = false;
        let mut fallback = Some(fallback);

        loop {
            tokio::select! {
                _ = &mut timer, if !settled => {
                    settled = true;
                    tracing::warn!("backend slow, substituting fallback data");
                    if flag.load(Ordering::Relaxed) {
                        if let Some(data) = fallback.take() {
                            let _ = tx.send(FetchOutcome::Fallback(data));
                        }
                    }
                    // Subscription stays open: a late snapshot may still go Live.
                }
                snapshot = listener.recv() => match snapshot {
                    Some(Ok(rows)) => {
                        if !settled {
                            settled = true;
                            let outcome = if rows.is_empty() {
                                FetchOutcome::Empty
                            } else {
                                FetchOutcome::Live(rows)
                            };
                            if flag.load(Ordering::Relaxed) {
                                let _ = tx.send(outcome);
                            }
                        } else if !rows.is_empty() {
                            if flag.load(Ordering::Relaxed) {
                                let _ = tx.send(FetchOutcome::Live(rows));
                            }
                        } else {
                            tracing::debug!("dropping empty snapshot after first outcome");
                        }
                    }
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "subscription failed, substituting fallback data");
                        if !settled {
                            settled = true;
                            if flag.load(Ordering::Relaxed) {
                                if let Some(data) = fallback.take() {
                                    let _ = tx.send(FetchOutcome::Fallback(data));
                                }
                            }
                        }
                        break;
                    }
                    None => break,
                }
            }
        }
    });

    BoundedStream {
        rx,
        _guard: ListenerGuard::new(alive, task),
    }
}

/// One-shot bounded fetch: race a single query against the timer. Unlike
/// [`bounded_listen`] there are no updates afterward: if the timer wins, the
/// in-flight fetch is discarded.
pub async fn bounded_get<T, F>(fetch: F, fallback: Vec<T>, timeout: Duration) -> FetchOutcome<Vec<T>>
where
    F: Future<Output = Result<Vec<T>, AppError>>,
{
    tokio::select! {
        result = fetch => match result {
            Ok(rows) if rows.is_empty() => FetchOutcome::Empty,
            Ok(rows) => FetchOutcome::Live(rows),
            Err(err) => {
                tracing::warn!(error = %err, "fetch failed, substituting fallback data");
                FetchOutcome::Fallback(fallback)
            }
        },
        _ = tokio::time::sleep(timeout) => {
            tracing::warn!("fetch timed out, substituting fallback data");
            FetchOutcome::Fallback(fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_data_is_present_for_live_and_fallback() {
        assert_eq!(FetchOutcome::Live(vec![1]).data(), Some(&vec![1]));
        assert_eq!(FetchOutcome::Fallback(vec![2]).data(), Some(&vec![2]));
        assert_eq!(FetchOutcome::<Vec<i32>>::Empty.data(), None);
    }

    #[test]
    fn resolve_or_substitutes_only_for_empty() {
        assert_eq!(FetchOutcome::Live(vec![1]).resolve_or(|| vec![9]), vec![1]);
        assert_eq!(FetchOutcome::Fallback(vec![2]).resolve_or(|| vec![9]), vec![2]);
        assert_eq!(FetchOutcome::Empty.resolve_or(|| vec![9]), vec![9]);
    }

    #[test]
    fn labels_distinguish_the_three_outcomes() {
        assert_eq!(FetchOutcome::Live(()).label(), "live");
        assert_eq!(FetchOutcome::Fallback(()).label(), "fallback");
        assert_eq!(FetchOutcome::<()>::Empty.label(), "empty");
    }
}
