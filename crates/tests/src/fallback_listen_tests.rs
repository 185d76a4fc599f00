use std::time::Duration;

use backend::{bounded_listen, FetchOutcome};
use pretty_assertions::assert_eq;
use shared_types::AppError;

use crate::common::{fallback_rows, scripted_listener, BOUND};

/// Asserts the stream stays silent for at least `window`. Under the paused
/// clock the timeout auto-advances, so this is cheap.
async fn assert_no_emission(stream: &mut backend::BoundedStream<i32>, window: Duration) {
    let result = tokio::time::timeout(window, stream.next()).await;
    assert!(result.is_err(), "expected no outcome, got {:?}", result);
}

#[tokio::test(start_paused = true)]
async fn live_data_before_timeout_wins() {
    let (tx, listener, _alive) = scripted_listener();
    tx.send(Ok(vec![1, 2, 3])).unwrap();

    let mut stream = bounded_listen(listener, fallback_rows(), BOUND);
    assert_eq!(stream.next().await, Some(FetchOutcome::Live(vec![1, 2, 3])));

    // The timer was cancelled: no later Fallback overwrites the live outcome.
    assert_no_emission(&mut stream, BOUND * 3).await;
}

#[tokio::test(start_paused = true)]
async fn timeout_emits_fallback_exactly_once() {
    let (_tx, listener, _alive) = scripted_listener::<i32>();

    let mut stream = bounded_listen(listener, fallback_rows(), BOUND);
    assert_eq!(
        stream.next().await,
        Some(FetchOutcome::Fallback(fallback_rows()))
    );

    // Only one Fallback per instance, no matter how long we wait.
    assert_no_emission(&mut stream, BOUND * 4).await;
}

#[tokio::test(start_paused = true)]
async fn late_snapshot_supersedes_fallback() {
    let (tx, listener, _alive) = scripted_listener();

    let mut stream = bounded_listen(listener, fallback_rows(), BOUND);
    assert_eq!(
        stream.next().await,
        Some(FetchOutcome::Fallback(fallback_rows()))
    );

    // The subscription was not cancelled by the timeout; a late snapshot
    // still flows through as a Live update.
    tx.send(Ok(vec![7])).unwrap();
    assert_eq!(stream.next().await, Some(FetchOutcome::Live(vec![7])));
}

#[tokio::test(start_paused = true)]
async fn error_before_timeout_substitutes_fallback_and_ends() {
    let (tx, listener, _alive) = scripted_listener::<i32>();
    tx.send(Err(AppError::backend("connection refused"))).unwrap();

    let mut stream = bounded_listen(listener, fallback_rows(), BOUND);
    assert_eq!(
        stream.next().await,
        Some(FetchOutcome::Fallback(fallback_rows()))
    );

    // Errors are terminal at the fetch layer: the stream ends.
    assert_eq!(stream.next().await, None);
}

#[tokio::test(start_paused = true)]
async fn empty_first_snapshot_is_tagged_empty() {
    let (tx, listener, _alive) = scripted_listener::<i32>();
    tx.send(Ok(Vec::new())).unwrap();

    let mut stream = bounded_listen(listener, fallback_rows(), BOUND);
    // An empty live result is fallback-worthy but stays distinguishable.
    assert_eq!(stream.next().await, Some(FetchOutcome::Empty));

    // A later non-empty snapshot still recovers to Live.
    tx.send(Ok(vec![5])).unwrap();
    assert_eq!(stream.next().await, Some(FetchOutcome::Live(vec![5])));
}

#[tokio::test(start_paused = true)]
async fn empty_snapshot_never_downgrades_live() {
    let (tx, listener, _alive) = scripted_listener();
    tx.send(Ok(vec![1])).unwrap();

    let mut stream = bounded_listen(listener, fallback_rows(), BOUND);
    assert_eq!(stream.next().await, Some(FetchOutcome::Live(vec![1])));

    tx.send(Ok(Vec::new())).unwrap();
    assert_no_emission(&mut stream, BOUND).await;

    tx.send(Ok(vec![2])).unwrap();
    assert_eq!(stream.next().await, Some(FetchOutcome::Live(vec![2])));
}

#[tokio::test(start_paused = true)]
async fn error_after_live_outcome_ends_stream_without_fallback() {
    let (tx, listener, _alive) = scripted_listener();
    tx.send(Ok(vec![4])).unwrap();

    let mut stream = bounded_listen(listener, fallback_rows(), BOUND);
    assert_eq!(stream.next().await, Some(FetchOutcome::Live(vec![4])));

    tx.send(Err(AppError::backend("permission denied"))).unwrap();
    // The failure is swallowed: no Fallback after a Live outcome, the stream
    // just ends.
    assert_eq!(stream.next().await, None);
}
