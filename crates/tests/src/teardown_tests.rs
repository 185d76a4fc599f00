use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use backend::{bounded_listen, ListenerGuard};

use crate::common::{fallback_rows, scripted_listener, wait_for_teardown, BOUND};

#[tokio::test(start_paused = true)]
async fn dropping_the_stream_unsubscribes() {
    let (tx, listener, alive) = scripted_listener::<i32>();
    let stream = bounded_listen(listener, fallback_rows(), BOUND);

    assert!(alive.load(Ordering::Relaxed));
    drop(stream);
    wait_for_teardown(&alive).await;

    // The race task was torn down, which dropped the listener and released
    // its registration exactly once.
    assert!(!alive.load(Ordering::Relaxed));
    // The upstream sender now has no receiver: a late emission goes nowhere.
    assert!(tx.send(Ok(vec![1])).is_err());
}

#[tokio::test(start_paused = true)]
async fn drop_before_the_bound_prevents_the_fallback_emission() {
    let (tx, listener, alive) = scripted_listener::<i32>();
    let stream = bounded_listen(listener, fallback_rows(), BOUND);
    drop(stream);
    wait_for_teardown(&alive).await;

    // Run the clock well past the bound: with the consumer gone, the timer
    // path must not fire into anything.
    tokio::time::sleep(BOUND * 4).await;
    assert!(!alive.load(Ordering::Relaxed));
    assert!(tx.send(Ok(vec![2])).is_err());
}

#[tokio::test(start_paused = true)]
async fn unconsumed_outcomes_do_not_leak_past_drop() {
    let (tx, listener, alive) = scripted_listener();
    tx.send(Ok(vec![1])).unwrap();

    let mut stream = bounded_listen(listener, fallback_rows(), BOUND);
    // Consume the first outcome, then tear down mid-subscription.
    let first = stream.next().await;
    assert!(first.is_some());
    drop(stream);
    wait_for_teardown(&alive).await;

    assert!(tx.send(Ok(vec![2])).is_err());
}

#[test]
fn guard_drop_flips_the_liveness_flag() {
    let alive = Arc::new(AtomicBool::new(true));
    let guard = ListenerGuard::from_flag(Arc::clone(&alive));
    assert!(guard.is_alive());
    drop(guard);
    assert!(!alive.load(Ordering::Relaxed));
}
