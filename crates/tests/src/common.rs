use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use backend::{Listener, ListenerGuard};
use shared_types::AppError;
use tokio::sync::mpsc;

pub type Snapshot<T> = Result<Vec<T>, AppError>;

/// The timeout bound used across the fetcher tests.
pub const BOUND: Duration = Duration::from_millis(1500);

/// Channel-backed listener: the test scripts emissions through the returned
/// sender. The alive flag mirrors what a real subscription guard exposes, so
/// teardown can be observed.
pub fn scripted_listener<T>() -> (
    mpsc::UnboundedSender<Snapshot<T>>,
    Listener<T>,
    Arc<AtomicBool>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let alive = Arc::new(AtomicBool::new(true));
    let listener = Listener::from_parts(rx, ListenerGuard::from_flag(Arc::clone(&alive)));
    (tx, listener, alive)
}

/// Yield until the flag flips false (or we give up) so an aborted background
/// task gets scheduled for its drop.
pub async fn wait_for_teardown(alive: &Arc<AtomicBool>) {
    for _ in 0..100 {
        if !alive.load(Ordering::Relaxed) {
            return;
        }
        tokio::task::yield_now().await;
    }
}

/// Static substitute dataset used by the engine tests.
pub fn fallback_rows() -> Vec<i32> {
    vec![101, 102]
}
