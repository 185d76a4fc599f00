use std::future::Future;

use backend::{BoundedStream, FetchOutcome};
use dioxus::prelude::*;

/// Page-side state for a bounded fetch. `None` until the first outcome; the
/// race guarantees that window is at most the call site's timeout.
pub type OutcomeState<T> = Signal<Option<FetchOutcome<Vec<T>>>>;

/// Drive a listen-style bounded fetch for the lifetime of the component.
///
/// The stream is created once on mount; outcome updates are applied in
/// arrival order. When the component unmounts the driving task is dropped,
/// which tears down the stream, its timer, and the underlying subscription,
/// so no outcome is applied after teardown.
pub fn use_bounded_listen<T>(make: impl FnOnce() -> BoundedStream<T> + 'static) -> OutcomeState<T>
where
    T: Clone + Send + 'static,
{
    let mut state: OutcomeState<T> = use_signal(|| None);
    use_hook(move || {
        let mut stream = make();
        spawn(async move {
            while let Some(outcome) = stream.next().await {
                tracing::debug!(outcome = outcome.label(), "bounded listen update");
                state.set(Some(outcome));
            }
        });
    });
    state
}

/// Drive a one-shot bounded fetch: a single future resolving to an outcome,
/// started on mount. No updates afterward; navigating away and back re-runs
/// it.
pub fn use_bounded_get<T, F, Fut>(fetch: F) -> OutcomeState<T>
where
    T: Clone + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = FetchOutcome<Vec<T>>> + 'static,
{
    let mut state: OutcomeState<T> = use_signal(|| None);
    use_hook(move || {
        let fut = fetch();
        spawn(async move {
            let outcome = fut.await;
            tracing::debug!(outcome = outcome.label(), "bounded fetch resolved");
            state.set(Some(outcome));
        });
    });
    state
}
