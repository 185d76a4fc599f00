use std::time::Duration;

use backend::{bounded_get, FetchOutcome};
use pretty_assertions::assert_eq;
use shared_types::AppError;

use crate::common::{fallback_rows, BOUND};

#[tokio::test(start_paused = true)]
async fn fetch_completing_in_time_is_live() {
    let outcome = bounded_get(async { Ok(vec![1, 2]) }, fallback_rows(), BOUND).await;
    assert_eq!(outcome, FetchOutcome::Live(vec![1, 2]));
}

#[tokio::test(start_paused = true)]
async fn empty_fetch_is_tagged_empty() {
    let outcome = bounded_get(async { Ok(Vec::<i32>::new()) }, fallback_rows(), BOUND).await;
    assert_eq!(outcome, FetchOutcome::Empty);
}

#[tokio::test(start_paused = true)]
async fn failed_fetch_substitutes_fallback() {
    let outcome = bounded_get(
        async { Err::<Vec<i32>, _>(AppError::backend("unreachable")) },
        fallback_rows(),
        BOUND,
    )
    .await;
    assert_eq!(outcome, FetchOutcome::Fallback(fallback_rows()));
}

#[tokio::test(start_paused = true)]
async fn never_resolving_fetch_hits_the_bound() {
    let outcome = bounded_get(
        std::future::pending::<Result<Vec<i32>, AppError>>(),
        fallback_rows(),
        BOUND,
    )
    .await;
    assert_eq!(outcome, FetchOutcome::Fallback(fallback_rows()));
}

#[tokio::test(start_paused = true)]
async fn slow_fetch_loses_the_race() {
    // Resolves, but only after the bound; one-shot fetches do not update
    // afterward, so the fallback stands.
    let slow = async {
        tokio::time::sleep(BOUND * 2).await;
        Ok(vec![9])
    };
    let outcome = bounded_get(slow, fallback_rows(), BOUND).await;
    assert_eq!(outcome, FetchOutcome::Fallback(fallback_rows()));
}

#[tokio::test(start_paused = true)]
async fn fetch_just_under_the_bound_is_live() {
    let quick = async {
        tokio::time::sleep(BOUND - Duration::from_millis(1)).await;
        Ok(vec![3])
    };
    let outcome = bounded_get(quick, fallback_rows(), BOUND).await;
    assert_eq!(outcome, FetchOutcome::Live(vec![3]));
}
