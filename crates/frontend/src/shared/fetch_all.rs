//! Concurrent fetch of a set of independent reads

use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;

/// Run every operation concurrently and collect the results in input order
///
/// Fails fast: the first error to arrive is returned as soon as it is
/// observed and the remaining operations are dropped, so their results
/// (successes or later errors) are never seen. An empty set resolves to an
/// empty vector.
pub async fn fetch_all<I, F, T, E>(operations: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    // completion order, each result tagged with its input position
    let mut pending: FuturesUnordered<_> = operations
        .into_iter()
        .enumerate()
        .map(|(index, operation)| async move { (index, operation.await) })
        .collect();

    let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None).take(pending.len()).collect();
    while let Some((index, result)) = pending.next().await {
        if let Some(slot) = slots.get_mut(index) {
            *slot = Some(result?);
        }
    }
    Ok(slots.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::debounce::testing::ms;
    use tokio::time::{sleep, Instant};

    async fn delayed(after_ms: u64, result: Result<u32, String>) -> Result<u32, String> {
        sleep(ms(after_ms)).await;
        result
    }

    #[tokio::test(start_paused = true)]
    async fn test_results_in_input_order() {
        let start = Instant::now();
        let result = fetch_all(vec![delayed(300, Ok(1)), delayed(100, Ok(2)), delayed(200, Ok(3))]).await;
        assert_eq!(result, Ok(vec![1, 2, 3]));
        // concurrent, not sequential
        assert_eq!(start.elapsed().as_millis(), 300);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_failure_short_circuits() {
        let start = Instant::now();
        let result = fetch_all(vec![
            delayed(200, Ok(1)),
            delayed(50, Err("second failed".to_string())),
            delayed(200, Ok(3)),
        ])
        .await;
        assert_eq!(result, Err("second failed".to_string()));
        assert_eq!(start.elapsed().as_millis(), 50);
    }

    #[tokio::test(start_paused = true)]
    async fn test_large_set_still_fails_fast() {
        let start = Instant::now();
        let operations = (0..40).map(|i| {
            if i == 1 {
                delayed(50, Err("op 1 failed".to_string()))
            } else {
                delayed(200, Ok(i))
            }
        });
        let result = fetch_all(operations).await;
        assert_eq!(result, Err("op 1 failed".to_string()));
        assert_eq!(start.elapsed().as_millis(), 50);
    }

    #[tokio::test(start_paused = true)]
    async fn test_large_set_keeps_input_order() {
        let start = Instant::now();
        // later operations finish first
        let operations = (0..40u32).map(|i| delayed(u64::from(400 - i * 10), Ok(i)));
        let result = fetch_all(operations).await;
        assert_eq!(result, Ok((0..40).collect::<Vec<u32>>()));
        assert_eq!(start.elapsed().as_millis(), 400);
    }

    #[tokio::test(start_paused = true)]
    async fn test_earliest_error_wins() {
        let result = fetch_all(vec![
            delayed(100, Err("late".to_string())),
            delayed(20, Err("early".to_string())),
        ])
        .await;
        assert_eq!(result, Err("early".to_string()));
    }

    #[tokio::test]
    async fn test_empty_set() {
        let ops: Vec<std::future::Ready<Result<u32, String>>> = Vec::new();
        assert_eq!(fetch_all(ops).await, Ok(vec![]));
    }
}
