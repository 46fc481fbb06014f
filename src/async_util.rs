use std::fmt::Debug;
use std::future::{Future, IntoFuture};
use std::time::Duration;

/// Awaits `values` one after another and collects the outputs in input order.
///
/// An element is only polled once the previous one has completed, so side
/// effects happen in input order. The first error is returned immediately and
/// the remaining elements are dropped without being polled. Values that are
/// already available can be passed as `std::future::ready(..)`.
pub async fn sequential<I, T, E>(values: I) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    I::Item: IntoFuture<Output = Result<T, E>>,
{
    let values = values.into_iter();
    let mut results = Vec::with_capacity(values.size_hint().0);
    for value in values {
        results.push(value.await?);
    }
    Ok(results)
}

/// Runs `f` and discards any error it returns.
///
/// Only for best-effort work. Whatever `f` did before failing stays done.
pub async fn attempt<F, Fut, E>(f: F)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: Debug,
{
    if let Err(e) = f().await {
        log::debug!("attempt failed: {:?}", e);
    }
}

/// Like [`attempt`], but only swallows errors that `is_ignorable` accepts.
pub async fn attempt_ignoring<F, Fut, E, P>(f: F, is_ignorable: P) -> Result<(), E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    P: FnOnce(&E) -> bool,
    E: Debug,
{
    match f().await {
        Ok(()) => Ok(()),
        Err(e) if is_ignorable(&e) => {
            log::debug!("ignored error: {:?}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

pub async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await
}
