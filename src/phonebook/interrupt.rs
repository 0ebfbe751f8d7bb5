use std::future::Future;

/// Drives `call` until it completes or `interrupt` fires first.
///
/// Returns `None` when the call was abandoned; the call's future is dropped
/// and whatever state it would have updated is left untouched.
pub async fn until_interrupted<F, I>(call: F, interrupt: I) -> Option<F::Output>
where
    F: Future,
    I: Future,
{
    tokio::select! {
        biased;
        output = call => Some(output),
        _ = interrupt => None,
    }
}
