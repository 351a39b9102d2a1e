use std::future::Future;

use futures::future::join_all;

/// Result of one operation in a settled batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    Fulfilled(T),
    Rejected(E),
}

impl<T, E> Outcome<T, E> {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Outcome::Fulfilled(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Fulfilled(value),
            Err(reason) => Outcome::Rejected(reason),
        }
    }
}

/// Await every operation in `ops` and report each outcome individually.
///
/// Completes only after all operations have completed, success or
/// failure, and never fails itself. Output order matches input order
/// regardless of completion order. This is the primitive used when a
/// batch of independent initialization steps must all be attempted even
/// if some fail.
pub async fn settle_all<I, F, T, E>(ops: I) -> Vec<Outcome<T, E>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    join_all(ops.into_iter().map(|op| async move { op.await.into() })).await
}
