use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::OnceCell;

use crate::error::LoaderError;

/// Lazy, memoized access to an expensive service (e.g. a mirroring
/// engine), decoupling "is this service needed" from "when is it
/// constructed".
///
/// `load` never fails with "already loading": concurrent callers share
/// the same in-flight construction and observe the same result.
pub trait ServiceLoader<S>: Send + Sync {
    fn load(&self) -> BoxFuture<'_, Result<Arc<S>, LoaderError>>;
}

/// Constructs the service via the factory on first load and caches the
/// result. At most one construction runs even under concurrent callers;
/// the `OnceCell` serializes initialization.
///
/// Failures are not cached: a failed construction propagates to every
/// waiting caller, and the next `load` retries the factory.
pub struct LazyLoader<S, F> {
    factory: F,
    cell: OnceCell<Arc<S>>,
}

impl<S, F, Fut> LazyLoader<S, F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<S, LoaderError>> + Send,
{
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            cell: OnceCell::new(),
        }
    }
}

impl<S, F, Fut> ServiceLoader<S> for LazyLoader<S, F>
where
    S: Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<S, LoaderError>> + Send,
{
    fn load(&self) -> BoxFuture<'_, Result<Arc<S>, LoaderError>> {
        Box::pin(async move {
            let service = self
                .cell
                .get_or_try_init(|| async {
                    tracing::debug!("Constructing lazy service");
                    (self.factory)().await.map(Arc::new)
                })
                .await?;
            Ok(service.clone())
        })
    }
}

/// Wraps a pre-built service; `load` resolves immediately.
pub struct FixedLoader<S> {
    service: Arc<S>,
}

impl<S> FixedLoader<S> {
    pub fn new(service: S) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    pub fn from_arc(service: Arc<S>) -> Self {
        Self { service }
    }
}

impl<S> ServiceLoader<S> for FixedLoader<S>
where
    S: Send + Sync + 'static,
{
    fn load(&self) -> BoxFuture<'_, Result<Arc<S>, LoaderError>> {
        Box::pin(async move { Ok(self.service.clone()) })
    }
}
