use futures::future::BoxFuture;

use crate::error::CallbackError;
use crate::sink::{Activity, Sink};

/// Sink-discovery events, invoked by a discovery backend and implemented
/// by a consumer.
///
/// For a given sink id, add/update/remove events are delivered in the
/// order they occur at the backend; no reordering or coalescing happens
/// beyond the explicit batched removal. An update for an id that was
/// never added is a backend bug; consumers should treat it defensively
/// by upserting.
pub trait SinkDiscoveryCallbacks: Send + Sync {
    fn on_sink_added<'a>(&'a self, sink: &'a Sink) -> BoxFuture<'a, Result<(), CallbackError>>;

    /// Removals arrive batched: backends typically detect them in bulk
    /// via a rescan.
    fn on_sinks_removed<'a>(
        &'a self,
        sinks: &'a [Sink],
    ) -> BoxFuture<'a, Result<(), CallbackError>>;

    fn on_sink_updated<'a>(&'a self, sink: &'a Sink) -> BoxFuture<'a, Result<(), CallbackError>>;
}

/// Session lifecycle events.
pub trait ActivityCallbacks: Send + Sync {
    fn on_activity_added<'a>(
        &'a self,
        activity: &'a Activity,
    ) -> BoxFuture<'a, Result<(), CallbackError>>;

    fn on_activity_removed<'a>(
        &'a self,
        activity: &'a Activity,
    ) -> BoxFuture<'a, Result<(), CallbackError>>;

    fn on_activity_updated<'a>(
        &'a self,
        activity: &'a Activity,
    ) -> BoxFuture<'a, Result<(), CallbackError>>;
}

/// The combined surface a provider consumer implements.
pub trait ProviderCallbacks: SinkDiscoveryCallbacks + ActivityCallbacks {}

impl<T: SinkDiscoveryCallbacks + ActivityCallbacks> ProviderCallbacks for T {}
