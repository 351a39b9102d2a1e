use futures::future::BoxFuture;

use crate::dispatch::EventDispatcher;
use crate::error::BackendError;
use crate::sink::Sink;

/// A discovery/session backend. The actual wire transport (DIAL, SSDP,
/// mDNS) is backend-defined; the runtime only starts the backend and
/// hands it the dispatcher to emit into.
pub trait DiscoveryBackend: Send + Sync {
    fn name(&self) -> &str;

    fn start<'a>(
        &'a self,
        dispatcher: &'a EventDispatcher,
    ) -> BoxFuture<'a, Result<(), BackendError>>;
}

/// Backend that announces a fixed set of sinks at startup. Used for
/// receivers with known addresses and as a fixture in tests.
pub struct StaticSinkBackend {
    sinks: Vec<Sink>,
}

impl StaticSinkBackend {
    pub fn new(sinks: Vec<Sink>) -> Self {
        Self { sinks }
    }
}

impl DiscoveryBackend for StaticSinkBackend {
    fn name(&self) -> &str {
        "static"
    }

    fn start<'a>(
        &'a self,
        dispatcher: &'a EventDispatcher,
    ) -> BoxFuture<'a, Result<(), BackendError>> {
        Box::pin(async move {
            for sink in &self.sinks {
                dispatcher.notify_sink_added(sink).await;
            }
            tracing::info!(count = self.sinks.len(), "Static sinks announced");
            Ok(())
        })
    }
}
