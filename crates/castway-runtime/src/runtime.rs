use std::sync::Arc;

use castway_core::settle::{Outcome, settle_all};
use castway_provider::{DiscoveryBackend, EventDispatcher, ProviderManager};

use crate::instance::RuntimeInstance;

/// An activated runtime: the resolved instance identity plus the event
/// plumbing. Constructed only after the selector resolves Active.
pub struct Runtime {
    instance: RuntimeInstance,
    dispatcher: Arc<EventDispatcher>,
    manager: Arc<ProviderManager>,
}

impl Runtime {
    pub async fn new(instance: RuntimeInstance) -> Self {
        let dispatcher = Arc::new(EventDispatcher::new());
        let manager = Arc::new(ProviderManager::new());
        dispatcher.register(manager.clone()).await;
        Self {
            instance,
            dispatcher,
            manager,
        }
    }

    pub fn instance(&self) -> &RuntimeInstance {
        &self.instance
    }

    pub fn dispatcher(&self) -> &Arc<EventDispatcher> {
        &self.dispatcher
    }

    pub fn manager(&self) -> &Arc<ProviderManager> {
        &self.manager
    }

    /// Start every discovery backend, attempting all of them even if
    /// some fail. Returns the number that started.
    pub async fn start_backends(&self, backends: &[Arc<dyn DiscoveryBackend>]) -> usize {
        let outcomes = settle_all(
            backends
                .iter()
                .map(|backend| backend.start(&self.dispatcher)),
        )
        .await;

        let mut started = 0;
        for (backend, outcome) in backends.iter().zip(&outcomes) {
            match outcome {
                Outcome::Fulfilled(()) => {
                    tracing::info!(backend = backend.name(), "Discovery backend started");
                    started += 1;
                }
                Outcome::Rejected(e) => {
                    tracing::warn!(backend = backend.name(), error = %e, "Discovery backend failed to start");
                }
            }
        }
        started
    }
}
