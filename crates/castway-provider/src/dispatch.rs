use std::sync::Arc;

use tokio::sync::RwLock;

use crate::callbacks::ProviderCallbacks;
use crate::sink::{Activity, Sink};

/// Backend-side fan-out for provider events.
///
/// Consumers are notified in registration order. A consumer error is the
/// containment boundary: it is logged and delivery continues, so a
/// failing consumer can never crash the discovery backend or starve the
/// remaining consumers.
pub struct EventDispatcher {
    consumers: RwLock<Vec<Arc<dyn ProviderCallbacks>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            consumers: RwLock::new(Vec::new()),
        }
    }

    pub async fn register(&self, consumer: Arc<dyn ProviderCallbacks>) {
        let mut consumers = self.consumers.write().await;
        consumers.push(consumer);
        tracing::debug!(count = consumers.len(), "Consumer registered");
    }

    pub async fn consumer_count(&self) -> usize {
        self.consumers.read().await.len()
    }

    async fn snapshot(&self) -> Vec<Arc<dyn ProviderCallbacks>> {
        self.consumers.read().await.clone()
    }

    pub async fn notify_sink_added(&self, sink: &Sink) {
        for consumer in self.snapshot().await {
            if let Err(e) = consumer.on_sink_added(sink).await {
                tracing::warn!(sink_id = %sink.id, error = %e, "Consumer failed on sink-added, continuing");
            }
        }
    }

    pub async fn notify_sinks_removed(&self, sinks: &[Sink]) {
        for consumer in self.snapshot().await {
            if let Err(e) = consumer.on_sinks_removed(sinks).await {
                tracing::warn!(count = sinks.len(), error = %e, "Consumer failed on sinks-removed, continuing");
            }
        }
    }

    pub async fn notify_sink_updated(&self, sink: &Sink) {
        for consumer in self.snapshot().await {
            if let Err(e) = consumer.on_sink_updated(sink).await {
                tracing::warn!(sink_id = %sink.id, error = %e, "Consumer failed on sink-updated, continuing");
            }
        }
    }

    pub async fn notify_activity_added(&self, activity: &Activity) {
        for consumer in self.snapshot().await {
            if let Err(e) = consumer.on_activity_added(activity).await {
                tracing::warn!(activity_id = %activity.id, error = %e, "Consumer failed on activity-added, continuing");
            }
        }
    }

    pub async fn notify_activity_removed(&self, activity: &Activity) {
        for consumer in self.snapshot().await {
            if let Err(e) = consumer.on_activity_removed(activity).await {
                tracing::warn!(activity_id = %activity.id, error = %e, "Consumer failed on activity-removed, continuing");
            }
        }
    }

    pub async fn notify_activity_updated(&self, activity: &Activity) {
        for consumer in self.snapshot().await {
            if let Err(e) = consumer.on_activity_updated(activity).await {
                tracing::warn!(activity_id = %activity.id, error = %e, "Consumer failed on activity-updated, continuing");
            }
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
