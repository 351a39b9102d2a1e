use std::collections::HashMap;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::callbacks::{ActivityCallbacks, SinkDiscoveryCallbacks};
use crate::error::CallbackError;
use crate::sink::{Activity, ActivityId, Sink, SinkId};

/// The standard provider consumer: holds the latest reported snapshot of
/// every known sink and activity.
///
/// Updates upsert rather than assert prior presence, so a backend that
/// (incorrectly) updates a never-added id still leaves the manager in a
/// coherent state.
pub struct ProviderManager {
    sinks: RwLock<HashMap<SinkId, Sink>>,
    activities: RwLock<HashMap<ActivityId, Activity>>,
}

impl ProviderManager {
    pub fn new() -> Self {
        Self {
            sinks: RwLock::new(HashMap::new()),
            activities: RwLock::new(HashMap::new()),
        }
    }

    /// Latest snapshot of all known sinks.
    pub async fn sinks(&self) -> Vec<Sink> {
        self.sinks.read().await.values().cloned().collect()
    }

    pub async fn sink(&self, id: &str) -> Option<Sink> {
        self.sinks.read().await.get(id).cloned()
    }

    pub async fn activities(&self) -> Vec<Activity> {
        self.activities.read().await.values().cloned().collect()
    }

    pub async fn activity(&self, id: &str) -> Option<Activity> {
        self.activities.read().await.get(id).cloned()
    }
}

impl Default for ProviderManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SinkDiscoveryCallbacks for ProviderManager {
    fn on_sink_added<'a>(&'a self, sink: &'a Sink) -> BoxFuture<'a, Result<(), CallbackError>> {
        Box::pin(async move {
            let mut sinks = self.sinks.write().await;
            sinks.insert(sink.id.clone(), sink.clone());
            tracing::debug!(sink_id = %sink.id, name = %sink.name, "Sink added");
            Ok(())
        })
    }

    fn on_sinks_removed<'a>(
        &'a self,
        removed: &'a [Sink],
    ) -> BoxFuture<'a, Result<(), CallbackError>> {
        Box::pin(async move {
            let mut sinks = self.sinks.write().await;
            for sink in removed {
                sinks.remove(&sink.id);
            }
            tracing::debug!(count = removed.len(), "Sinks removed");
            Ok(())
        })
    }

    fn on_sink_updated<'a>(&'a self, sink: &'a Sink) -> BoxFuture<'a, Result<(), CallbackError>> {
        Box::pin(async move {
            let mut sinks = self.sinks.write().await;
            // Upsert: an update for an unknown id is a backend bug but is
            // absorbed rather than dropped.
            sinks.insert(sink.id.clone(), sink.clone());
            tracing::debug!(sink_id = %sink.id, "Sink updated");
            Ok(())
        })
    }
}

impl ActivityCallbacks for ProviderManager {
    fn on_activity_added<'a>(
        &'a self,
        activity: &'a Activity,
    ) -> BoxFuture<'a, Result<(), CallbackError>> {
        Box::pin(async move {
            let mut activities = self.activities.write().await;
            activities.insert(activity.id.clone(), activity.clone());
            tracing::debug!(activity_id = %activity.id, sink_id = %activity.sink_id, "Activity added");
            Ok(())
        })
    }

    fn on_activity_removed<'a>(
        &'a self,
        activity: &'a Activity,
    ) -> BoxFuture<'a, Result<(), CallbackError>> {
        Box::pin(async move {
            let mut activities = self.activities.write().await;
            activities.remove(&activity.id);
            tracing::debug!(activity_id = %activity.id, "Activity removed");
            Ok(())
        })
    }

    fn on_activity_updated<'a>(
        &'a self,
        activity: &'a Activity,
    ) -> BoxFuture<'a, Result<(), CallbackError>> {
        Box::pin(async move {
            let mut activities = self.activities.write().await;
            activities.insert(activity.id.clone(), activity.clone());
            tracing::debug!(activity_id = %activity.id, state = ?activity.state, "Activity updated");
            Ok(())
        })
    }
}
