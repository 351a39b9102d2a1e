use std::sync::Arc;

use futures::future::BoxFuture;

use castway_provider::{
    Activity, ActivityCallbacks, ActivityState, CallbackError, EventDispatcher, ProviderManager,
    Sink, SinkDiscoveryCallbacks,
};

/// Consumer that fails every callback it receives.
struct PoisonConsumer;

impl SinkDiscoveryCallbacks for PoisonConsumer {
    fn on_sink_added<'a>(&'a self, _: &'a Sink) -> BoxFuture<'a, Result<(), CallbackError>> {
        Box::pin(async { Err(CallbackError::new("poison")) })
    }

    fn on_sinks_removed<'a>(&'a self, _: &'a [Sink]) -> BoxFuture<'a, Result<(), CallbackError>> {
        Box::pin(async { Err(CallbackError::new("poison")) })
    }

    fn on_sink_updated<'a>(&'a self, _: &'a Sink) -> BoxFuture<'a, Result<(), CallbackError>> {
        Box::pin(async { Err(CallbackError::new("poison")) })
    }
}

impl ActivityCallbacks for PoisonConsumer {
    fn on_activity_added<'a>(
        &'a self,
        _: &'a Activity,
    ) -> BoxFuture<'a, Result<(), CallbackError>> {
        Box::pin(async { Err(CallbackError::new("poison")) })
    }

    fn on_activity_removed<'a>(
        &'a self,
        _: &'a Activity,
    ) -> BoxFuture<'a, Result<(), CallbackError>> {
        Box::pin(async { Err(CallbackError::new("poison")) })
    }

    fn on_activity_updated<'a>(
        &'a self,
        _: &'a Activity,
    ) -> BoxFuture<'a, Result<(), CallbackError>> {
        Box::pin(async { Err(CallbackError::new("poison")) })
    }
}

#[tokio::test]
async fn sink_add_update_remove_leaves_no_snapshot() {
    let dispatcher = EventDispatcher::new();
    let manager = Arc::new(ProviderManager::new());
    dispatcher.register(manager.clone()).await;

    let s1 = Sink::new("s1", "TV");
    dispatcher.notify_sink_added(&s1).await;

    let s1_renamed = Sink::new("s1", "Living Room TV");
    dispatcher.notify_sink_updated(&s1_renamed).await;
    assert_eq!(manager.sink("s1").await.unwrap().name, "Living Room TV");

    dispatcher.notify_sinks_removed(&[s1_renamed]).await;

    assert!(manager.sink("s1").await.is_none());
    assert!(manager.sinks().await.is_empty());
}

#[tokio::test]
async fn poison_consumer_never_disturbs_the_manager() {
    let dispatcher = EventDispatcher::new();
    // Poison consumer registered first, so it fails before the manager
    // sees each event.
    dispatcher.register(Arc::new(PoisonConsumer)).await;
    let manager = Arc::new(ProviderManager::new());
    dispatcher.register(manager.clone()).await;

    let sink = Sink::new("s1", "TV");
    dispatcher.notify_sink_added(&sink).await;

    let activity = Activity::new("session-1", "s1");
    dispatcher.notify_activity_added(&activity).await;
    dispatcher
        .notify_activity_updated(&activity.clone().with_state(ActivityState::Active))
        .await;

    assert_eq!(manager.sinks().await.len(), 1);
    assert_eq!(
        manager.activity("session-1").await.unwrap().state,
        ActivityState::Active
    );
}

#[tokio::test]
async fn activity_survives_sink_removal() {
    // An activity may outlive its sink's presence in discovery.
    let dispatcher = EventDispatcher::new();
    let manager = Arc::new(ProviderManager::new());
    dispatcher.register(manager.clone()).await;

    let sink = Sink::new("s1", "TV");
    dispatcher.notify_sink_added(&sink).await;
    dispatcher
        .notify_activity_added(&Activity::new("session-1", "s1"))
        .await;

    dispatcher.notify_sinks_removed(&[sink]).await;

    assert!(manager.sink("s1").await.is_none());
    let activity = manager.activity("session-1").await.unwrap();
    assert_eq!(activity.sink_id, "s1");
}
