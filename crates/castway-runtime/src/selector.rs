use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::{QueryError, SelectorError};
use crate::instance::RuntimeInstance;

/// Peer-variant reachability probe: "is variant X enabled and
/// reachable?" Implementation-defined (platform introspection, marker
/// files); injected into the selector. A failed query is treated as
/// "not enabled".
pub trait VariantQuery: Send + Sync {
    fn is_enabled<'a>(&'a self, variant: &'a str) -> BoxFuture<'a, Result<bool, QueryError>>;
}

/// Decides at process start whether this runtime instance should become
/// active, given that several variants (e.g. a dev and a public build)
/// may be co-installed.
///
/// The preference list is ordered: an earlier variant takes precedence.
/// A lower-precedence instance activates only when every
/// higher-precedence variant queries as not enabled or unreachable.
///
/// This is a cooperative, best-effort protocol. If two variants query
/// each other simultaneously before either is observably enabled, both
/// may briefly activate; that race window is accepted rather than solved
/// with a locking protocol.
pub struct InstanceSelector {
    variants: Vec<String>,
    query: Arc<dyn VariantQuery>,
}

impl InstanceSelector {
    pub fn new(variants: Vec<String>, query: Arc<dyn VariantQuery>) -> Self {
        Self { variants, query }
    }

    /// Resolve whether the instance hosted at `origin` should run.
    ///
    /// An inactive result is not an error: the returned instance simply
    /// carries [`InstanceState::Inactive`](crate::instance::InstanceState::Inactive)
    /// and this copy performs no further work. Only an origin outside
    /// the known variant list fails.
    pub async fn should_start(&self, origin: &str) -> Result<RuntimeInstance, SelectorError> {
        let Some(rank) = self.variants.iter().position(|v| v == origin) else {
            return Err(SelectorError::UnknownOrigin(origin.to_string()));
        };

        for preferred in &self.variants[..rank] {
            let enabled = match self.query.is_enabled(preferred).await {
                Ok(enabled) => enabled,
                Err(e) => {
                    tracing::warn!(
                        variant = %preferred,
                        error = %e,
                        "Variant query failed, treating as not enabled"
                    );
                    false
                }
            };

            if enabled {
                tracing::info!(
                    origin,
                    preferred = %preferred,
                    "Higher-precedence variant is enabled, staying inactive"
                );
                return Ok(RuntimeInstance::inactive(origin));
            }
        }

        tracing::info!(origin, "No higher-precedence variant enabled, activating");
        Ok(RuntimeInstance::active(origin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Query stub answering from a fixed table; unknown variants fail.
    struct TableQuery {
        enabled: HashMap<String, bool>,
    }

    impl TableQuery {
        fn new(entries: &[(&str, bool)]) -> Arc<Self> {
            Arc::new(Self {
                enabled: entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), *v))
                    .collect(),
            })
        }
    }

    impl VariantQuery for TableQuery {
        fn is_enabled<'a>(&'a self, variant: &'a str) -> BoxFuture<'a, Result<bool, QueryError>> {
            Box::pin(async move {
                self.enabled
                    .get(variant)
                    .copied()
                    .ok_or_else(|| QueryError::new(format!("{variant} unreachable")))
            })
        }
    }

    fn dev_public() -> Vec<String> {
        vec!["dev".to_string(), "public".to_string()]
    }

    #[tokio::test]
    async fn highest_precedence_origin_always_activates() {
        let selector = InstanceSelector::new(dev_public(), TableQuery::new(&[]));
        let instance = selector.should_start("dev").await.unwrap();
        assert!(instance.is_active());
        assert_eq!(instance.origin(), "dev");
    }

    #[tokio::test]
    async fn lower_precedence_defers_to_enabled_peer() {
        let selector = InstanceSelector::new(dev_public(), TableQuery::new(&[("dev", true)]));
        let instance = selector.should_start("public").await.unwrap();
        assert!(!instance.is_active());
    }

    #[tokio::test]
    async fn lower_precedence_activates_when_peer_disabled() {
        let selector = InstanceSelector::new(dev_public(), TableQuery::new(&[("dev", false)]));
        let instance = selector.should_start("public").await.unwrap();
        assert!(instance.is_active());
    }

    #[tokio::test]
    async fn query_failure_counts_as_not_enabled() {
        // TableQuery fails for variants it has no entry for
        let selector = InstanceSelector::new(dev_public(), TableQuery::new(&[]));
        let instance = selector.should_start("public").await.unwrap();
        assert!(instance.is_active());
    }

    #[tokio::test]
    async fn unknown_origin_is_rejected() {
        let selector = InstanceSelector::new(dev_public(), TableQuery::new(&[]));
        let result = selector.should_start("beta").await;
        assert!(matches!(result, Err(SelectorError::UnknownOrigin(o)) if o == "beta"));
    }

    #[tokio::test]
    async fn three_variant_list_checks_all_higher_ranks() {
        let variants = vec!["dev".into(), "beta".into(), "public".into()];
        let selector = InstanceSelector::new(
            variants,
            TableQuery::new(&[("dev", false), ("beta", true)]),
        );
        let instance = selector.should_start("public").await.unwrap();
        assert!(!instance.is_active());
    }
}
