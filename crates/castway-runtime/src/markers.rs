use std::path::PathBuf;

use futures::future::BoxFuture;

use crate::error::QueryError;
use crate::selector::VariantQuery;

/// Variant query backed by per-variant marker files.
///
/// An active instance drops `<base_dir>/<variant>.active`; peers probe
/// for that file. Best-effort by construction: a marker left behind by a
/// crashed instance or written mid-probe is exactly the race window the
/// selector already accepts.
pub struct MarkerQuery {
    base_dir: PathBuf,
}

impl MarkerQuery {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Default marker location: ~/.castway/instances/
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".castway")
            .join("instances")
    }

    fn marker_path(&self, variant: &str) -> PathBuf {
        self.base_dir.join(format!("{variant}.active"))
    }

    /// Drop this variant's marker so peers observe it as enabled.
    pub async fn mark_active(&self, variant: &str) -> Result<(), QueryError> {
        tokio::fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| QueryError::new(e.to_string()))?;
        let path = self.marker_path(variant);
        tokio::fs::write(&path, b"")
            .await
            .map_err(|e| QueryError::new(e.to_string()))?;
        tracing::debug!(variant, path = %path.display(), "Marker written");
        Ok(())
    }

    /// Remove this variant's marker on shutdown. Missing markers are not
    /// an error.
    pub async fn clear(&self, variant: &str) {
        let path = self.marker_path(variant);
        if let Err(e) = tokio::fs::remove_file(&path).await
            && e.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!(variant, error = %e, "Failed to clear marker");
        }
    }
}

impl VariantQuery for MarkerQuery {
    fn is_enabled<'a>(&'a self, variant: &'a str) -> BoxFuture<'a, Result<bool, QueryError>> {
        Box::pin(async move {
            match tokio::fs::try_exists(self.marker_path(variant)).await {
                Ok(exists) => Ok(exists),
                Err(e) => Err(QueryError::new(e.to_string())),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn unmarked_variant_is_not_enabled() {
        let tmp = TempDir::new().unwrap();
        let query = MarkerQuery::new(tmp.path().to_path_buf());
        assert!(!query.is_enabled("dev").await.unwrap());
    }

    #[tokio::test]
    async fn marked_variant_is_enabled_until_cleared() {
        let tmp = TempDir::new().unwrap();
        let query = MarkerQuery::new(tmp.path().to_path_buf());

        query.mark_active("dev").await.unwrap();
        assert!(query.is_enabled("dev").await.unwrap());

        query.clear("dev").await;
        assert!(!query.is_enabled("dev").await.unwrap());
    }

    #[tokio::test]
    async fn clearing_a_missing_marker_is_quiet() {
        let tmp = TempDir::new().unwrap();
        let query = MarkerQuery::new(tmp.path().to_path_buf());
        query.clear("never-marked").await;
    }
}
