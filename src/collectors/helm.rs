use std::path::Path;

use anyhow::Result;
use log::{info, warn};

use crate::cluster::ClusterQuery;
use crate::constants::HELM_RELEASES_FILE_NAME;
use crate::utils::output::write_yaml;

/// Write the Helm releases of `namespace` to `<dest>/HelmReleases.yaml`.
///
/// A failing `helm` call is logged and skipped. Returns whether the file
/// was written.
pub async fn collect_helm_releases(
    cluster: &dyn ClusterQuery,
    namespace: &str,
    dest: &Path,
) -> Result<bool> {
    info!("Collecting Helm releases in {}", namespace);
    match cluster.helm_releases(namespace).await {
        Ok(releases) => {
            write_yaml(&dest.join(format!("{}.yaml", HELM_RELEASES_FILE_NAME)), &releases)?;
            Ok(true)
        }
        Err(e) => {
            warn!("Failed to list Helm releases: {}", e);
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::{MockClusterQuery, QueryError};
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_releases_written() {
        let dir = TempDir::new().unwrap();
        let mut cluster = MockClusterQuery::new();
        cluster
            .expect_helm_releases()
            .returning(|_| Ok(json!([{"name": "cf-gitops-runtime", "status": "deployed"}])));

        assert!(collect_helm_releases(&cluster, "cf", dir.path()).await.unwrap());
        let content = std::fs::read_to_string(dir.path().join("HelmReleases.yaml")).unwrap();
        assert!(content.contains("name: cf-gitops-runtime"));
    }

    #[tokio::test]
    async fn test_missing_helm_is_not_fatal() {
        let dir = TempDir::new().unwrap();
        let mut cluster = MockClusterQuery::new();
        cluster.expect_helm_releases().returning(|_| {
            Err(QueryError::Spawn {
                command: "helm list".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            })
        });

        assert!(!collect_helm_releases(&cluster, "cf", dir.path()).await.unwrap());
        assert!(!dir.path().join("HelmReleases.yaml").exists());
    }
}
