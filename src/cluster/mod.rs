//! Read-only queries against the Kubernetes cluster.
//!
//! The collection traversal only talks to the cluster through the
//! [`ClusterQuery`] trait. The production implementation shells out to
//! `kubectl` and `helm` ([`kubectl::KubectlClient`]); tests substitute an
//! in-memory cluster.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::models::CollectedResourceSet;

/// Cluster CLI backed implementation
pub mod kubectl;

pub use kubectl::KubectlClient;

/// Failure of a single cluster query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The API server has no resource type with this name
    #[error("the server doesn't have a resource type \"{kind}\"")]
    UnknownKind { kind: String },

    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` timed out after {seconds}s")]
    Timeout { command: String, seconds: u64 },

    #[error("failed to parse output of `{command}`: {source}")]
    Parse {
        command: String,
        #[source]
        source: serde_json::Error,
    },
}

impl QueryError {
    pub fn is_unknown_kind(&self) -> bool {
        matches!(self, QueryError::UnknownKind { .. })
    }
}

/// Queries the collection traversal issues against a cluster.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClusterQuery: Send + Sync {
    /// Names of all namespaces, in the order the cluster returns them
    async fn namespaces(&self) -> Result<Vec<String>, QueryError>;

    /// List objects of `kind` in `namespace`, filtered by `selector` when non-empty
    async fn list(
        &self,
        kind: &str,
        namespace: &str,
        selector: &str,
    ) -> Result<CollectedResourceSet, QueryError>;

    /// Human readable description of one object
    async fn describe(&self, kind: &str, namespace: &str, name: &str) -> Result<String, QueryError>;

    /// Log of one container, with timestamps
    async fn logs(&self, namespace: &str, pod: &str, container: &str) -> Result<String, QueryError>;

    /// Namespace events sorted by creation time
    async fn events(&self, namespace: &str) -> Result<String, QueryError>;

    /// Helm releases installed in the namespace
    async fn helm_releases(&self, namespace: &str) -> Result<Value, QueryError>;
}
