use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde_json::Value;

use crate::constants::{
    DEFAULT_COMMAND_TIMEOUT_SECS, DEFAULT_CONNECTION_TIMEOUT_SECS, DEFAULT_HELM, DEFAULT_KUBECTL,
};

/// The three deployment topologies the collector knows how to gather.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeVariant {
    GitOps,
    Pipelines,
    OnPrem,
}

impl RuntimeVariant {
    /// Human readable name used in prompts and log lines
    pub fn display_name(&self) -> &'static str {
        match self {
            RuntimeVariant::GitOps => "Codefresh GitOps Runtime",
            RuntimeVariant::Pipelines => "Codefresh Pipelines Runtime",
            RuntimeVariant::OnPrem => "Codefresh OnPrem",
        }
    }

    /// Archive name prefix: the display name lowercased with dashes
    pub fn slug(&self) -> String {
        self.display_name().to_lowercase().replace(' ', "-")
    }
}

impl fmt::Display for RuntimeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How the traversal treats the objects of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindHandling {
    /// Claims and volumes: dump the full object spec, never describe
    Storage,
    /// Fetch container logs, then describe
    Pod,
    /// Describe every object
    Describe,
}

/// A Kubernetes object kind from the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceKind {
    /// Name passed to kubectl (case-insensitive there)
    pub name: &'static str,
    /// Label selector applied when listing, if the kind needs one
    pub selector: Option<&'static str>,
    pub handling: KindHandling,
}

impl ResourceKind {
    pub const fn describe(name: &'static str) -> Self {
        Self { name, selector: None, handling: KindHandling::Describe }
    }

    pub const fn pods(name: &'static str) -> Self {
        Self { name, selector: None, handling: KindHandling::Pod }
    }

    pub const fn storage(name: &'static str, selector: &'static str) -> Self {
        Self { name, selector: Some(selector), handling: KindHandling::Storage }
    }

    /// Short label used as the kind's directory name
    pub fn label(&self) -> &'static str {
        extract_kind(self.name)
    }

    /// Selector string for the list query, empty when unfiltered
    pub fn label_selector(&self) -> &'static str {
        self.selector.unwrap_or("")
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Text before the first `.` of a kind identifier, or the identifier itself.
///
/// `applications.argoproj.io` becomes `applications`.
pub fn extract_kind(identifier: &str) -> &str {
    match identifier.split_once('.') {
        Some((kind, _)) => kind,
        None => identifier,
    }
}

/// Namespace and kinds bounding one collection run.
#[derive(Debug, Clone)]
pub struct CollectionTarget {
    pub namespace: String,
    pub kinds: Vec<ResourceKind>,
}

/// Output of listing one kind.
#[derive(Debug, Clone)]
pub struct CollectedResourceSet {
    /// Tabular listing as printed by the cluster CLI
    pub listing: String,
    /// Structured listing (`{"items": [...]}`)
    pub json: Value,
}

impl CollectedResourceSet {
    /// Objects of the listing, empty when the JSON has no `items` array
    pub fn items(&self) -> &[Value] {
        self.json
            .get("items")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Name found at `metadata.name` of a Kubernetes object
pub fn object_name(object: &Value) -> Option<&str> {
    object.pointer("/metadata/name").and_then(Value::as_str)
}

/// Container names declared in a pod's `spec.containers`
pub fn container_names(pod: &Value) -> Vec<&str> {
    pod.pointer("/spec/containers")
        .and_then(Value::as_array)
        .map(|containers| {
            containers
                .iter()
                .filter_map(|c| c.get("name").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}

/// Everything a command needs, resolved once from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub variant: RuntimeVariant,
    pub namespace: Option<String>,
    pub runtime: Option<String>,
    /// Directory receiving the staging tree and the archive
    pub output_dir: PathBuf,
    pub kubectl: String,
    pub helm: String,
    pub command_timeout: Duration,
    pub http_timeout: Duration,
}

impl RunConfig {
    pub fn new(variant: RuntimeVariant) -> Self {
        Self {
            variant,
            namespace: None,
            runtime: None,
            output_dir: PathBuf::from("."),
            kubectl: DEFAULT_KUBECTL.to_string(),
            helm: DEFAULT_HELM.to_string(),
            command_timeout: Duration::from_secs(DEFAULT_COMMAND_TIMEOUT_SECS),
            http_timeout: Duration::from_secs(DEFAULT_CONNECTION_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_kind() {
        assert_eq!(extract_kind("persistentvolumeclaims"), "persistentvolumeclaims");
        assert_eq!(extract_kind("applications.argoproj.io"), "applications");
        assert_eq!(extract_kind("Pods"), "Pods");
        assert_eq!(extract_kind(".hidden"), "");
    }

    #[test]
    fn test_variant_slug() {
        assert_eq!(RuntimeVariant::GitOps.slug(), "codefresh-gitops-runtime");
        assert_eq!(RuntimeVariant::Pipelines.slug(), "codefresh-pipelines-runtime");
        assert_eq!(RuntimeVariant::OnPrem.slug(), "codefresh-onprem");
    }

    #[test]
    fn test_items_missing_is_empty() {
        let set = CollectedResourceSet { listing: String::new(), json: json!({"kind": "List"}) };
        assert!(set.items().is_empty());
    }

    #[test]
    fn test_container_names() {
        let pod = json!({
            "metadata": {"name": "api-0"},
            "spec": {"containers": [{"name": "api"}, {"name": "sidecar"}]}
        });
        assert_eq!(object_name(&pod), Some("api-0"));
        assert_eq!(container_names(&pod), vec!["api", "sidecar"]);
        assert!(container_names(&json!({"spec": {}})).is_empty());
    }

    #[test]
    fn test_resource_kind_selector() {
        let pvc = ResourceKind::storage("PersistentVolumeClaims", "io.codefresh.accountName");
        assert_eq!(pvc.label_selector(), "io.codefresh.accountName");
        assert_eq!(ResourceKind::describe("Services").label_selector(), "");
        assert_eq!(ResourceKind::pods("Pods").handling, KindHandling::Pod);
    }
}
