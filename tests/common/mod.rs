//! Test utilities shared by the integration tests.
//!
//! Provides an in-memory cluster and helpers for inspecting support packages.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use flate2::read::GzDecoder;
use serde_json::{json, Value};
use tar::Archive;

use cf_support::cluster::{ClusterQuery, QueryError};
use cf_support::models::CollectedResourceSet;

/// Cluster serving a fixed set of listings.
///
/// Kinds without a listing behave like kinds the API server does not know.
/// Every query is recorded as `<operation> <args>`.
#[derive(Default)]
pub struct FakeCluster {
    pub namespaces: Vec<String>,
    pub listings: HashMap<String, Value>,
    pub events: Option<String>,
    pub helm: Option<Value>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeCluster {
    pub fn new() -> Self {
        Self {
            events: Some("LAST SEEN   TYPE     REASON\n2m   Normal   Scheduled\n".to_string()),
            ..Default::default()
        }
    }

    /// Serve `items` when `kind` is listed
    pub fn with_kind(mut self, kind: &str, items: Value) -> Self {
        self.listings.insert(kind.to_string(), items);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn failed(command: &str, stderr: &str) -> QueryError {
    QueryError::CommandFailed {
        command: command.to_string(),
        status: "exit status: 1".to_string(),
        stderr: stderr.to_string(),
    }
}

#[async_trait]
impl ClusterQuery for FakeCluster {
    async fn namespaces(&self) -> Result<Vec<String>, QueryError> {
        self.record("namespaces".to_string());
        Ok(self.namespaces.clone())
    }

    async fn list(
        &self,
        kind: &str,
        namespace: &str,
        selector: &str,
    ) -> Result<CollectedResourceSet, QueryError> {
        self.record(format!("list {} {} {}", kind, namespace, selector));
        let items = self.listings.get(kind).ok_or_else(|| QueryError::UnknownKind {
            kind: kind.to_lowercase(),
        })?;

        let names: Vec<&str> = items
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|i| i.pointer("/metadata/name").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default();

        Ok(CollectedResourceSet {
            listing: format!("NAME\n{}\n", names.join("\n")),
            json: json!({ "apiVersion": "v1", "kind": "List", "items": items }),
        })
    }

    async fn describe(&self, kind: &str, namespace: &str, name: &str) -> Result<String, QueryError> {
        self.record(format!("describe {} {} {}", kind, namespace, name));
        Ok(format!("Name:         {}\nNamespace:    {}\n", name, namespace))
    }

    async fn logs(&self, namespace: &str, pod: &str, container: &str) -> Result<String, QueryError> {
        self.record(format!("logs {} {} {}", namespace, pod, container));
        Ok(format!("2024-01-01T00:00:00Z {} started\n", container))
    }

    async fn events(&self, namespace: &str) -> Result<String, QueryError> {
        self.record(format!("events {}", namespace));
        self.events
            .clone()
            .ok_or_else(|| failed("kubectl get events", "forbidden"))
    }

    async fn helm_releases(&self, namespace: &str) -> Result<Value, QueryError> {
        self.record(format!("helm {}", namespace));
        self.helm
            .clone()
            .ok_or_else(|| failed("helm list", "Error: Kubernetes cluster unreachable"))
    }
}

/// Pod object with the given containers
pub fn pod(name: &str, containers: &[&str]) -> Value {
    let containers: Vec<Value> = containers.iter().map(|c| json!({ "name": c })).collect();
    json!({
        "metadata": { "name": name },
        "spec": { "containers": containers }
    })
}

/// Object carrying only a name
pub fn named(name: &str) -> Value {
    json!({ "metadata": { "name": name } })
}

/// Paths and contents of the files in a `.tar.gz`
pub fn archive_files(path: &Path) -> HashMap<String, String> {
    let mut archive = Archive::new(GzDecoder::new(File::open(path).unwrap()));
    let mut files = HashMap::new();

    for entry in archive.entries().unwrap() {
        let mut entry = entry.unwrap();
        if !entry.header().entry_type().is_file() {
            continue;
        }
        let name = entry.path().unwrap().to_string_lossy().to_string();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        files.insert(name, content);
    }

    files
}

/// Names of the entries in `dir`
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
