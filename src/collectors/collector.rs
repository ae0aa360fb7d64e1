use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::cluster::ClusterQuery;
use crate::constants::{EVENTS_FILE_NAME, VERSION_FILE_NAME};
use crate::models::{container_names, object_name, CollectedResourceSet, KindHandling, ResourceKind};
use crate::security::staged_file_path;
use crate::utils::output::{ensure_dir, write_text, write_yaml};
use crate::utils::summary::CollectionReport;

/// Collect every kind in `kinds` from `namespace` into `dest`.
///
/// Kinds are processed in order. A failed cluster query only skips the kind,
/// object or container it concerns; a failed write aborts the run. Namespace
/// events and the version tag are written once all kinds are done.
pub async fn collect_resources(
    cluster: &dyn ClusterQuery,
    namespace: &str,
    kinds: &[ResourceKind],
    dest: &Path,
    version: &str,
) -> Result<CollectionReport> {
    let mut report = CollectionReport::default();

    for kind in kinds {
        collect_kind(cluster, namespace, kind, dest, &mut report).await?;
    }

    info!("Collecting events in {}", namespace);
    let events = cluster
        .events(namespace)
        .await
        .context(format!("Failed to get events in namespace {}", namespace))?;
    let events_path = dest.join(EVENTS_FILE_NAME);
    write_text(&events_path, &events)?;
    report.record_file(events_path);

    let version_path = dest.join(VERSION_FILE_NAME);
    write_text(&version_path, version)?;
    report.record_file(version_path);

    Ok(report)
}

async fn collect_kind(
    cluster: &dyn ClusterQuery,
    namespace: &str,
    kind: &ResourceKind,
    dest: &Path,
    report: &mut CollectionReport,
) -> Result<()> {
    let label = kind.label();
    let kind_dir = dest.join(label);
    ensure_dir(&kind_dir)?;

    info!("Collecting {}", kind);
    let set = match cluster.list(kind.name, namespace, kind.label_selector()).await {
        Ok(set) => set,
        Err(e) if e.is_unknown_kind() => {
            let message = format!("Resource type {} is not available in this cluster, skipping", kind);
            warn!("{}", message);
            report.record_skip(kind.name, format!("{} ({})", message, e));
            return Ok(());
        }
        Err(e) => {
            warn!("Failed to list {}: {}", kind, e);
            report.record_skip(kind.name, e.to_string());
            return Ok(());
        }
    };

    let list_path = kind_dir.join(format!("_{}List.txt", label));
    write_text(&list_path, &set.listing)?;
    report.record_file(list_path);
    report.kinds_collected.push(kind.name.to_string());

    match kind.handling {
        KindHandling::Storage => write_storage_specs(&set, &kind_dir, report)?,
        KindHandling::Pod => {
            collect_pod_logs(cluster, namespace, &set, &kind_dir, report).await?;
            describe_objects(cluster, namespace, kind, &set, &kind_dir, report).await?;
        }
        KindHandling::Describe => {
            describe_objects(cluster, namespace, kind, &set, &kind_dir, report).await?
        }
    }

    Ok(())
}

fn write_storage_specs(
    set: &CollectedResourceSet,
    kind_dir: &Path,
    report: &mut CollectionReport,
) -> Result<()> {
    for item in set.items() {
        let Some(name) = object_name(item) else {
            debug!("Skipping storage object without a name");
            continue;
        };
        let path = staged_file_path(kind_dir, name, ".yaml");
        write_yaml(&path, item)?;
        report.record_file(path);
    }
    Ok(())
}

async fn collect_pod_logs(
    cluster: &dyn ClusterQuery,
    namespace: &str,
    set: &CollectedResourceSet,
    kind_dir: &Path,
    report: &mut CollectionReport,
) -> Result<()> {
    for pod in set.items() {
        let Some(pod_name) = object_name(pod) else {
            continue;
        };

        for container in container_names(pod) {
            debug!("Fetching logs for {}/{}", pod_name, container);
            match cluster.logs(namespace, pod_name, container).await {
                Ok(logs) => {
                    let path = staged_file_path(kind_dir, &format!("{}_{}", pod_name, container), ".log");
                    write_text(&path, &logs)?;
                    report.record_file(path);
                }
                Err(e) => {
                    warn!("Failed to get logs for {}/{}: {}", pod_name, container, e);
                    report.record_failure(format!("logs {}/{}: {}", pod_name, container, e));
                }
            }
        }
    }
    Ok(())
}

async fn describe_objects(
    cluster: &dyn ClusterQuery,
    namespace: &str,
    kind: &ResourceKind,
    set: &CollectedResourceSet,
    kind_dir: &Path,
    report: &mut CollectionReport,
) -> Result<()> {
    for item in set.items() {
        let Some(name) = object_name(item) else {
            continue;
        };

        match cluster.describe(kind.name, namespace, name).await {
            Ok(description) => {
                let path = staged_file_path(kind_dir, name, ".yaml");
                write_text(&path, &description)?;
                report.record_file(path);
            }
            Err(e) => {
                warn!("Failed to describe {} {}: {}", kind, name, e);
                report.record_failure(format!("describe {} {}: {}", kind.name, name, e));
            }
        }
    }
    Ok(())
}
