use std::path::PathBuf;

use anyhow::Result;
use log::info;

use crate::cluster::ClusterQuery;
use crate::commands::{collect_target, select_namespace, target_for, Staging};
use crate::models::{RunConfig, RuntimeVariant};

/// Collect a GitOps runtime and package it.
pub async fn run(cluster: &dyn ClusterQuery, config: &RunConfig) -> Result<PathBuf> {
    let variant = RuntimeVariant::GitOps;
    let namespace = select_namespace(cluster, config.namespace.as_deref(), variant).await?;
    info!("Gathering data for {} in {}", variant, namespace);

    let staging = Staging::create(&config.output_dir)?;
    collect_target(cluster, &target_for(variant, namespace), &staging).await?;

    staging.package(variant)
}
