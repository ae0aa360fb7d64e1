use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};
use serde_json::Value;

use crate::cluster::ClusterQuery;
use crate::codefresh::{runtime_names, runtime_namespace, PlatformClient};
use crate::commands::{api_error_message, collect_target, select_namespace, target_for, Staging};
use crate::config::PlatformCredentials;
use crate::constants::RUNTIME_SPEC_FILE_NAME;
use crate::models::{RunConfig, RuntimeVariant};
use crate::prompt::select_interactive;
use crate::utils::output::write_yaml;

/// Collect a pipelines runtime and package it.
///
/// When the runtime definition is unavailable (no credentials, API failure
/// or no runtimes in the account) the namespace comes from the flag or the
/// namespace menu.
pub async fn run(
    cluster: &dyn ClusterQuery,
    config: &RunConfig,
    credentials: Option<PlatformCredentials>,
) -> Result<PathBuf> {
    let variant = RuntimeVariant::Pipelines;

    let runtime_spec = match &credentials {
        Some(credentials) => resolve_runtime_spec(credentials, config).await,
        None => None,
    };

    let namespace = match (&config.namespace, runtime_spec.as_ref().and_then(runtime_namespace)) {
        (Some(namespace), _) => namespace.clone(),
        (None, Some(namespace)) => namespace.to_string(),
        (None, None) => select_namespace(cluster, None, variant).await?,
    };
    info!("Gathering data for {} in {}", variant, namespace);

    let staging = Staging::create(&config.output_dir)?;
    collect_target(cluster, &target_for(variant, namespace), &staging).await?;

    if let Some(spec) = &runtime_spec {
        write_yaml(
            &staging.dir.join(format!("{}.yaml", RUNTIME_SPEC_FILE_NAME)),
            spec,
        )?;
    }

    staging.package(variant)
}

/// Runtime definition for this run, or `None` after reporting why not
async fn resolve_runtime_spec(credentials: &PlatformCredentials, config: &RunConfig) -> Option<Value> {
    let result = match PlatformClient::new(credentials, config.http_timeout) {
        Ok(client) => fetch_runtime(&client, config.runtime.as_deref()).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(spec) => spec,
        Err(e) => {
            warn!("{}", api_error_message("Unable to get the pipelines runtime", &e, &credentials.token));
            warn!("Continuing without the runtime definition");
            None
        }
    }
}

/// Fetch the named runtime, or let the operator pick one from the account.
///
/// Returns `None` when the account has no runtimes.
pub async fn fetch_runtime(client: &PlatformClient, name: Option<&str>) -> Result<Option<Value>> {
    if let Some(name) = name {
        return client
            .runtime(name)
            .await
            .map(Some)
            .context(format!("Failed to get runtime {}", name));
    }

    let runtimes = client
        .account_runtimes()
        .await
        .context("Failed to list runtimes")?;
    let names = runtime_names(&runtimes);
    if names.is_empty() {
        warn!("No pipelines runtimes found in the account");
        return Ok(None);
    }

    println!();
    let selected = select_interactive(&names, "Which Pipelines Runtime Are We Working With?")?;
    info!("Selected runtime {}", selected);

    let spec = runtimes
        .as_array()
        .and_then(|items| {
            items
                .iter()
                .find(|rt| rt.pointer("/metadata/name").and_then(Value::as_str) == Some(selected.as_str()))
        })
        .cloned()
        .context(format!("Runtime {} missing from listing", selected))?;
    Ok(Some(spec))
}
