use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::info;

use crate::cluster::ClusterQuery;
use crate::codefresh::PlatformClient;
use crate::commands::{collect_target, select_namespace, target_for, Staging};
use crate::config::PlatformCredentials;
use crate::constants::{
    ONPREM_ACCOUNTS_FILE_NAME, ONPREM_FEATURE_FLAGS_FILE_NAME, ONPREM_RUNTIMES_FILE_NAME,
    ONPREM_USERS_FILE_NAME,
};
use crate::models::{RunConfig, RuntimeVariant};
use crate::utils::output::write_yaml;

/// Collect an on-prem installation and package it.
///
/// Refuses to run against the hosted platform.
pub async fn run(
    cluster: &dyn ClusterQuery,
    config: &RunConfig,
    credentials: Option<PlatformCredentials>,
) -> Result<PathBuf> {
    let variant = RuntimeVariant::OnPrem;

    if let Some(credentials) = &credentials {
        if credentials.is_saas() {
            bail!(
                "The API URL ({}) is not an on-prem instance. Use the pipelines or gitops command instead.",
                credentials.base_url
            );
        }
    }

    let namespace = select_namespace(cluster, config.namespace.as_deref(), variant).await?;
    info!("Gathering data for {} in {}", variant, namespace);

    let staging = Staging::create(&config.output_dir)?;
    collect_target(cluster, &target_for(variant, namespace), &staging).await?;

    if let Some(credentials) = &credentials {
        let client = PlatformClient::new(credentials, config.http_timeout)?;
        write_platform_data(&client, &staging.dir).await?;
    }

    staging.package(variant)
}

/// Write the installation-wide API data into `dest`.
pub async fn write_platform_data(client: &PlatformClient, dest: &Path) -> Result<()> {
    info!("Collecting on-prem data from {}", client.base_url());

    let accounts = client.onprem_accounts().await.context("Failed to get accounts")?;
    write_yaml(&dest.join(format!("{}.yaml", ONPREM_ACCOUNTS_FILE_NAME)), &accounts)?;

    let runtimes = client.onprem_runtimes().await.context("Failed to get runtimes")?;
    write_yaml(&dest.join(format!("{}.yaml", ONPREM_RUNTIMES_FILE_NAME)), &runtimes)?;

    let users = client.onprem_users().await.context("Failed to get users")?;
    write_yaml(&dest.join(format!("{}.yaml", ONPREM_USERS_FILE_NAME)), &users)?;

    let features = client
        .onprem_feature_flags()
        .await
        .context("Failed to get feature flags")?;
    write_yaml(&dest.join(format!("{}.yaml", ONPREM_FEATURE_FLAGS_FILE_NAME)), &features)?;

    Ok(())
}
