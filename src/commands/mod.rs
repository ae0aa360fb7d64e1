//! One command per runtime variant.
//!
//! Each command resolves its collection target, fills a staging directory
//! and packages it. Everything that varies between runs comes in through
//! [`RunConfig`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::cluster::ClusterQuery;
use crate::collectors::collector::collect_resources;
use crate::collectors::helm::collect_helm_releases;
use crate::config::{kinds_for, resolve_credentials, PlatformCredentials};
use crate::constants::STAGING_DIR_PREFIX;
use crate::models::{CollectionTarget, RunConfig, RuntimeVariant};
use crate::prompt::select_interactive;
use crate::security::{redact_secret, safe_error_message};
use crate::utils::compress::package;
use crate::utils::output::ensure_dir;
use crate::utils::summary::CollectionReport;

pub mod gitops;
pub mod onprem;
pub mod pipelines;

/// Staging directory of one run
#[derive(Debug, Clone)]
pub struct Staging {
    pub dir: PathBuf,
    /// Unix timestamp shared by the staging directory and the archive name
    pub timestamp: String,
}

impl Staging {
    /// Create `<output>/codefresh-support-<unix timestamp>`
    pub fn create(output_dir: &Path) -> Result<Self> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let dir = output_dir.join(format!("{}-{}", STAGING_DIR_PREFIX, timestamp));
        ensure_dir(&dir)?;
        info!("Staging directory created at {}", dir.display());
        Ok(Self { dir, timestamp })
    }

    /// Archive the staging directory and remove it
    pub fn package(self, variant: RuntimeVariant) -> Result<PathBuf> {
        package(&self.dir, &variant.slug(), &self.timestamp)
            .context(format!("Failed to package {}", self.dir.display()))
    }
}

/// Run the command matching `config.variant`
pub async fn run(cluster: &dyn ClusterQuery, config: &RunConfig) -> Result<PathBuf> {
    match config.variant {
        RuntimeVariant::GitOps => gitops::run(cluster, config).await,
        RuntimeVariant::Pipelines => pipelines::run(cluster, config, optional_credentials()).await,
        RuntimeVariant::OnPrem => onprem::run(cluster, config, optional_credentials()).await,
    }
}

/// Resolve platform credentials, reporting a failure instead of aborting
pub fn optional_credentials() -> Option<PlatformCredentials> {
    match resolve_credentials() {
        Ok(credentials) => Some(credentials),
        Err(e) => {
            warn!("{}", safe_error_message("Unable to load Codefresh credentials", &format!("{:#}", e)));
            warn!("Continuing without Codefresh API data");
            None
        }
    }
}

/// Operator-facing text for a failed platform call, with the token removed
pub fn api_error_message(context: &str, error: &anyhow::Error, token: &str) -> String {
    redact_secret(&safe_error_message(context, &format!("{:#}", error)), token)
}

/// Use `provided`, or let the operator pick from the cluster's namespaces
pub async fn select_namespace(
    cluster: &dyn ClusterQuery,
    provided: Option<&str>,
    variant: RuntimeVariant,
) -> Result<String> {
    if let Some(namespace) = provided {
        return Ok(namespace.to_string());
    }

    let namespaces = cluster
        .namespaces()
        .await
        .context("Failed to list namespaces")?;
    println!();
    select_interactive(
        &namespaces,
        &format!("Which Namespace Is {} Installed In?", variant),
    )
}

/// Collect the variant's catalogue and Helm releases into the staging directory
pub async fn collect_target(
    cluster: &dyn ClusterQuery,
    target: &CollectionTarget,
    staging: &Staging,
) -> Result<CollectionReport> {
    info!("Gathering data in namespace {}", target.namespace);
    let report = collect_resources(
        cluster,
        &target.namespace,
        &target.kinds,
        &staging.dir,
        env!("CARGO_PKG_VERSION"),
    )
    .await?;

    collect_helm_releases(cluster, &target.namespace, &staging.dir).await?;
    report.log_summary();
    Ok(report)
}

/// Collection target for `variant` in `namespace`
pub fn target_for(variant: RuntimeVariant, namespace: String) -> CollectionTarget {
    CollectionTarget {
        namespace,
        kinds: kinds_for(variant),
    }
}
