//! Collection of cluster state into the staging tree.
//!
//! ## Layout
//!
//! ```text
//! codefresh-support-<unix timestamp>/
//! ├── <Kind>/
//! │   ├── _<Kind>List.txt        tabular listing
//! │   ├── <object>.yaml          description, or full spec for storage kinds
//! │   └── <pod>_<container>.log  pods only
//! ├── Events.txt
//! ├── HelmReleases.yaml
//! └── cf-support-version.txt
//! ```
//!
//! ## Usage Example
//!
//! ```no_run
//! use cf_support::cluster::KubectlClient;
//! use cf_support::collectors::collector::collect_resources;
//! use cf_support::config::kinds_for;
//! use cf_support::models::RuntimeVariant;
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let cluster = KubectlClient::default();
//! let kinds = kinds_for(RuntimeVariant::GitOps);
//! let report = collect_resources(&cluster, "codefresh", &kinds, Path::new("/tmp/staging"), "0.4.0").await?;
//! report.log_summary();
//! # Ok(())
//! # }
//! ```

/// Resource kind traversal
pub mod collector;

/// Helm release listing
pub mod helm;
