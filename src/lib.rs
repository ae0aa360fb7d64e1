//! # cf-support
//!
//! Diagnostic data collector for Codefresh runtimes and on-prem installations.
//!
//! ## Overview
//!
//! cf-support takes a read-only snapshot of the Kubernetes objects, container
//! logs and events of a Codefresh GitOps runtime, pipelines runtime or on-prem
//! installation, adds a few platform API responses, and packages everything
//! into a single `.tar.gz` for a support ticket.
//!
//! ## Features
//!
//! - **Fixed resource catalogue** per runtime variant
//! - **Tolerant traversal**: kinds the cluster does not serve are skipped
//! - **Pod logs** for every container, with timestamps
//! - **Platform API data** for pipelines runtimes and on-prem installs
//! - **Credential scrubbing** of every error shown to the operator
//!
//! ## Usage
//!
//! ```no_run
//! use cf_support::cluster::KubectlClient;
//! use cf_support::commands;
//! use cf_support::models::{RunConfig, RuntimeVariant};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut config = RunConfig::new(RuntimeVariant::GitOps);
//! config.namespace = Some("codefresh".to_string());
//!
//! let cluster = KubectlClient::default();
//! let archive = commands::run(&cluster, &config).await?;
//! println!("Support package: {}", archive.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`models`]: Runtime variants, resource kinds and run configuration
//! - [`config`]: Resource catalogue and credential resolution
//! - [`cluster`]: Cluster queries through kubectl and helm
//! - [`collectors`]: Traversal writing the staging tree
//! - [`codefresh`]: Platform REST API client
//! - [`commands`]: One command per runtime variant
//! - [`prompt`]: Interactive numbered menus
//! - [`utils`]: Output writers, packaging, hashing and the run report
//! - [`security`]: Filename sanitizing and credential scrubbing
//! - [`constants`]: Application-wide constants

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Core data models and structures used throughout the application
pub mod models;

/// Resource catalogue and credential resolution
pub mod config;

/// Cluster query seam and its kubectl implementation
pub mod cluster;

/// Collection of cluster state into the staging tree
pub mod collectors;

/// Codefresh platform API
pub mod codefresh;

/// Per-variant commands
pub mod commands;

/// Interactive selection
pub mod prompt;

/// Utility functions for output, packaging and hashing
pub mod utils;

/// Application constants and configuration values
pub mod constants;

/// Security utilities for filename sanitizing and credential protection
pub mod security;
