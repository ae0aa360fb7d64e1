//! Global constants for the cf-support application.
//!
//! This module centralizes all hardcoded values (file names, labels,
//! endpoints, timeouts) so the collectors and commands agree on them.

// Staging layout
/// Prefix of the staging directory, followed by the unix timestamp
pub const STAGING_DIR_PREFIX: &str = "codefresh-support";

/// Namespace event listing written at the staging root
pub const EVENTS_FILE_NAME: &str = "Events.txt";

/// File holding the collector version tag
pub const VERSION_FILE_NAME: &str = "cf-support-version.txt";

/// Helm release listing written at the staging root
pub const HELM_RELEASES_FILE_NAME: &str = "HelmReleases";

/// Pipelines runtime definition written at the staging root
pub const RUNTIME_SPEC_FILE_NAME: &str = "pipelines-runtime-spec";

// On-prem API dumps
pub const ONPREM_ACCOUNTS_FILE_NAME: &str = "onprem-accounts";
pub const ONPREM_RUNTIMES_FILE_NAME: &str = "onprem-runtimes";
pub const ONPREM_USERS_FILE_NAME: &str = "onprem-users";
pub const ONPREM_FEATURE_FLAGS_FILE_NAME: &str = "onprem-feature-flags";

// Cluster queries
/// Label restricting storage claims and volumes to the current account
pub const ACCOUNT_LABEL_SELECTOR: &str = "io.codefresh.accountName";

/// Marker kubectl prints on stderr when a kind is not registered
pub const UNKNOWN_RESOURCE_MARKER: &str = "the server doesn't have a resource type";

/// Default cluster CLI binary
pub const DEFAULT_KUBECTL: &str = "kubectl";

/// Default Helm CLI binary
pub const DEFAULT_HELM: &str = "helm";

// Timeouts
/// Default timeout for a single kubectl/helm invocation in seconds
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 120;

/// Default HTTP timeout for platform API requests in seconds
pub const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 30;

// Credentials
/// API token environment variable
pub const ENV_API_KEY: &str = "CF_API_KEY";

/// Platform URL environment variable
pub const ENV_URL: &str = "CF_URL";

/// Per-user CLI config file, relative to the home directory
pub const CFCONFIG_FILE_NAME: &str = ".cfconfig";

/// Path appended to the platform URL to reach the REST API
pub const API_PATH_SUFFIX: &str = "/api";

/// API base URL of the hosted (SaaS) platform
pub const SAAS_API_URL: &str = "https://g.codefresh.io/api";

// Archive
/// Extension of the support package
pub const ARCHIVE_EXTENSION: &str = "tar.gz";

/// Buffer size used when hashing the archive (1MB)
pub const HASH_BUFFER_SIZE: usize = 1024 * 1024;
