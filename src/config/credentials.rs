use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{API_PATH_SUFFIX, CFCONFIG_FILE_NAME, ENV_API_KEY, ENV_URL, SAAS_API_URL};

/// Token and API base URL used for platform requests.
#[derive(Clone, PartialEq, Eq)]
pub struct PlatformCredentials {
    pub token: String,
    /// Platform URL with the `/api` suffix already applied
    pub base_url: String,
}

impl PlatformCredentials {
    pub fn new(token: impl Into<String>, url: &str) -> Self {
        Self {
            token: token.into(),
            base_url: format!("{}{}", url.trim_end_matches('/'), API_PATH_SUFFIX),
        }
    }

    /// Whether the credentials point at the hosted platform
    pub fn is_saas(&self) -> bool {
        self.base_url == SAAS_API_URL
    }
}

impl std::fmt::Debug for PlatformCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformCredentials")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// A named context of the CLI config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliContext {
    pub token: String,
    pub url: String,
}

/// Layout of `~/.cfconfig`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub contexts: HashMap<String, CliContext>,
    #[serde(rename = "current-context", default)]
    pub current_context: String,
}

impl CliConfig {
    /// Load the CLI config from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = serde_yaml::from_str(&content)
            .context(format!("Failed to parse YAML config: {}", path.display()))?;

        debug!("Loaded Codefresh config from {}", path.display());
        Ok(config)
    }

    /// Credentials of the current context
    pub fn current_credentials(&self) -> Result<PlatformCredentials> {
        let context = self.contexts.get(&self.current_context).ok_or_else(|| {
            anyhow!(
                "Current context '{}' not found in Codefresh config",
                self.current_context
            )
        })?;

        Ok(PlatformCredentials::new(context.token.clone(), &context.url))
    }
}

/// Default location of the CLI config file
pub fn default_config_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CFCONFIG_FILE_NAME))
        .ok_or_else(|| anyhow!("Unable to determine the home directory"))
}

/// Resolve credentials from the environment, falling back to `~/.cfconfig`.
pub fn resolve_credentials() -> Result<PlatformCredentials> {
    let token = std::env::var(ENV_API_KEY).ok();
    let url = std::env::var(ENV_URL).ok();

    if let (Some(token), Some(url)) = (non_empty(token), non_empty(url)) {
        debug!("Using Codefresh credentials from {} and {}", ENV_API_KEY, ENV_URL);
        return Ok(PlatformCredentials::new(token, &url));
    }

    resolve_from(None, None, &default_config_path()?)
}

/// Resolve credentials from explicit values, then from the given config file.
///
/// Both `token` and `url` must be set for the explicit values to win.
pub fn resolve_from(
    token: Option<String>,
    url: Option<String>,
    config_path: &Path,
) -> Result<PlatformCredentials> {
    if let (Some(token), Some(url)) = (non_empty(token), non_empty(url)) {
        return Ok(PlatformCredentials::new(token, &url));
    }

    CliConfig::from_yaml_file(config_path)?.current_credentials()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
