// Re-export all items from the submodules
mod credentials;
mod resource_kinds;

// Re-export the resource catalogue
pub use resource_kinds::{
    kinds_for,
    ARGO_KINDS,
    CLASSIC_ONPREM_KINDS,
    GENERAL_KINDS,
    GITOPS_KINDS,
};

// Re-export credential resolution
pub use credentials::{
    default_config_path,
    resolve_credentials,
    resolve_from,
    CliConfig,
    CliContext,
    PlatformCredentials,
};
