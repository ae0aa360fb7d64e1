use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_COMMAND_TIMEOUT_SECS, DEFAULT_HELM, DEFAULT_KUBECTL};
use crate::models::{RunConfig, RuntimeVariant};

/// Command-line arguments for the cf-support tool.
///
/// Global options control logging, where the package is written and which
/// cluster tools are invoked; the subcommand picks the runtime variant.
#[derive(Parser, Debug)]
#[clap(
    name = "cf-support",
    version,
    about = "Collect diagnostic data from Codefresh runtimes for support tickets"
)]
pub struct Args {
    /// Verbose logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Directory receiving the support package
    #[clap(short, long, default_value = ".", global = true)]
    pub output: PathBuf,

    /// kubectl binary to use
    #[clap(long, default_value = DEFAULT_KUBECTL, global = true)]
    pub kubectl: String,

    /// helm binary to use
    #[clap(long, default_value = DEFAULT_HELM, global = true)]
    pub helm: String,

    /// Timeout in seconds for each kubectl/helm invocation
    #[clap(long, default_value_t = DEFAULT_COMMAND_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    #[clap(subcommand)]
    pub command: Commands,
}

/// Available subcommands, one per runtime variant.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Collect data for a Codefresh GitOps runtime
    Gitops {
        /// Namespace the runtime is installed in
        #[clap(short, long)]
        namespace: Option<String>,
    },

    /// Collect data for a Codefresh pipelines runtime
    Pipelines {
        /// Namespace the runtime is installed in
        #[clap(short, long)]
        namespace: Option<String>,

        /// Name of the pipelines runtime
        #[clap(short, long)]
        runtime: Option<String>,
    },

    /// Collect data for a Codefresh on-prem installation
    Onprem {
        /// Namespace the platform is installed in
        #[clap(short, long)]
        namespace: Option<String>,
    },
}

impl Args {
    /// Resolve the arguments into the configuration of one run
    pub fn run_config(&self) -> RunConfig {
        let (variant, namespace, runtime) = match &self.command {
            Commands::Gitops { namespace } => (RuntimeVariant::GitOps, namespace.clone(), None),
            Commands::Pipelines { namespace, runtime } => {
                (RuntimeVariant::Pipelines, namespace.clone(), runtime.clone())
            }
            Commands::Onprem { namespace } => (RuntimeVariant::OnPrem, namespace.clone(), None),
        };

        let mut config = RunConfig::new(variant);
        config.namespace = namespace;
        config.runtime = runtime;
        config.output_dir = self.output.clone();
        config.kubectl = self.kubectl.clone();
        config.helm = self.helm.clone();
        config.command_timeout = Duration::from_secs(self.timeout);
        config
    }
}
