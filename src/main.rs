use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use tokio::runtime::Runtime;

use cf_support::cli::Args;
use cf_support::cluster::KubectlClient;
use cf_support::commands;
use cf_support::security::safe_error_message;

fn main() {
    // Parse arguments
    let args = Args::parse();

    if let Err(e) = initialize_logging(args.verbose) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&args) {
        error!("{}", safe_error_message("Support package generation failed", &format!("{:#}", e)));
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.run_config();
    info!("Starting {} data collection", config.variant);

    let cluster = KubectlClient::new(&config.kubectl, &config.helm, config.command_timeout);
    let runtime = Runtime::new().context("Failed to create Tokio runtime")?;
    let archive = runtime.block_on(commands::run(&cluster, &config))?;

    info!("Support package created: {}", archive.display());
    info!("Please attach it to your support ticket");
    Ok(())
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ).context("Failed to initialize logger")?;
    Ok(())
}
