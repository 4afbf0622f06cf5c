//! Paramset CLI Binary
//!
//! Command-line interface for inspecting and converting parameter files.

use clap::Parser;
use paramset::cli::{map_error, Cli, RunContext};
use paramset::logging::{init_logging, LoggingConfig};
use paramset::settings::Settings;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = match build_logging_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Paramset CLI starting");

    let context = match RunContext::new(cli.defaults.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading defaults: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from the settings layer and CLI flags.
/// Precedence: CLI flags override environment override settings file override defaults.
fn build_logging_config(cli: &Cli) -> Result<LoggingConfig, paramset::ParamError> {
    let mut config = Settings::load(cli.settings.as_deref())?.logging;

    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    Ok(config)
}
