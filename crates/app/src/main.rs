//! Reqres suite binary.
//!
//! Loads configuration, acquires the bearer token once, runs every
//! scenario sequentially and prints the report to stdout. Logs go to
//! stderr.

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use reqres_application::{SuiteRunner, catalog};
use reqres_infrastructure::{SuiteConfig, build_context, render};

use crate::cli::Cli;

/// Exit status when the configuration cannot be used.
const EXIT_CONFIG_ERROR: u8 = 2;

fn init_tracing(level: Option<&str>) {
    let filter = level.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        EnvFilter::new,
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = match SuiteConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    match run(&cli, &config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

/// Returns whether every selected scenario passed.
async fn run(cli: &Cli, config: &SuiteConfig) -> anyhow::Result<bool> {
    let runner = SuiteRunner::new(catalog(&config.scenarios))
        .with_filters(cli.only.clone())
        .context("invalid --only filter")?;

    if cli.list {
        for name in runner.names() {
            println!("{name}");
        }
        return Ok(true);
    }

    tracing::info!("Starting reqres suite v{}", env!("CARGO_PKG_VERSION"));
    let ctx = build_context(config)
        .await
        .context("failed to prepare the suite")?;

    let report = runner.run(&ctx).await;
    let rendered = render(&report, cli.format.into()).context("failed to render the report")?;
    print!("{rendered}");

    Ok(report.all_passed())
}
