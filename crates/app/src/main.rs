//! Cadwatch - contract-test runner entry point.
//!
//! Wires the reqwest adapter and system clock into the contract suite,
//! runs it against the configured endpoint and writes the JSON report.

mod cli;
mod summary;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use cadwatch_application::{ApiClient, ContractRunner, ContractSuite, SbdbClassification};
use cadwatch_domain::Endpoint;
use cadwatch_infrastructure::{ReqwestHttpClient, SystemClock, load_config_from_env, write_report};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::summary::render_summary;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = load_config_from_env()?;
    cli.apply(&mut config);
    info!(
        base_url = %config.base_url,
        endpoint = %config.endpoint,
        "cadwatch v{}",
        env!("CARGO_PKG_VERSION")
    );

    let http = Arc::new(ReqwestHttpClient::new(
        config.timeout_secs.map(Duration::from_secs),
    )?);
    let client = ApiClient::from_config(Arc::clone(&http), &config)?;
    let lookup = SbdbClassification::new(ApiClient::for_endpoint(
        http,
        &config.base_url,
        Endpoint::SmallBody,
    )?)?;

    let runner = ContractRunner::new(client, lookup, SystemClock::new(), &config);
    let suite = ContractSuite::new(runner, &config);
    let report = suite.run(&cli.suite_options()).await;

    print!("{}", render_summary(&report));
    write_report(&cli.report, &report).await?;

    if report.all_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
