//! Command-line interface.

use std::path::PathBuf;

use cadwatch_application::SuiteOptions;
use cadwatch_domain::HarnessConfig;
use cadwatch_infrastructure::DEFAULT_REPORT_PATH;
use clap::Parser;

/// Contract tests for the JPL SSD close-approach API
#[derive(Parser, Debug)]
#[command(name = "cadwatch")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    CADWATCH_BASE_URL            API base URL (default: https://ssd-api.jpl.nasa.gov/)
    CADWATCH_ENDPOINT            Endpoint under test (default: cad.api)
    CADWATCH_TIMEOUT_SECS        Per-request timeout (default: none)
    CADWATCH_STAGGER_MS          Delay between concurrent calls (default: 100)
    CADWATCH_SAMPLE_LIMIT        Row limit for sampled cases (default: 5)
    CADWATCH_CONCURRENCY_LEVELS  Comma-separated levels (default: 5,10)
    RUST_LOG                     Log filter (default: info)
"#)]
pub struct Cli {
    /// Only run the default-response and concurrency groups
    #[arg(long)]
    pub smoke_test: bool,

    /// Only run cases whose `group::name` contains this text
    #[arg(short = 'k', long)]
    pub keywords: Option<String>,

    /// Stop at the first failed or errored case
    #[arg(short = 'x', long)]
    pub fail_fast: bool,

    /// Where to write the JSON run report
    #[arg(long, default_value = DEFAULT_REPORT_PATH)]
    pub report: PathBuf,

    /// API base URL; overrides CADWATCH_BASE_URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds; overrides CADWATCH_TIMEOUT_SECS
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// Applies command-line overrides on top of `config`.
    pub fn apply(&self, config: &mut HarnessConfig) {
        if let Some(base_url) = &self.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = Some(timeout_secs);
        }
    }

    /// Returns the suite options selected on the command line.
    #[must_use]
    pub fn suite_options(&self) -> SuiteOptions {
        SuiteOptions::new()
            .with_smoke_only(self.smoke_test)
            .with_keywords(self.keywords.clone())
            .with_fail_fast(self.fail_fast)
    }
}
