//! Command line front end.

use anyhow::{Context, bail};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use stubber_build::{BuildConfig, BuildReport, Builder, DEFAULT_SCHEMA_EXTENSION};
use stubber_codegen::Cpp;
use stubber_codegen::cpp::DEFAULT_EXTENSION;
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "stubber")]
#[command(about = "Generate C++ class declarations from YAML schemas", long_about = None)]
pub struct Cli {
    /// Root of the schema tree
    #[arg(env = "STUBBER_SCHEMAS")]
    pub schemas: PathBuf,

    /// Root of the generated header tree
    #[arg(env = "STUBBER_OUTPUT")]
    pub output: PathBuf,

    /// Extension of generated headers
    #[arg(long, env = "STUBBER_EXTENSION", default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Extension of schema files
    #[arg(long, env = "STUBBER_SCHEMA_EXTENSION", default_value = DEFAULT_SCHEMA_EXTENSION)]
    pub schema_extension: String,

    /// Author shown in every banner
    #[arg(long, env = "STUBBER_AUTHOR")]
    pub author: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Builds the run configuration from the arguments.
    #[must_use]
    pub fn config(&self) -> BuildConfig {
        let config = BuildConfig::new(&self.schemas, &self.output)
            .schema_extension(&self.schema_extension)
            .target(Cpp::new().with_extension(&self.extension));
        match &self.author {
            Some(author) => config.author(author),
            None => config,
        }
    }

    /// Runs the build and fails if any schema was rejected.
    ///
    /// # Errors
    /// Returns an error on a fatal build failure or when the report lists
    /// rejected schemas.
    pub fn run(&self) -> anyhow::Result<()> {
        let config = self.config();
        tracing::debug!("Build configuration: {:?}", config);
        let report = Builder::new(config)
            .run()
            .with_context(|| format!("build of {} failed", self.schemas.display()))?;
        tracing::info!(
            "{} header(s) under {}",
            report.generated.len(),
            self.output.display()
        );
        check_report(&report)
    }
}

/// Turns rejections in a report into an error.
///
/// # Errors
/// Returns an error naming the count of rejected schemas.
pub fn check_report(report: &BuildReport) -> anyhow::Result<()> {
    if !report.is_clean() {
        bail!(
            "{} schema(s) rejected, {} header(s) generated",
            report.rejected.len(),
            report.generated.len()
        );
    }
    Ok(())
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the verbosity.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
