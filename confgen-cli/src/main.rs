//! generate-collector-config — render the telemetry collector configuration.
//!
//! # Usage
//!
//! ```text
//! OTLP_ENDPOINT=https://otlp:4317 OTLP_API_KEY=... generate-collector-config > config.yaml
//! generate-collector-config --template-dir ./templates
//! ```
//!
//! The rendered configuration goes to stdout. Any failure prints a single
//! diagnostic line to stderr and exits with status 1.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use confgen_core::ProcessEnv;
use confgen_renderer::{generate_from_source, TemplateSource};

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "CONFGEN_LOG";

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "generate-collector-config",
    version,
    about = "Render the telemetry collector configuration from environment variables",
    long_about = None,
)]
struct Cli {
    /// Load `collector-config.yaml.j2` from this directory instead of the
    /// built-in template.
    #[arg(long, value_name = "DIR")]
    template_dir: Option<PathBuf>,
}

impl Cli {
    fn template_source(&self) -> TemplateSource {
        match &self.template_dir {
            Some(dir) => TemplateSource::Directory(dir.clone()),
            None => TemplateSource::Embedded,
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let rendered = generate_from_source(&ProcessEnv, &cli.template_source())?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")
        .and_then(|()| stdout.flush())
        .context("failed to write configuration to stdout")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", diagnostic(&err));
            ExitCode::FAILURE
        }
    }
}

/// The error and its causes on one line.
fn diagnostic(err: &anyhow::Error) -> String {
    format!("{err:#}")
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
