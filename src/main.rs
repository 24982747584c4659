// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11y-audit CLI - HTML accessibility compliance scorer

use a11y_audit::config::Config;
use a11y_audit::report::{generate_report, OutputFormat};
use a11y_audit::scanner::{self, ScannedDocument};
use a11y_audit::RuleEngine;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Score HTML documents for accessibility compliance
#[derive(Parser)]
#[command(name = "a11y-audit")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single HTML file
    Analyze {
        /// File to analyze
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Score every HTML file under a directory
    Check {
        /// Directory to scan
        dir: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Exit non-zero when any document scores below this
        #[arg(long)]
        min_score: Option<i64>,

        /// Configuration file
        #[arg(long, env = "A11Y_AUDIT_CONFIG")]
        config: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Generate a SARIF report for a directory
    Report {
        /// Directory to scan
        dir: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Serve the upload API over HTTP
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// Configuration file
        #[arg(long, env = "A11Y_AUDIT_CONFIG")]
        config: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI
    Sarif,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sarif => OutputFormat::Sarif,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "a11y_audit=debug" } else { "a11y_audit=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let engine = RuleEngine::default();

    match cli.command {
        Commands::Analyze { file, format, verbose } => {
            init_logging(verbose);
            let document = scanner::scan_file(&engine, &file)?;
            let report = generate_report(std::slice::from_ref(&document), format.into());
            println!("{}", report);
        }

        Commands::Check { dir, format, output, min_score, config, verbose } => {
            init_logging(verbose);
            let config = Config::load(config.as_deref())?;
            let threshold = min_score.or(config.audit.min_score);

            let documents = scanner::scan_directory(&engine, &dir)?;
            let report = generate_report(&documents, format.into());
            write_output(&report, output.as_deref())?;

            if let Some(threshold) = threshold {
                let failing = below_threshold(&documents, threshold);
                if failing > 0 {
                    eprintln!("{} document(s) scored below {}", failing, threshold);
                    std::process::exit(1);
                }
            }
        }

        Commands::Report { dir, output, verbose } => {
            init_logging(verbose);
            let documents = scanner::scan_directory(&engine, &dir)?;
            let report = generate_report(&documents, OutputFormat::Sarif);
            write_output(&report, output.as_deref())?;
        }

        Commands::Serve { host, port, config, verbose } => {
            init_logging(verbose);
            let mut config = Config::load(config.as_deref())?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(a11y_audit::api::serve(&config))?;
        }
    }

    Ok(())
}

fn below_threshold(documents: &[ScannedDocument], threshold: i64) -> usize {
    documents
        .iter()
        .filter(|d| d.result.compliance_score < threshold)
        .count()
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
