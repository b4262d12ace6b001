//! Envboot CLI
//!
//! Top-level entry point for startup configuration. Loads the env file into
//! the process environment, checks the required variables, and exits
//! non-zero when they are incorrectly set.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use envboot_env::{Dialect, ProcessEnvironment};
use envboot_loader::ConfigLoader;
use envboot_types::{Config, DEFAULT_ENV_FILE, VariableStatus};

#[derive(Parser)]
#[command(name = "envboot")]
#[command(author, version, about = "Load and check startup configuration", long_about = None)]
struct Cli {
    /// Env file merged into the environment before checking
    #[arg(long, env = "ENVBOOT_ENV_FILE", default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Env file syntax
    #[arg(long, value_enum, default_value_t = DialectArg::Literal)]
    dialect: DialectArg,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate the configuration
    Check,
    /// Print the loaded configuration with the password redacted
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Print the presence of every known variable
    Vars {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DialectArg {
    Literal,
    Dotenv,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Literal => Dialect::Literal,
            DialectArg::Dotenv => Dialect::Dotenv,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,envboot_loader=debug,envboot_env=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Loads the configuration or terminates the process.
fn load_or_exit(loader: &mut ConfigLoader<ProcessEnvironment>) -> Config {
    match loader.load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Environment variables are incorrectly set");
            std::process::exit(1);
        }
    }
}

fn format_report(report: &[VariableStatus]) -> String {
    report
        .iter()
        .map(|status| {
            let marker = if status.is_failing() { "✗" } else { "✓" };
            let kind = if status.required { "required" } else { "optional" };
            format!("{} {:<12} {:<8} {}", marker, status.name, status.state, kind)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_config(config: &Config) -> String {
    let port = if config.app_port().is_empty() {
        "(unset)"
    } else {
        config.app_port()
    };
    format!(
        "database: {}\nport:     {}",
        config.database().redacted(),
        port
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let mut loader = ConfigLoader::new(ProcessEnvironment::new())
        .with_env_file(&cli.env_file)
        .with_dialect(cli.dialect.into());

    match cli.command {
        Commands::Check => {
            load_or_exit(&mut loader);
            println!("✓ configuration OK");
        }

        Commands::Show { json } => {
            let config = load_or_exit(&mut loader);
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("{}", format_config(&config));
            }
        }

        Commands::Vars { json } => {
            loader.load_env_from_file(&cli.env_file);
            let report = loader.report();
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", format_report(&report));
            }
            if report.iter().any(VariableStatus::is_failing) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
