mod cli;
mod commands;
mod config;
mod latex;
mod page_range;
mod pdf;
mod toc;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::RenderConfig;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if let Err(err) = run(&cli) {
        // Always reported, whatever the log filter lets through
        eprintln!("{}", error_report(&err));
        error!(error = %err, "mktoc failed");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = RenderConfig::from_cli(cli)?;
    commands::generate::run(&config)
}

fn init_tracing(level: &str) {
    let env_filter =
        EnvFilter::try_new(filter_directive(level)).unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn error_report(err: &anyhow::Error) -> String {
    format!("Error: {:?}", err)
}

/// Accept Python-style level names alongside tracing's own. Anything else
/// falls back to `error` rather than being read as a target filter.
fn filter_directive(level: &str) -> &'static str {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => "off",
        "critical" | "fatal" | "error" => "error",
        "warning" | "warn" => "warn",
        "info" => "info",
        "debug" => "debug",
        "trace" | "notset" => "trace",
        _ => "error",
    }
}
