//! Coursetree CLI Binary
//!
//! Command-line interface for the hierarchical resource index.

use anyhow::Context;
use clap::Parser;
use coursetree::logging::init_logging;
use coursetree::tooling::cli::{Cli, CliContext};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let context = CliContext::new(cli.config.as_deref(), cli.snapshot.clone())
        .context("loading configuration")?;

    let mut logging = context.config().logging.clone();
    if let Some(level) = &cli.log_level {
        logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        logging.format = format.clone();
    }
    if let Some(output) = &cli.log_output {
        logging.output = output.clone();
    }
    if let Some(file) = &cli.log_file {
        logging.file = Some(file.clone());
    }
    init_logging(&logging).context("initializing logging")?;

    if cli.command.needs_snapshot() {
        context.load().await.context("loading snapshot")?;
    }

    let output = context.execute(&cli.command)?;
    println!("{}", output);
    Ok(())
}
