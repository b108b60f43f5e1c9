//! randutil sampler entry point.

use std::error::Error;

use clap::Parser;
use randutil::RandomUtil;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;

use cli::Cli;
use config::{Config, LogFormat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let count = cli.count.unwrap_or(config.count);
    tracing::debug!(count, command = ?cli.command, "drawing samples");

    let random = RandomUtil::new();
    for index in 1..=count {
        let sample = commands::draw(&random, &cli.command).await?;
        println!("{}", commands::render(index, &sample, cli.json)?);
    }

    Ok(())
}

/// Logs go to stderr so that stdout carries only samples.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
