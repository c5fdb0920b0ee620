mod cli;
mod domain;
mod features;
mod utils;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::domain::config::AppConfig;
use crate::features::collector::{CollectorService, HttpPublicIp, SystemInterfaces};
use crate::features::output::OutputService;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match cli::parse() {
        Ok(args) => args.into_config(),
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    init_logger(&config);

    log::debug!(
        public = config.public,
        all = config.all,
        json = config.json,
        log_level = config.log_level,
        timeout_secs = config.timeout.as_secs();
        "starting"
    );

    if let Err(e) = run(&config).await {
        let err = format!("{:#}", e);
        log::error!(err = err.as_str(); "could not get ip addresses");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn init_logger(config: &AppConfig) {
    env_logger::Builder::new()
        .filter_level(config.log_filter())
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

async fn run(config: &AppConfig) -> Result<()> {
    let public_ip = HttpPublicIp::new(config.url.as_str(), config.timeout);
    let collector = CollectorService::new(SystemInterfaces, public_ip);

    let records = collector.collect(config).await?;
    log::info!(count = records.len(); "collected addresses");

    OutputService::new(config.json)
        .render(&records, &mut io::stdout().lock())
        .context("could not print addresses")?;

    Ok(())
}
