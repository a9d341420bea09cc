#![doc = include_str!("../README.md")]

mod config;
mod generate;
mod telemetry;

use clap::Parser;
use config::{CliArgs, Config};
use generate::run;
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = Config::try_from(args)?;

    init_telemetry()?;
    log_startup_info(&config);

    run(&config, &mut std::io::stdout().lock())
}

fn log_startup_info(_config: &Config) {
    #[cfg(feature = "tracing")]
    tracing::info!(
        count = _config.count,
        seeded = _config.seed.is_some(),
        "generating with config: {:?}",
        _config.mode
    );
}
