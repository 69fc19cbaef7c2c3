use clap::Parser;

use orrery::{AppConfig, CliArgs};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let mut config = AppConfig::default();
    config.apply_cli_overrides(&args);

    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .format_timestamp_millis()
        .init();

    log::info!(
        "Starting orrery: assets from {}, {}x{}",
        config.assets.directory.display(),
        config.window.width,
        config.window.height
    );

    orrery::run(config)
}
