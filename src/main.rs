use service_config::Config;
use std::env;
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_PATH: &str = "configs/config.json";

fn parse_config_path(args: impl IntoIterator<Item = String>) -> String {
    for arg in args {
        if let Some(path) = arg.strip_prefix("--config=") {
            return path.to_string();
        }
    }
    DEFAULT_CONFIG_PATH.to_string()
}

fn init_tracing(level: Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing(Level::INFO);

    let config_path = parse_config_path(env::args().skip(1));
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!(config = %config_path, error = %e, "Failed to load config");
            return ExitCode::FAILURE;
        }
    };

    config.print();
    info!(
        listen = %config.listen_addr(),
        expired = ?config.expired_duration,
        keepalive = ?config.keepalive_duration,
        "Configuration ready"
    );

    ExitCode::SUCCESS
}
