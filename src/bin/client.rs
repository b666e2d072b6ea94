//! Users API harness client binary

use clap::Parser;
use restprobe::http::cli::{Cli, handle_cli_command};
use restprobe::{HarnessConfig, UserApiClient};

#[tokio::main]
async fn main() {
    restprobe::telemetry::init();
    let cli = Cli::parse();
    let config = match HarnessConfig::load(&cli.settings) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    let client = match UserApiClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };
    handle_cli_command(&client, cli.command).await;
}
