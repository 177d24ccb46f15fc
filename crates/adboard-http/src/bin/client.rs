//! Advertisement API Client Binary

use adboard_http::cli::{Cli, handle_cli_command};
use adboard_http::client::AdboardClient;
use adboard_http::config::ClientConfig;
use clap::Parser;

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let client = ClientConfig::from_env()
        .and_then(|config| config.with_overrides(cli.base_url.as_deref(), cli.timeout_secs))
        .and_then(|config| AdboardClient::new(&config));
    let client = match client {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    handle_cli_command(&client, cli.command).await;
}
