pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod poller;

use clap::CommandFactory;
use tokio::sync::watch;
use tracing::{error, info};

use api::envoy::EnvoyClient;
use api::pvoutput::PvOutputClient;
use config::Config;
use error::AppError;
use poller::Poller;

pub async fn run(cli_args: cli::Cli) -> i32 {
    let config = match Config::from_cli(&cli_args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}\n");
            let _ = cli::Cli::command().print_help();
            return 1;
        }
    };

    match start(config).await {
        Ok(()) => 0,
        Err(err) => {
            error!(error = %err, "start-up failed");
            1
        }
    }
}

async fn start(config: Config) -> Result<(), AppError> {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        envoy = %format!("{}:{}", config.envoy_host, config.envoy_port),
        system_id = config.pvoutput_system_id,
        interval_secs = config.poll_interval.as_secs(),
        "starting envoy-pvoutput"
    );

    let envoy = EnvoyClient::new(&config.envoy_host, config.envoy_port)?;
    let pvoutput = PvOutputClient::new(&config.pvoutput_api_key, config.pvoutput_system_id)?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    Poller::new(config, envoy, pvoutput).run(shutdown_rx).await;
    Ok(())
}
