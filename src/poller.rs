use std::io::{self, Write};

use tokio::sync::watch;
use tracing::{info, warn};

use crate::api::envoy::EnvoyClient;
use crate::api::pvoutput::PvOutputClient;
use crate::config::Config;
use crate::models::status::StatusUpdate;

/// Drives the fixed-interval fetch-and-forward cycle. Holds no state across
/// iterations beyond the configuration and the two clients.
pub struct Poller {
    config: Config,
    envoy: EnvoyClient,
    pvoutput: PvOutputClient,
}

impl Poller {
    pub fn new(config: Config, envoy: EnvoyClient, pvoutput: PvOutputClient) -> Self {
        Self {
            config,
            envoy,
            pvoutput,
        }
    }

    /// Runs until the shutdown channel fires. Each cycle waits the poll
    /// interval first, matching the original cadence, so the first upload
    /// happens one interval after start-up.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        loop {
            tokio::select! {
                biased;
                _ = shutdown.changed() => {
                    info!("shutdown requested; stopping poll loop");
                    return;
                }
                _ = tokio::time::sleep(self.config.poll_interval) => {}
            }
            self.tick().await;
        }
    }

    /// One poll cycle. Every failure is logged and abandoned; the next tick
    /// starts fresh. A fetch failure means no upload is attempted at all.
    pub async fn tick(&self) {
        let reading = match self.envoy.production_report().await {
            Ok(reading) => reading,
            Err(err) => {
                warn!(error = %err, "failed to fetch Envoy report; skipping this interval");
                return;
            }
        };

        let status = match StatusUpdate::now(&reading, self.config.timezone.as_deref()) {
            Ok(status) => status,
            Err(err) => {
                warn!(error = %err, "could not build status update; skipping this interval");
                return;
            }
        };

        match self.pvoutput.add_status(&status).await {
            Ok(()) => {
                print!(".");
                let _ = io::stdout().flush();
            }
            Err(err) => {
                warn!(error = %err, "failed to upload status to PVOutput");
            }
        }
    }
}
