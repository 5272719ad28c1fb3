//! Mailwave worker - main entry point
//!
//! Wires the campaign service to its repository and mailer, then runs the
//! dispatch worker until the process is stopped.

use anyhow::Result;
use mailwave::{
    CampaignRepository, CampaignService, CampaignServiceImpl, Config, DispatchWorker,
    InMemoryCampaignRepository, Mailer, SmtpMailer,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting campaign worker with SMTP relay: {}:{}",
        config.smtp_host, config.smtp_port
    );

    // Initialize collaborators
    let repository =
        Arc::new(InMemoryCampaignRepository::new()) as Arc<dyn CampaignRepository>;
    let mailer = Arc::new(SmtpMailer::new(&config)?) as Arc<dyn Mailer>;
    let service = Arc::new(CampaignServiceImpl::new(repository.clone(), mailer))
        as Arc<dyn CampaignService>;

    let worker = DispatchWorker::new(
        repository,
        service,
        Duration::from_secs(config.worker_poll_seconds),
    );

    info!(
        "Dispatch worker initialized, polling every {} seconds",
        config.worker_poll_seconds
    );

    // Poll until the process is stopped
    worker.run().await;

    Ok(())
}
