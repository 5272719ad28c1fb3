//! Dispatch worker.
//!
//! Bridges elapsed time and the campaign service: each pass asks the
//! repository for due campaigns and drives every one through start and
//! send-and-finalize. The one piece of genuine logic is per-campaign
//! isolation; the polling cadence is plain timer policy around it.

use crate::error::RepositoryResult;
use crate::metrics::DispatchMetrics;
use crate::repositories::CampaignRepository;
use crate::services::CampaignService;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, trace, warn};

/// Periodically discovers `Pending` campaigns and dispatches them.
pub struct DispatchWorker {
    repository: Arc<dyn CampaignRepository>,
    service: Arc<dyn CampaignService>,
    poll_interval: Duration,
    metrics: DispatchMetrics,
}

impl DispatchWorker {
    /// Create a new worker over the given repository and service.
    pub fn new(
        repository: Arc<dyn CampaignRepository>,
        service: Arc<dyn CampaignService>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            repository,
            service,
            poll_interval,
            metrics: DispatchMetrics::new(),
        }
    }

    /// The worker's dispatch counters.
    pub fn metrics(&self) -> &DispatchMetrics {
        &self.metrics
    }

    /// Run one dispatch pass; returns how many campaigns were picked up.
    ///
    /// Campaigns are processed independently: a start or send failure on one
    /// campaign is logged and the pass moves on to the next. Each campaign
    /// is dispatched at most once per pass.
    ///
    /// # Errors
    ///
    /// Only the due-campaign query itself can fail the pass.
    pub async fn run_pass(&self) -> RepositoryResult<usize> {
        let due = self.repository.list_due_to_send().await?;
        if due.is_empty() {
            trace!("no campaigns due to send");
            self.metrics.record_pass(0);
            return Ok(0);
        }

        debug!(count = due.len(), "dispatching due campaigns");

        let attempted = due.len();
        for campaign in due {
            if let Err(err) = self.service.start(&campaign.id).await {
                warn!(campaign_id = %campaign.id, error = %err, "failed to start campaign");
                self.metrics.record_start_failure();
                continue;
            }
            self.service.send_and_finalize(campaign).await;
        }

        self.metrics.record_pass(attempted);
        Ok(attempted)
    }

    /// Poll forever at the configured interval.
    ///
    /// A failed pass (due-campaign query error) is logged and the loop
    /// keeps going.
    pub async fn run(&self) {
        let mut ticker = tokio::time::interval(self.poll_interval);
        loop {
            ticker.tick().await;
            match self.run_pass().await {
                Ok(0) => {}
                Ok(count) => debug!(count, "dispatch pass complete"),
                Err(err) => error!(error = %err, "dispatch pass failed"),
            }
        }
    }
}
