//! Campaign service layer.
//!
//! Orchestrates campaign creation, reads and lifecycle transitions over the
//! repository and mailer contracts. Validation and state-conflict errors
//! surface verbatim; storage causes are logged here and collapsed into the
//! opaque internal error.

use crate::error::{CampaignError, CampaignResult, RepositoryError};
use crate::mailer::Mailer;
use crate::models::{Campaign, CampaignStatus, NewCampaignRequest};
use crate::repositories::CampaignRepository;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Read view of a campaign.
///
/// Exposes the recipient count, never the raw contact list.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignResponse {
    pub id: String,
    pub name: String,
    pub content: String,
    pub status: CampaignStatus,
    pub amount_of_emails_to_send: usize,
    pub created_by: String,
}

/// Campaign service trait for lifecycle operations.
#[async_trait]
pub trait CampaignService: Send + Sync {
    /// Validate, build and persist a new campaign; returns its id.
    async fn create(&self, request: NewCampaignRequest) -> CampaignResult<String>;

    /// Fetch a campaign and project it into its read view.
    async fn get_by(&self, id: &str) -> CampaignResult<CampaignResponse>;

    /// Delete a campaign; legal only while it is still `Pending`.
    async fn delete(&self, id: &str) -> CampaignResult<()>;

    /// Mark a campaign `Started` and persist it.
    ///
    /// No status precondition beyond existence: re-starting simply re-marks,
    /// which keeps worker-level dispatch retries idempotent.
    async fn start(&self, id: &str) -> CampaignResult<()>;

    /// Invoke the mailer and record the terminal outcome (`Done` or `Fail`).
    ///
    /// Best-effort terminal: never surfaces an error. A persistence failure
    /// here is logged so a dispatch pass over many campaigns cannot be
    /// aborted by one bad update.
    async fn send_and_finalize(&self, campaign: Campaign);
}

/// Default implementation of CampaignService.
pub struct CampaignServiceImpl {
    repository: Arc<dyn CampaignRepository>,
    mailer: Arc<dyn Mailer>,
}

impl CampaignServiceImpl {
    /// Create a new campaign service with its injected collaborators.
    pub fn new(repository: Arc<dyn CampaignRepository>, mailer: Arc<dyn Mailer>) -> Self {
        Self { repository, mailer }
    }

    // Not-found passes through so callers can render a 404-equivalent;
    // every other repository error is logged and made opaque.
    fn translate_repository_error(err: RepositoryError) -> CampaignError {
        match err {
            RepositoryError::NotFound(id) => {
                warn!(campaign_id = %id, "campaign not found");
                CampaignError::NotFound
            }
            RepositoryError::Storage(cause) => {
                error!(%cause, "repository failure");
                CampaignError::Internal
            }
        }
    }

    fn internal_on_failure(err: RepositoryError) -> CampaignError {
        error!(error = %err, "repository failure");
        CampaignError::Internal
    }
}

#[async_trait]
impl CampaignService for CampaignServiceImpl {
    async fn create(&self, request: NewCampaignRequest) -> CampaignResult<String> {
        let campaign = Campaign::new(&request)?;

        self.repository
            .create(&campaign)
            .await
            .map_err(Self::internal_on_failure)?;

        info!(
            campaign_id = %campaign.id,
            contacts = campaign.contacts.len(),
            "campaign created"
        );
        Ok(campaign.id)
    }

    async fn get_by(&self, id: &str) -> CampaignResult<CampaignResponse> {
        let campaign = self
            .repository
            .get_by(id)
            .await
            .map_err(Self::translate_repository_error)?;

        Ok(CampaignResponse {
            id: campaign.id,
            name: campaign.name,
            content: campaign.content,
            status: campaign.status,
            amount_of_emails_to_send: campaign.contacts.len(),
            created_by: campaign.created_by.into_inner(),
        })
    }

    async fn delete(&self, id: &str) -> CampaignResult<()> {
        let mut campaign = self
            .repository
            .get_by(id)
            .await
            .map_err(Self::translate_repository_error)?;

        campaign.delete()?;

        self.repository
            .delete(&campaign)
            .await
            .map_err(Self::internal_on_failure)?;

        info!(campaign_id = %id, "campaign deleted");
        Ok(())
    }

    async fn start(&self, id: &str) -> CampaignResult<()> {
        let mut campaign = self
            .repository
            .get_by(id)
            .await
            .map_err(Self::translate_repository_error)?;

        campaign.started();

        self.repository
            .update(&campaign)
            .await
            .map_err(Self::internal_on_failure)?;

        info!(campaign_id = %id, "campaign started");
        Ok(())
    }

    async fn send_and_finalize(&self, mut campaign: Campaign) {
        match self.mailer.send(&campaign).await {
            Ok(()) => {
                info!(
                    campaign_id = %campaign.id,
                    contacts = campaign.contacts.len(),
                    "campaign dispatched"
                );
                campaign.done();
            }
            Err(err) => {
                warn!(campaign_id = %campaign.id, error = %err, "campaign dispatch failed");
                campaign.fail();
            }
        }

        if let Err(err) = self.repository.update(&campaign).await {
            error!(
                campaign_id = %campaign.id,
                error = %err,
                "failed to persist dispatch outcome"
            );
        }
    }
}
