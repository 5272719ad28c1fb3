//! In-memory campaign repository.
//!
//! Satisfies the [`CampaignRepository`] contract with a `HashMap` behind a
//! mutex. Used by the worker binary and integration tests; a SQL-backed
//! implementation would slot in behind the same trait.

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{Campaign, CampaignStatus};
use crate::repositories::traits::CampaignRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Thread-safe in-memory implementation of [`CampaignRepository`].
#[derive(Clone, Default)]
pub struct InMemoryCampaignRepository {
    campaigns: Arc<Mutex<HashMap<String, Campaign>>>,
}

impl InMemoryCampaignRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored campaigns, across all statuses.
    pub fn len(&self) -> usize {
        self.campaigns.lock().unwrap().len()
    }

    /// Whether the repository holds no campaigns.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CampaignRepository for InMemoryCampaignRepository {
    async fn create(&self, campaign: &Campaign) -> RepositoryResult<()> {
        let mut campaigns = self.campaigns.lock().unwrap();
        if campaigns.contains_key(&campaign.id) {
            return Err(RepositoryError::Storage(format!(
                "campaign {} already exists",
                campaign.id
            )));
        }
        campaigns.insert(campaign.id.clone(), campaign.clone());
        Ok(())
    }

    async fn get_by(&self, id: &str) -> RepositoryResult<Campaign> {
        let campaigns = self.campaigns.lock().unwrap();
        campaigns
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn update(&self, campaign: &Campaign) -> RepositoryResult<()> {
        let mut campaigns = self.campaigns.lock().unwrap();
        if !campaigns.contains_key(&campaign.id) {
            return Err(RepositoryError::NotFound(campaign.id.clone()));
        }
        campaigns.insert(campaign.id.clone(), campaign.clone());
        Ok(())
    }

    async fn delete(&self, campaign: &Campaign) -> RepositoryResult<()> {
        // Logical delete: the Deleted-state campaign is kept readable.
        self.update(campaign).await
    }

    async fn list_due_to_send(&self) -> RepositoryResult<Vec<Campaign>> {
        let campaigns = self.campaigns.lock().unwrap();
        Ok(campaigns
            .values()
            .filter(|c| c.status == CampaignStatus::Pending)
            .cloned()
            .collect())
    }
}
