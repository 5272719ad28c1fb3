use async_trait::async_trait;
use mailwave::error::{RepositoryError, RepositoryResult};
use mailwave::models::{Campaign, CampaignStatus};
use mailwave::repositories::CampaignRepository;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock campaign repository for testing.
///
/// Provides an in-memory implementation of CampaignRepository that can be
/// configured with test data, forced storage failures per method, and
/// tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockCampaignRepository {
    campaigns: Arc<Mutex<HashMap<String, Campaign>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failing_methods: Arc<Mutex<HashSet<String>>>,
}

#[allow(dead_code)]
impl MockCampaignRepository {
    /// Create a new empty MockCampaignRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a campaign to the mock repository.
    pub fn add_campaign(&self, campaign: Campaign) {
        let mut campaigns = self.campaigns.lock().unwrap();
        campaigns.insert(campaign.id.clone(), campaign);
    }

    /// Fetch a stored campaign directly, bypassing the trait.
    pub fn stored(&self, id: &str) -> Option<Campaign> {
        self.campaigns.lock().unwrap().get(id).cloned()
    }

    /// Number of stored campaigns.
    pub fn len(&self) -> usize {
        self.campaigns.lock().unwrap().len()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Force a method to fail with a storage error.
    pub fn fail_on(&self, method: &str) {
        self.failing_methods
            .lock()
            .unwrap()
            .insert(method.to_string());
    }

    fn track_call(&self, method: &str) -> RepositoryResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
        drop(counts);

        if self.failing_methods.lock().unwrap().contains(method) {
            return Err(RepositoryError::Storage(format!("{} forced to fail", method)));
        }
        Ok(())
    }
}

#[async_trait]
impl CampaignRepository for MockCampaignRepository {
    async fn create(&self, campaign: &Campaign) -> RepositoryResult<()> {
        self.track_call("create")?;
        let mut campaigns = self.campaigns.lock().unwrap();
        campaigns.insert(campaign.id.clone(), campaign.clone());
        Ok(())
    }

    async fn get_by(&self, id: &str) -> RepositoryResult<Campaign> {
        self.track_call("get_by")?;
        let campaigns = self.campaigns.lock().unwrap();
        campaigns
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn update(&self, campaign: &Campaign) -> RepositoryResult<()> {
        self.track_call("update")?;
        let mut campaigns = self.campaigns.lock().unwrap();
        campaigns.insert(campaign.id.clone(), campaign.clone());
        Ok(())
    }

    async fn delete(&self, campaign: &Campaign) -> RepositoryResult<()> {
        self.track_call("delete")?;
        let mut campaigns = self.campaigns.lock().unwrap();
        campaigns.insert(campaign.id.clone(), campaign.clone());
        Ok(())
    }

    async fn list_due_to_send(&self) -> RepositoryResult<Vec<Campaign>> {
        self.track_call("list_due_to_send")?;
        let campaigns = self.campaigns.lock().unwrap();
        Ok(campaigns
            .values()
            .filter(|c| c.status == CampaignStatus::Pending)
            .cloned()
            .collect())
    }
}
