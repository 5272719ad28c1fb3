use crate::error::RepositoryResult;
use crate::models::Campaign;
use async_trait::async_trait;

/// Repository for persisting campaigns.
///
/// Provides abstraction over campaign storage and retrieval,
/// enabling different implementations (in-memory, SQL-backed, mock).
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// Persist a brand-new campaign.
    async fn create(&self, campaign: &Campaign) -> RepositoryResult<()>;

    /// Retrieve a single campaign by id.
    ///
    /// A missing campaign is a distinguishable [`RepositoryError::NotFound`].
    ///
    /// [`RepositoryError::NotFound`]: crate::error::RepositoryError::NotFound
    async fn get_by(&self, id: &str) -> RepositoryResult<Campaign>;

    /// Persist a mutated campaign.
    async fn update(&self, campaign: &Campaign) -> RepositoryResult<()>;

    /// Persist a campaign in its `Deleted` state.
    ///
    /// Deletion is a status transition, not physical erasure; the campaign
    /// stays readable for auditing.
    async fn delete(&self, campaign: &Campaign) -> RepositoryResult<()>;

    /// All `Pending` campaigns eligible for the current dispatch pass.
    async fn list_due_to_send(&self) -> RepositoryResult<Vec<Campaign>>;
}
