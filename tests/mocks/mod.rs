//! Hand-rolled test doubles for the repository and mailer contracts.

mod mock_campaign_repository;
mod mock_mailer;

pub use mock_campaign_repository::MockCampaignRepository;
pub use mock_mailer::MockMailer;
