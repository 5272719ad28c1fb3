//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! the repository and mailer contracts. They provide a clean boundary
//! between entry points and the data access layer.

mod campaign_service;

pub use campaign_service::{CampaignResponse, CampaignService, CampaignServiceImpl};
