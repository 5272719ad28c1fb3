//! Data models for campaigns and their contacts.

mod campaign;

pub use campaign::{Campaign, CampaignStatus, Contact, NewCampaignRequest};
