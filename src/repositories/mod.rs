//! Campaign persistence.
//!
//! The [`CampaignRepository`] trait is the contract the service and worker
//! consume; [`InMemoryCampaignRepository`] is the shipped implementation.

mod in_memory;
mod traits;

pub use in_memory::InMemoryCampaignRepository;
pub use traits::CampaignRepository;
