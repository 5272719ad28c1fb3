//! Mailwave - a bulk email campaign lifecycle engine.
//!
//! This library provides the campaign lifecycle core: the campaign/contact
//! data model, its validation rules, the finite-state lifecycle from
//! creation through dispatch to a terminal outcome, and the asynchronous
//! worker that discovers due campaigns and sends them.
//!
//! # Architecture
//!
//! - **domain**: Value objects enforcing invariants at construction time
//! - **models**: Campaign, Contact and the status state machine
//! - **validation**: Ordered first-failure rule checking for new campaigns
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Persistence contract plus the in-memory implementation
//! - **mailer**: Delivery contract plus the SMTP implementation
//! - **services**: Business operations driving campaign lifecycle transitions
//! - **worker**: Periodic dispatch of due campaigns
//! - **metrics**: Counters for dispatch activity

// Re-export commonly used types
pub mod config;
pub mod domain;
pub mod error;
pub mod mailer;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod services;
pub mod validation;
pub mod worker;

pub use config::Config;
pub use domain::{EmailAddress, ValidationError};
pub use error::{CampaignError, ConfigError, MailerError, RepositoryError};
pub use mailer::{Mailer, SmtpMailer};
pub use metrics::{DispatchMetrics, MetricsSummary};
pub use models::{Campaign, CampaignStatus, Contact, NewCampaignRequest};
pub use repositories::{CampaignRepository, InMemoryCampaignRepository};
pub use services::{CampaignResponse, CampaignService, CampaignServiceImpl};
pub use worker::DispatchWorker;
