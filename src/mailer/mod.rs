//! Mail transport.
//!
//! The [`Mailer`] trait is the delivery contract the service consumes;
//! [`SmtpMailer`] is the shipped lettre-backed implementation.

mod smtp;

pub use smtp::SmtpMailer;

use crate::error::MailerResult;
use crate::models::Campaign;
use async_trait::async_trait;

/// Delivers a campaign's content to every one of its contacts.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Attempt delivery to the whole contact list.
    ///
    /// Any error is treated as total failure for the campaign; there is no
    /// partial-recipient success tracking.
    async fn send(&self, campaign: &Campaign) -> MailerResult<()>;
}
