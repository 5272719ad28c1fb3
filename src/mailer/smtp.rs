//! SMTP-backed mailer built on lettre.

use crate::config::Config;
use crate::error::{MailerError, MailerResult};
use crate::mailer::Mailer;
use crate::models::Campaign;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

/// Mailer that delivers campaign content over SMTP.
///
/// One message per contact; the first transport error aborts the campaign
/// and is reported as total failure (no partial-recipient tracking).
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a mailer from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MailerError::Transport`] if the relay cannot be configured
    /// and [`MailerError::Message`] if the sender address does not parse.
    pub fn new(config: &Config) -> MailerResult<Self> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| MailerError::Transport(e.to_string()))?
            .port(config.smtp_port);

        if let (Some(username), Some(password)) = (&config.smtp_username, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        let from = config
            .smtp_from
            .parse::<Mailbox>()
            .map_err(|e| MailerError::Message(e.to_string()))?;

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, campaign: &Campaign) -> MailerResult<()> {
        for contact in &campaign.contacts {
            let to = contact
                .email
                .as_str()
                .parse::<Mailbox>()
                .map_err(|e| MailerError::Message(e.to_string()))?;

            let message = Message::builder()
                .from(self.from.clone())
                .to(to)
                .subject(campaign.name.clone())
                .header(ContentType::TEXT_PLAIN)
                .body(campaign.content.clone())
                .map_err(|e| MailerError::Message(e.to_string()))?;

            self.transport
                .send(message)
                .await
                .map_err(|e| MailerError::Transport(e.to_string()))?;

            debug!(campaign_id = %campaign.id, to = %contact.email, "message sent");
        }
        Ok(())
    }
}
