use async_trait::async_trait;
use mailwave::error::{MailerError, MailerResult};
use mailwave::mailer::Mailer;
use mailwave::models::Campaign;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Mock mailer for testing.
///
/// Records the campaigns it was asked to send and can be configured to
/// fail globally or for specific campaign ids.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockMailer {
    sent: Arc<Mutex<Vec<String>>>,
    fail_all: Arc<Mutex<bool>>,
    failing_campaigns: Arc<Mutex<HashSet<String>>>,
}

#[allow(dead_code)]
impl MockMailer {
    /// Create a new mailer that succeeds for every campaign.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every send fail.
    pub fn fail_all(&self) {
        *self.fail_all.lock().unwrap() = true;
    }

    /// Make sends fail for one specific campaign id.
    pub fn fail_for(&self, campaign_id: &str) {
        self.failing_campaigns
            .lock()
            .unwrap()
            .insert(campaign_id.to_string());
    }

    /// Ids of campaigns passed to send, in call order.
    pub fn sent_campaign_ids(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of send calls, successful or not.
    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, campaign: &Campaign) -> MailerResult<()> {
        self.sent.lock().unwrap().push(campaign.id.clone());

        if *self.fail_all.lock().unwrap()
            || self.failing_campaigns.lock().unwrap().contains(&campaign.id)
        {
            return Err(MailerError::Transport("relay rejected message".to_string()));
        }
        Ok(())
    }
}
