//! Campaign and contact models plus the status state machine.

use crate::domain::{EmailAddress, ValidationError};
use crate::error::CampaignError;
use crate::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle status of a campaign.
///
/// `Done`, `Fail`, `Canceled` and `Deleted` are terminal; no transition is
/// defined out of them. Serialized as the exact status strings stored by
/// the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignStatus {
    Pending,
    Started,
    Done,
    Fail,
    Canceled,
    Deleted,
}

impl CampaignStatus {
    /// Whether any further transition is defined out of this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Fail | Self::Canceled | Self::Deleted)
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "Pending",
            Self::Started => "Started",
            Self::Done => "Done",
            Self::Fail => "Fail",
            Self::Canceled => "Canceled",
            Self::Deleted => "Deleted",
        };
        write!(f, "{}", s)
    }
}

/// One recipient email address scoped to exactly one campaign.
///
/// Contacts exist only as part of campaign construction and are immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier for the contact
    pub id: String,

    /// The recipient address
    pub email: EmailAddress,

    /// Back-reference to the owning campaign
    pub campaign_id: String,
}

/// Input carrier for campaign creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCampaignRequest {
    pub name: String,
    pub content: String,
    pub emails: Vec<String>,
    pub created_by: String,
}

/// A named unit of bulk email content plus its recipient list and lifecycle status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    /// Unique identifier, assigned once at creation
    pub id: String,

    /// Campaign name, 5 to 24 characters
    pub name: String,

    /// Body sent to every contact, 5 to 1024 characters
    pub content: String,

    /// Creation timestamp, never touched after construction
    pub created_on: DateTime<Utc>,

    /// Refreshed on every status transition
    pub updated_on: DateTime<Utc>,

    /// Recipient list, non-empty, immutable after creation
    pub contacts: Vec<Contact>,

    /// Current lifecycle status
    pub status: CampaignStatus,

    /// Email of the owning identity
    pub created_by: EmailAddress,
}

impl Campaign {
    /// Build a new `Pending` campaign from a creation request.
    ///
    /// Runs the ordered validation rules first; no partially-valid campaign
    /// is ever observable. Ids are fresh v4 UUIDs for the campaign and each
    /// contact.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`ValidationError`] in precedence order.
    pub fn new(request: &NewCampaignRequest) -> Result<Self, ValidationError> {
        validation::validate(request)?;

        let id = Uuid::new_v4().to_string();
        let contacts = request
            .emails
            .iter()
            .map(|email| {
                Ok(Contact {
                    id: Uuid::new_v4().to_string(),
                    email: EmailAddress::new(email)?,
                    campaign_id: id.clone(),
                })
            })
            .collect::<Result<Vec<Contact>, ValidationError>>()?;

        let created_by =
            EmailAddress::new(&request.created_by).map_err(|_| ValidationError::InvalidCreatedBy)?;

        let now = Utc::now();
        Ok(Self {
            id,
            name: request.name.clone(),
            content: request.content.clone(),
            created_on: now,
            updated_on: now,
            contacts,
            status: CampaignStatus::Pending,
            created_by,
        })
    }

    /// Mark the campaign as `Started`.
    ///
    /// Intentionally unconditional: re-starting an already-started campaign
    /// just re-marks it, which keeps worker-level dispatch retries idempotent.
    pub fn started(&mut self) {
        self.transition(CampaignStatus::Started);
    }

    /// Mark the campaign as `Done` after a successful dispatch.
    pub fn done(&mut self) {
        self.transition(CampaignStatus::Done);
    }

    /// Mark the campaign as `Fail` after a failed dispatch.
    pub fn fail(&mut self) {
        self.transition(CampaignStatus::Fail);
    }

    /// Mark the campaign as `Deleted`.
    ///
    /// Legal only while the status is exactly `Pending`.
    ///
    /// # Errors
    ///
    /// Returns [`CampaignError::StatusInvalid`] from any other status.
    pub fn delete(&mut self) -> Result<(), CampaignError> {
        if self.status != CampaignStatus::Pending {
            return Err(CampaignError::StatusInvalid);
        }
        self.transition(CampaignStatus::Deleted);
        Ok(())
    }

    /// Mark the campaign as `Canceled`.
    ///
    /// Same precondition as [`Campaign::delete`]. No service operation
    /// exposes this yet; the transition is modeled for a future cancel
    /// operation.
    pub fn cancel(&mut self) -> Result<(), CampaignError> {
        if self.status != CampaignStatus::Pending {
            return Err(CampaignError::StatusInvalid);
        }
        self.transition(CampaignStatus::Canceled);
        Ok(())
    }

    // Pure state change: status plus updated_on, never I/O.
    fn transition(&mut self, status: CampaignStatus) {
        self.status = status;
        self.updated_on = Utc::now();
    }
}
