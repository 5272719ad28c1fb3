//! Campaign validation rules.
//!
//! Pure rule-checking over a candidate campaign, independent of persistence.
//! Rules run as an explicit ordered list and only the FIRST failure is
//! reported; callers never see more than one violation. The precedence
//! order and the messages are part of the service contract.

use crate::domain::{EmailAddress, ValidationError};
use crate::models::NewCampaignRequest;

const NAME_MIN: usize = 5;
const NAME_MAX: usize = 24;
const CONTENT_MIN: usize = 5;
const CONTENT_MAX: usize = 1024;

type Rule = fn(&NewCampaignRequest) -> Result<(), ValidationError>;

// Precedence order: name bounds, content bounds, contact count, contact
// emails in list order, owning identity.
const RULES: &[Rule] = &[
    name_min,
    name_max,
    content_min,
    content_max,
    contacts_min,
    contact_emails,
    created_by_format,
];

/// Check a candidate campaign against every rule in precedence order.
///
/// # Errors
///
/// Returns the first violated [`ValidationError`]; later violations are
/// never reported.
pub fn validate(request: &NewCampaignRequest) -> Result<(), ValidationError> {
    for rule in RULES {
        rule(request)?;
    }
    Ok(())
}

fn name_min(request: &NewCampaignRequest) -> Result<(), ValidationError> {
    if request.name.chars().count() < NAME_MIN {
        return Err(ValidationError::NameMin);
    }
    Ok(())
}

fn name_max(request: &NewCampaignRequest) -> Result<(), ValidationError> {
    if request.name.chars().count() > NAME_MAX {
        return Err(ValidationError::NameMax);
    }
    Ok(())
}

fn content_min(request: &NewCampaignRequest) -> Result<(), ValidationError> {
    if request.content.chars().count() < CONTENT_MIN {
        return Err(ValidationError::ContentMin);
    }
    Ok(())
}

fn content_max(request: &NewCampaignRequest) -> Result<(), ValidationError> {
    if request.content.chars().count() > CONTENT_MAX {
        return Err(ValidationError::ContentMax);
    }
    Ok(())
}

fn contacts_min(request: &NewCampaignRequest) -> Result<(), ValidationError> {
    if request.emails.is_empty() {
        return Err(ValidationError::ContactsMin);
    }
    Ok(())
}

fn contact_emails(request: &NewCampaignRequest) -> Result<(), ValidationError> {
    for email in &request.emails {
        if !EmailAddress::is_valid(email) {
            return Err(ValidationError::InvalidEmail);
        }
    }
    Ok(())
}

fn created_by_format(request: &NewCampaignRequest) -> Result<(), ValidationError> {
    if !EmailAddress::is_valid(&request.created_by) {
        return Err(ValidationError::InvalidCreatedBy);
    }
    Ok(())
}
