//! Domain validation errors.

use std::fmt;

/// The first campaign rule violated by a candidate campaign.
///
/// Validation reports exactly one rule: the first failure in the fixed
/// precedence order (name bounds, content bounds, contact count, contact
/// emails in list order, then the owning identity). The display text is a
/// stable part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name shorter than 5 characters (or missing).
    NameMin,

    /// Name longer than 24 characters.
    NameMax,

    /// Content shorter than 5 characters (or missing).
    ContentMin,

    /// Content longer than 1024 characters.
    ContentMax,

    /// No recipient emails were provided.
    ContactsMin,

    /// A recipient email address is not syntactically valid.
    InvalidEmail,

    /// The owning identity is not a syntactically valid email address.
    InvalidCreatedBy,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameMin => write!(f, "name is required with min 5"),
            Self::NameMax => write!(f, "name is required with max 24"),
            Self::ContentMin => write!(f, "content is required with min 5"),
            Self::ContentMax => write!(f, "content is required with max 1024"),
            Self::ContactsMin => write!(f, "contacts is required with min 1"),
            Self::InvalidEmail => write!(f, "email is invalid"),
            Self::InvalidCreatedBy => write!(f, "createdby is invalid"),
        }
    }
}

impl std::error::Error for ValidationError {}
