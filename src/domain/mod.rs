//! Domain value objects.
//!
//! Type-safe wrappers that enforce invariants at construction time,
//! so the rest of the crate never handles unvalidated values.

mod email;
mod errors;

pub use email::EmailAddress;
pub use errors::ValidationError;
