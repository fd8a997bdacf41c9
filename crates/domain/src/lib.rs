//! AcademyHub domain records.
//!
//! The selection state in the player crate treats these as opaque values; the
//! invariants enforced here are limited to what the records themselves need.

pub mod entities;
pub mod error;
pub mod ids;

pub use entities::{Academy, Organization};
pub use error::DomainError;
pub use ids::{AcademyId, OrganizationId};
