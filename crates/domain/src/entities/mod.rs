//! Domain entities - Core records with identity

mod academy;
mod organization;

pub use academy::Academy;
pub use organization::Organization;
