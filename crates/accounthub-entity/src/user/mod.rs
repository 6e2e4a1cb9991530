//! User domain entities.

pub mod model;
pub mod status;

pub use model::{NewUser, ProfileUpdate, User};
pub use status::VerificationStatus;
