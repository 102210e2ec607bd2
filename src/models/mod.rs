// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::Recommendation;
pub use requests::UserProfile;
pub use responses::{ErrorResponse, HealthResponse};
