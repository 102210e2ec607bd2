//! TacoBank AI - Product recommendation service for TacoBank
//!
//! This library provides the product recommendation logic used by the
//! TacoBank app. It scores a fixed catalog of financial products and
//! returns them ranked for the requesting user.

pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::Recommender;
pub use crate::models::{Recommendation, UserProfile, HealthResponse, ErrorResponse};
