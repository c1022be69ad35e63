//! HTTP inbound adapter exposing the applicant REST endpoints.

pub mod applicants;
pub mod error;
pub mod health;
pub mod response;
pub mod state;

pub use error::{ApiError, ApiResult};
