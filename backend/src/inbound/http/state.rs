//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::Applicant;
use crate::domain::ports::EntityService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Validated CRUD over applicants.
    pub applicants: Arc<dyn EntityService<Applicant>>,
}

impl HttpState {
    /// Bundle the applicant service for handlers.
    pub fn new(applicants: Arc<dyn EntityService<Applicant>>) -> Self {
        Self { applicants }
    }
}
