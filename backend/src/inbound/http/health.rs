//! Health endpoints: liveness and readiness probes for orchestration and load balancers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;

use crate::domain::ReferenceDataCache;

/// Shared health state for readiness and liveness checks.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
    reference_data: Arc<ReferenceDataCache>,
}

/// Readiness body; lets operators see whether reference data is loaded yet.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessReport {
    /// Whether the server accepts traffic.
    pub ready: bool,
    /// Whether the country directory has been fetched successfully.
    pub reference_data_loaded: bool,
}

impl HealthState {
    /// Create a health state starting as not ready but live.
    #[must_use]
    pub fn new(reference_data: Arc<ReferenceDataCache>) -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
            reference_data,
        }
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail fast during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Return readiness state.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Return liveness state. When false, liveness probes emit 503 to trigger restarts.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_status(probe_ok: bool) -> actix_web::HttpResponseBuilder {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };
        response.insert_header((header::CACHE_CONTROL, "no-store"));
        response
    }
}

/// Readiness probe. 200 once the server is bound, 503 before.
///
/// Reports the reference data state without triggering a load.
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    let report = ReadinessReport {
        ready: state.is_ready(),
        reference_data_loaded: state.reference_data.is_loaded().await,
    };
    HealthState::probe_status(report.ready).json(report)
}

/// Liveness probe. 200 while the process is marked alive and 503 once draining.
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_status(state.is_alive()).finish()
}
