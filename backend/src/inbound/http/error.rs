//! HTTP adapter mapping for service errors.
//!
//! Purpose: keep [`ServiceError`] HTTP-agnostic while turning each kind into
//! one status code and an [`ApiResourceResponse`] envelope. Infrastructure
//! details are logged with the request's trace id and never sent to clients.

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use tracing::{debug, error};

use super::response::ApiResourceResponse;
use crate::domain::{ErrorKind, ServiceError, TRACE_ID_HEADER, TraceId};

/// Error key for an unknown id.
pub const ID_NOT_FOUND_KEY: &str = "id-not-found";
/// Error key for any unexpected server-side failure.
pub const INTERNAL_ERROR_KEY: &str = "internal-error";
/// Error key for a body that is not valid JSON for the resource.
pub const INVALID_PAYLOAD_KEY: &str = "invalid-payload";

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure returned by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The service rejected or failed the operation.
    #[error(transparent)]
    Service(#[from] ServiceError),
    /// The request body could not be decoded.
    #[error("malformed request payload: {0}")]
    Payload(String),
}

impl ApiError {
    fn error_keys(&self) -> Vec<String> {
        match self {
            Self::Service(ServiceError::NotFound { .. }) => vec![ID_NOT_FOUND_KEY.to_owned()],
            Self::Service(ServiceError::Invalid(report)) => report.error_keys(),
            Self::Service(ServiceError::Infrastructure { .. }) => {
                vec![INTERNAL_ERROR_KEY.to_owned()]
            }
            Self::Payload(_) => vec![INVALID_PAYLOAD_KEY.to_owned()],
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(err) => match err.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Invalid => StatusCode::BAD_REQUEST,
                ErrorKind::Infrastructure => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Payload(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = TraceId::current();
        if let Self::Service(ServiceError::Infrastructure { message }) = self {
            match trace_id {
                Some(id) => error!(trace_id = %id, %message, "request failed"),
                None => error!(%message, "request failed"),
            }
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = trace_id {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }
        builder.json(ApiResourceResponse::failure(self.error_keys()))
    }
}

fn reject_payload(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejected request payload");
    ApiError::Payload(err.to_string()).into()
}

/// JSON extractor configuration answering malformed bodies with the
/// `invalid-payload` envelope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use applicants::inbound::http::error::json_config;
///
/// let _app = App::new().app_data(json_config());
/// ```
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(reject_payload)
}

#[cfg(test)]
mod tests;
