//! Applicant API handlers.
//!
//! ```text
//! GET    /applicant
//! GET    /applicant/{id}
//! POST   /applicant        {"name":"Maximilian",...}
//! PUT    /applicant/{id}   {"name":"Maximilian",...}
//! DELETE /applicant/{id}
//! ```
//!
//! Reads return entities as-is; mutations answer with an
//! [`ApiResourceResponse`]. Path ids that are not 32-bit integers fail
//! extraction and yield 404.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};

use super::error::ApiResult;
use super::response::ApiResourceResponse;
use super::state::HttpState;
use crate::domain::{Applicant, Entity, EntityId};

/// Relative URI of one applicant, e.g. `applicant/17`.
pub fn applicant_uri(id: EntityId) -> String {
    format!("applicant/{id}")
}

/// List every applicant.
#[get("/applicant")]
pub async fn list_applicants(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Applicant>>> {
    let applicants = state.applicants.get_all().await?;
    Ok(web::Json(applicants))
}

/// Fetch one applicant.
#[get("/applicant/{id}")]
pub async fn get_applicant(
    state: web::Data<HttpState>,
    path: web::Path<EntityId>,
) -> ApiResult<web::Json<Applicant>> {
    let applicant = state.applicants.get(path.into_inner()).await?;
    Ok(web::Json(applicant))
}

/// Validate and store a new applicant. Any id in the body is ignored.
#[post("/applicant")]
pub async fn create_applicant(
    state: web::Data<HttpState>,
    payload: web::Json<Applicant>,
) -> ApiResult<HttpResponse> {
    let created = state.applicants.create(payload.into_inner()).await?;
    let uri = applicant_uri(created.id());
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, uri.clone()))
        .json(ApiResourceResponse::resource(created.id(), uri)))
}

/// Validate and replace an applicant; the path id wins over the body id.
#[put("/applicant/{id}")]
pub async fn update_applicant(
    state: web::Data<HttpState>,
    path: web::Path<EntityId>,
    payload: web::Json<Applicant>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    state
        .applicants
        .update(payload.into_inner().with_id(id))
        .await?;
    Ok(HttpResponse::Ok().json(ApiResourceResponse::resource(id, applicant_uri(id))))
}

/// Remove an applicant.
#[delete("/applicant/{id}")]
pub async fn delete_applicant(
    state: web::Data<HttpState>,
    path: web::Path<EntityId>,
) -> ApiResult<HttpResponse> {
    state.applicants.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResourceResponse::ok()))
}

/// Register the applicant routes.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use applicants::inbound::http::applicants::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_applicants)
        .service(get_applicant)
        .service(create_applicant)
        .service(update_applicant)
        .service(delete_applicant);
}
