//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{AppSettings, ServerConfig};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use applicants::Trace;
use applicants::inbound::http::applicants::configure as configure_applicants;
use applicants::inbound::http::error::json_config;
use applicants::inbound::http::health::{HealthState, live, ready};
use applicants::inbound::http::state::HttpState;
use state_builders::build_app_parts;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .configure(configure_applicants)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server from the validated configuration.
///
/// Returns the running [`Server`] together with the shared health state so
/// the caller can flag draining during shutdown.
///
/// # Errors
/// Propagates [`std::io::Error`] when building the outbound client, binding
/// the socket or starting the server fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<(Server, web::Data<HealthState>)> {
    let parts = build_app_parts(&config)?;
    let health_state = web::Data::new(HealthState::new(parts.reference_data));
    let http_state = web::Data::new(parts.http_state);

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok((server, health_state))
}
