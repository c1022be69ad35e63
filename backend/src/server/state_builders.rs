//! Builders wiring adapters, domain services and HTTP state together.

use std::io;
use std::sync::Arc;

use applicants::domain::ports::CountryDirectory;
use applicants::domain::{
    ApplicantValidator, GenericRepository, GenericService, IdAllocator, ReferenceDataCache,
};
use applicants::inbound::http::state::HttpState;
use applicants::outbound::countries::CountryDirectoryHttpSource;
use applicants::outbound::id_source::RandomIdSource;
use applicants::outbound::persistence::InMemoryEntityStore;

use super::ServerConfig;

/// Process-wide singletons shared by every worker.
#[derive(Clone)]
pub(crate) struct AppParts {
    pub(crate) http_state: HttpState,
    pub(crate) reference_data: Arc<ReferenceDataCache>,
}

/// Build the applicant service over the configured country directory.
///
/// # Errors
///
/// Returns [`io::Error`] when the HTTP client for the directory cannot be
/// constructed.
pub(crate) fn build_app_parts(config: &ServerConfig) -> io::Result<AppParts> {
    let directory = CountryDirectoryHttpSource::new(
        config.countries_url.clone(),
        config.countries_timeout,
    )
    .map_err(|err| io::Error::other(format!("country directory client: {err}")))?;
    Ok(assemble(Arc::new(directory)))
}

fn assemble(directory: Arc<dyn CountryDirectory>) -> AppParts {
    let reference_data = Arc::new(ReferenceDataCache::new(directory));
    let repository = GenericRepository::new(
        Arc::new(InMemoryEntityStore::new()),
        IdAllocator::new(Arc::new(RandomIdSource::new())),
    );
    let validator = Arc::new(ApplicantValidator::new(Arc::clone(&reference_data)));
    let service = GenericService::new(repository, validator);

    AppParts {
        http_state: HttpState::new(Arc::new(service)),
        reference_data,
    }
}
