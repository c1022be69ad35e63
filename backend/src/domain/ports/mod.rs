//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod country_directory;
mod entity_service;
mod entity_store;
mod id_source;

#[cfg(test)]
pub use country_directory::MockCountryDirectory;
pub use country_directory::{
    CountryDirectory, CountryDirectoryError, CountryRecord, FixtureCountryDirectory,
};
pub use entity_service::EntityService;
pub use entity_store::{EntityStore, EntityStoreError};
#[cfg(test)]
pub use id_source::MockIdSource;
pub use id_source::IdSource;
