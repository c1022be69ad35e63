//! Driven port for the external country directory.
//!
//! The directory returns raw records; normalisation (lower-casing, stripping
//! the leading dot from domains) belongs to the reference data cache.

use async_trait::async_trait;

use super::define_port_error;

/// One country as published by the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    /// Country name, e.g. `Germany`.
    pub name: String,
    /// Dot-prefixed top-level domains, e.g. `.de`. Entries may be empty.
    pub top_level_domains: Vec<String>,
}

impl CountryRecord {
    /// Build a record from a name and its domains.
    pub fn new<I, S>(name: impl Into<String>, top_level_domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            top_level_domains: top_level_domains.into_iter().map(Into::into).collect(),
        }
    }
}

define_port_error! {
    /// Errors surfaced while fetching the country directory.
    pub enum CountryDirectoryError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "country directory transport failed: {message}",
        /// The call exceeded the configured timeout.
        Timeout { message: String } =>
            "country directory timed out: {message}",
        /// The directory answered with a non-success status.
        Status { status: u16, message: String } =>
            "country directory returned status {status}: {message}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "country directory response decode failed: {message}",
    }
}

/// Port for fetching the full country directory in one call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryDirectory: Send + Sync {
    /// Fetch every country with its top-level domains.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use applicants::domain::ports::{CountryDirectory, FixtureCountryDirectory};
    ///
    /// let countries = FixtureCountryDirectory.fetch_countries().await?;
    /// assert!(countries.iter().any(|country| country.name == "Germany"));
    /// # Ok::<(), applicants::domain::ports::CountryDirectoryError>(())
    /// ```
    async fn fetch_countries(&self) -> Result<Vec<CountryRecord>, CountryDirectoryError>;
}

/// Fixture directory serving a handful of European countries.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCountryDirectory;

#[async_trait]
impl CountryDirectory for FixtureCountryDirectory {
    async fn fetch_countries(&self) -> Result<Vec<CountryRecord>, CountryDirectoryError> {
        Ok(vec![
            CountryRecord::new("Germany", [".de"]),
            CountryRecord::new("Austria", [".at"]),
            CountryRecord::new("Switzerland", [".ch"]),
            CountryRecord::new("France", [".fr"]),
            CountryRecord::new("United Kingdom of Great Britain and Northern Ireland", [".uk"]),
            CountryRecord::new("Kosovo", [""]),
        ])
    }
}
