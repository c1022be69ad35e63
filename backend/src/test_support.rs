//! Test utilities shared by unit tests (in `src/`) and integration tests (in
//! `tests/`).
//!
//! Compiled for `cfg(test)` and for the `test-support` feature, which the
//! crate's own dev-dependency entry enables for integration tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::Applicant;
use crate::domain::ports::{
    CountryDirectory, CountryDirectoryError, CountryRecord, FixtureCountryDirectory,
};

/// Applicant that passes every rule against [`FixtureCountryDirectory`].
pub fn sample_applicant() -> Applicant {
    Applicant {
        id: 0,
        name: "Maximilian".into(),
        family_name: "Mustermann".into(),
        address: "Musterstraße 7, 56351 Hausen".into(),
        country_of_origin: "Germany".into(),
        e_mail_address: "max.mustermann@gmail.com".into(),
        age: 30,
        hired: true,
    }
}

/// Country directory that can be switched between failing and serving the
/// fixture listing, counting every fetch.
///
/// # Examples
/// ```
/// use applicants::test_support::FlakyCountryDirectory;
///
/// let directory = FlakyCountryDirectory::unavailable();
/// directory.set_available(true);
/// assert_eq!(directory.fetch_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct FlakyCountryDirectory {
    available: AtomicBool,
    fetches: AtomicUsize,
}

impl FlakyCountryDirectory {
    /// Directory that fails until [`FlakyCountryDirectory::set_available`] is called.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Switch between serving and failing.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of fetches attempted so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountryDirectory for FlakyCountryDirectory {
    async fn fetch_countries(&self) -> Result<Vec<CountryRecord>, CountryDirectoryError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.available.load(Ordering::SeqCst) {
            FixtureCountryDirectory.fetch_countries().await
        } else {
            Err(CountryDirectoryError::transport("connection refused"))
        }
    }
}
