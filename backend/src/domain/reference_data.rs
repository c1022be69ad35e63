//! Lazily loaded reference data: known country names and top-level domains.
//!
//! The cache starts Empty. [`ReferenceDataCache::ensure_loaded`] fetches the
//! country directory once and moves to Loaded; there is no expiry or refresh
//! afterwards. A failed fetch leaves the cache Empty, so the next caller
//! triggers another fetch. Concurrent callers that find the cache Empty share
//! one in-flight fetch.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use super::ports::{CountryDirectory, CountryDirectoryError, CountryRecord};

/// Suffixes accepted in e-mail addresses regardless of the directory content.
pub const GENERIC_TOP_LEVEL_DOMAINS: [&str; 9] =
    ["com", "net", "info", "org", "at", "ch", "li", "de", "eu"];

/// Failure to populate the cache.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("reference data could not be loaded: {0}")]
pub struct ReferenceDataError(#[from] pub CountryDirectoryError);

/// Immutable pair of lower-cased lookup sets built from one directory fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    countries: HashSet<String>,
    top_level_domains: HashSet<String>,
}

impl ReferenceData {
    /// Build lookup sets from directory records.
    ///
    /// The generic domains are always present. Domains lose their leading dot
    /// and empty entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use applicants::domain::ports::CountryRecord;
    /// use applicants::domain::ReferenceData;
    ///
    /// let data = ReferenceData::from_directory(vec![CountryRecord::new("Germany", [".DE"])]);
    /// assert!(data.contains_country("GERMANY"));
    /// assert!(data.contains_top_level_domain("de"));
    /// assert!(data.contains_top_level_domain("com"));
    /// ```
    #[must_use]
    pub fn from_directory(records: Vec<CountryRecord>) -> Self {
        let mut top_level_domains: HashSet<String> = GENERIC_TOP_LEVEL_DOMAINS
            .iter()
            .map(|domain| (*domain).to_owned())
            .collect();
        let mut countries = HashSet::with_capacity(records.len());

        for record in records {
            countries.insert(record.name.to_lowercase());
            for raw in &record.top_level_domains {
                let domain = raw.strip_prefix('.').unwrap_or(raw);
                if domain.is_empty() {
                    continue;
                }
                top_level_domains.insert(domain.to_lowercase());
            }
        }

        Self {
            countries,
            top_level_domains,
        }
    }

    /// Case-insensitive country name lookup.
    #[must_use]
    pub fn contains_country(&self, name: &str) -> bool {
        self.countries.contains(&name.to_lowercase())
    }

    /// Case-insensitive lookup of a domain suffix without its leading dot.
    #[must_use]
    pub fn contains_top_level_domain(&self, domain: &str) -> bool {
        self.top_level_domains.contains(&domain.to_lowercase())
    }

    /// Number of known countries.
    #[must_use]
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Number of known top-level domains.
    #[must_use]
    pub fn top_level_domain_count(&self) -> usize {
        self.top_level_domains.len()
    }
}

/// Two-state cache (Empty, Loaded) in front of a [`CountryDirectory`].
pub struct ReferenceDataCache {
    directory: Arc<dyn CountryDirectory>,
    loaded: RwLock<Option<Arc<ReferenceData>>>,
    load_gate: Mutex<()>,
}

impl ReferenceDataCache {
    /// Create an Empty cache backed by `directory`.
    #[must_use]
    pub fn new(directory: Arc<dyn CountryDirectory>) -> Self {
        Self {
            directory,
            loaded: RwLock::new(None),
            load_gate: Mutex::new(()),
        }
    }

    /// Whether a load has completed successfully.
    pub async fn is_loaded(&self) -> bool {
        self.loaded.read().await.is_some()
    }

    /// Return the loaded data, fetching the directory first when Empty.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceDataError`] when the directory fetch fails; the cache
    /// stays Empty in that case.
    pub async fn ensure_loaded(&self) -> Result<Arc<ReferenceData>, ReferenceDataError> {
        if let Some(data) = self.loaded.read().await.as_ref() {
            return Ok(Arc::clone(data));
        }

        let _gate = self.load_gate.lock().await;
        // Another caller may have finished loading while we waited.
        if let Some(data) = self.loaded.read().await.as_ref() {
            return Ok(Arc::clone(data));
        }

        let data = Arc::new(self.load().await?);
        *self.loaded.write().await = Some(Arc::clone(&data));
        Ok(data)
    }

    async fn load(&self) -> Result<ReferenceData, ReferenceDataError> {
        debug!("loading reference data from country directory");
        let records = self.directory.fetch_countries().await?;

        let data = ReferenceData::from_directory(records);
        info!(
            countries = data.country_count(),
            top_level_domains = data.top_level_domain_count(),
            "reference data loaded"
        );
        Ok(data)
    }
}
