//! Runtime settings and the resolved server configuration.
//!
//! [`AppSettings`] is loaded through OrthoConfig from CLI flags and
//! `APPLICANTS_*` environment variables. [`ServerConfig`] is the validated
//! form consumed by the server builders.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.eu/rest/v2/all";
const DEFAULT_COUNTRIES_TIMEOUT_SECS: u64 = 10;

/// Raw settings as supplied by the operator.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "APPLICANTS")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Endpoint returning the full country directory listing.
    pub countries_url: Option<String>,
    /// Timeout for one country directory request, in seconds.
    pub countries_timeout_secs: Option<u64>,
}

impl AppSettings {
    /// Bind address, falling back to the default.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Country directory endpoint, falling back to the default.
    pub fn countries_url(&self) -> &str {
        self.countries_url.as_deref().unwrap_or(DEFAULT_COUNTRIES_URL)
    }

    /// Country directory timeout, falling back to the default.
    pub fn countries_timeout(&self) -> Duration {
        Duration::from_secs(
            self.countries_timeout_secs
                .unwrap_or(DEFAULT_COUNTRIES_TIMEOUT_SECS),
        )
    }
}

/// Settings that failed validation.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The bind address is not a socket address.
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    /// The country directory endpoint is not an absolute URL.
    #[error("invalid country directory URL {value:?}: {source}")]
    CountriesUrl {
        value: String,
        source: url::ParseError,
    },
    /// A zero timeout would fail every request.
    #[error("country directory timeout must be at least one second")]
    ZeroTimeout,
}

/// Validated configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) countries_url: Url,
    pub(crate) countries_timeout: Duration,
}

impl ServerConfig {
    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

impl TryFrom<&AppSettings> for ServerConfig {
    type Error = SettingsError;

    fn try_from(settings: &AppSettings) -> Result<Self, Self::Error> {
        let bind_addr =
            settings
                .bind_addr()
                .parse()
                .map_err(|source| SettingsError::BindAddr {
                    value: settings.bind_addr().to_owned(),
                    source,
                })?;
        let countries_url =
            Url::parse(settings.countries_url()).map_err(|source| SettingsError::CountriesUrl {
                value: settings.countries_url().to_owned(),
                source,
            })?;
        let countries_timeout = settings.countries_timeout();
        if countries_timeout.is_zero() {
            return Err(SettingsError::ZeroTimeout);
        }

        Ok(Self {
            bind_addr,
            countries_url,
            countries_timeout,
        })
    }
}
