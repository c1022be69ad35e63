//! Reqwest-backed country directory adapter.
//!
//! This adapter owns transport details only: the GET request, timeout and
//! HTTP error mapping, and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::CountryDto;
use crate::domain::ports::{CountryDirectory, CountryDirectoryError, CountryRecord};

/// Country directory adapter fetching the full listing from one endpoint.
pub struct CountryDirectoryHttpSource {
    client: Client,
    endpoint: Url,
}

impl CountryDirectoryHttpSource {
    /// Build an adapter whose requests fail after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl CountryDirectory for CountryDirectoryHttpSource {
    async fn fetch_countries(&self) -> Result<Vec<CountryRecord>, CountryDirectoryError> {
        debug!(endpoint = %self.endpoint, "fetching country directory");
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_countries(body.as_ref())
    }
}

fn parse_countries(body: &[u8]) -> Result<Vec<CountryRecord>, CountryDirectoryError> {
    let decoded: Vec<CountryDto> = serde_json::from_slice(body).map_err(|error| {
        CountryDirectoryError::decode(format!("invalid country directory JSON payload: {error}"))
    })?;
    Ok(decoded.into_iter().map(CountryDto::into_record).collect())
}

fn map_transport_error(error: reqwest::Error) -> CountryDirectoryError {
    if error.is_timeout() {
        CountryDirectoryError::timeout(error.to_string())
    } else {
        CountryDirectoryError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> CountryDirectoryError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            CountryDirectoryError::timeout(format!("status {}", status.as_u16()))
        }
        _ => CountryDirectoryError::status(status.as_u16(), body_preview(body)),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Mapping helpers plus round trips against a local mock server.

    use super::*;
    use httpmock::prelude::*;
    use rstest::rstest;

    const LISTING: &str = r#"[
        {"name": "Germany", "topLevelDomain": [".de"], "capital": "Berlin"},
        {"name": "Austria", "topLevelDomain": [".at"], "capital": "Vienna"},
        {"name": "Kosovo", "topLevelDomain": [""], "capital": "Pristina"}
    ]"#;

    fn source_for(server: &MockServer, timeout: Duration) -> CountryDirectoryHttpSource {
        let endpoint = Url::parse(&server.url("/rest/v2/all")).expect("mock server url");
        CountryDirectoryHttpSource::new(endpoint, timeout).expect("client builds")
    }

    #[test]
    fn decodes_listing_into_records() {
        let records = parse_countries(LISTING.as_bytes()).expect("listing decodes");
        assert_eq!(
            records,
            vec![
                CountryRecord::new("Germany", [".de"]),
                CountryRecord::new("Austria", [".at"]),
                CountryRecord::new("Kosovo", [""]),
            ]
        );
    }

    #[rstest]
    #[case::not_a_list(r#"{"status": 404}"#)]
    #[case::missing_name(r#"[{"topLevelDomain": [".de"]}]"#)]
    #[case::truncated(r#"[{"name": "Germ"#)]
    fn malformed_payloads_are_decode_errors(#[case] body: &str) {
        let error = parse_countries(body.as_bytes()).expect_err("decode fails");
        assert!(matches!(error, CountryDirectoryError::Decode { .. }));
    }

    #[rstest]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, true)]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, true)]
    #[case::not_found(StatusCode::NOT_FOUND, false)]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, false)]
    fn maps_statuses(#[case] status: StatusCode, #[case] is_timeout: bool) {
        let error = map_status_error(status, b"upstream said no");
        if is_timeout {
            assert!(matches!(error, CountryDirectoryError::Timeout { .. }));
        } else {
            assert_eq!(
                error,
                CountryDirectoryError::status(status.as_u16(), "upstream said no")
            );
        }
    }

    #[test]
    fn long_bodies_are_truncated_in_previews() {
        let body = "x ".repeat(400);
        let preview = body_preview(body.as_bytes());
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 163);
    }

    #[tokio::test]
    async fn fetches_listing_over_http() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/rest/v2/all");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(LISTING);
            })
            .await;

        let records = source_for(&server, Duration::from_secs(5))
            .fetch_countries()
            .await
            .expect("listing fetched");

        assert_eq!(records.len(), 3);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn server_errors_map_to_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/rest/v2/all");
                then.status(503).body("maintenance");
            })
            .await;

        let error = source_for(&server, Duration::from_secs(5))
            .fetch_countries()
            .await
            .expect_err("unavailable");

        assert_eq!(error, CountryDirectoryError::status(503_u16, "maintenance"));
    }

    #[tokio::test]
    async fn slow_directory_times_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/rest/v2/all");
                then.status(200)
                    .delay(Duration::from_millis(500))
                    .body(LISTING);
            })
            .await;

        let error = source_for(&server, Duration::from_millis(50))
            .fetch_countries()
            .await
            .expect_err("request times out");

        assert!(matches!(error, CountryDirectoryError::Timeout { .. }));
    }

    #[tokio::test]
    async fn unreachable_directory_is_a_transport_error() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let endpoint = Url::parse("http://127.0.0.1:9/rest/v2/all").expect("url");
        let source =
            CountryDirectoryHttpSource::new(endpoint, Duration::from_secs(2)).expect("client");

        let error = source.fetch_countries().await.expect_err("no listener");

        assert!(matches!(
            error,
            CountryDirectoryError::Transport { .. } | CountryDirectoryError::Timeout { .. }
        ));
    }
}
