//! Client configuration for the Analytics Reporting client.

use chrono::NaiveDate;

/// Default `reports:batchGet` endpoint.
const DEFAULT_ENDPOINT: &str = "https://analyticsreporting.googleapis.com/v4/reports:batchGet";

/// Default HTTP request timeout in seconds.
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// View and date-range configuration, immutable once the client is built.
///
/// The date range is inclusive on both ends and passed through as supplied;
/// `start_date` is not checked against `end_date`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Analytics view (profile) the reports are scoped to.
    pub view_id: String,

    /// Inclusive start of the report date range.
    pub start_date: NaiveDate,

    /// Inclusive end of the report date range.
    pub end_date: NaiveDate,

    /// `reports:batchGet` URL, overridable for test servers.
    pub endpoint: String,

    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
}

impl ClientConfig {
    /// Create a configuration for a view and date range.
    pub fn new(view_id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            view_id: view_id.into(),
            start_date,
            end_date,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Override the `reports:batchGet` endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the HTTP request timeout.
    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Get timeout as Duration.
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_seconds)
    }
}
