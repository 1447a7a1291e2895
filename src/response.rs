//! Report response decoding and flattening.

use serde::Deserialize;

use crate::error::ApiError;

/// Vendor namespace prefix stripped from column headers.
const VENDOR_PREFIX: &str = "ga:";

/// Strip the vendor namespace prefix from a column header.
pub fn strip_vendor_prefix(header: &str) -> &str {
    header.strip_prefix(VENDOR_PREFIX).unwrap_or(header)
}

/// Raw `batchGet` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportResponse {
    #[serde(default)]
    pub reports: Vec<Report>,
}

/// One report of a `batchGet` response.
///
/// The continuation token lives at report level; its absence signals the
/// last page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default)]
    pub column_header: ColumnHeader,
    #[serde(default)]
    pub data: ReportData,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    #[serde(default)]
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub metric_header: MetricHeader,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricHeader {
    #[serde(default)]
    pub metric_header_entries: Vec<MetricHeaderEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricHeaderEntry {
    pub name: String,
}

/// Row data and sampling metadata of one report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    #[serde(default)]
    pub rows: Vec<ReportRow>,
    #[serde(default)]
    pub is_data_golden: bool,
    #[serde(default)]
    pub samples_read_counts: Vec<String>,
    #[serde(default)]
    pub sampling_space_sizes: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportRow {
    #[serde(default)]
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<MetricValues>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricValues {
    #[serde(default)]
    pub values: Vec<String>,
}

/// Structured error body returned by the service.
#[derive(Debug, Deserialize)]
pub(crate) struct ServiceErrorResponse {
    pub error: ServiceErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ServiceErrorDetail {
    #[allow(dead_code)]
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
    #[serde(default)]
    pub status: String,
}

/// Pagination and sampling metadata of one report page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportInfo {
    pub is_data_golden: bool,
    pub next_page_token: Option<String>,
    pub samples_read_counts: Option<i64>,
    pub sampling_space_sizes: Option<i64>,
}

/// Flattened headers and rows of one report page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One flattened page of a report.
#[derive(Debug, Clone)]
pub struct ReportPage {
    pub info: ReportInfo,
    pub table: ReportTable,
}

impl ReportResponse {
    /// Flatten the first report into a page.
    ///
    /// Headers are the dimension header names followed by the metric header
    /// names, vendor prefix stripped; each row carries its dimension values
    /// followed by the values of its first metric set. Rows with multiple
    /// metric value sets (multiple date ranges) keep only the first set.
    pub fn into_page(self) -> Result<ReportPage, ApiError> {
        let report = self
            .reports
            .into_iter()
            .next()
            .ok_or(ApiError::EmptyReport)?;

        let mut headers: Vec<String> = Vec::new();
        headers.extend(
            report
                .column_header
                .dimensions
                .iter()
                .map(|header| strip_vendor_prefix(header).to_string()),
        );
        headers.extend(
            report
                .column_header
                .metric_header
                .metric_header_entries
                .iter()
                .map(|entry| strip_vendor_prefix(&entry.name).to_string()),
        );

        let mut rows = Vec::with_capacity(report.data.rows.len());
        for row in &report.data.rows {
            let mut values = Vec::with_capacity(headers.len());
            values.extend(row.dimensions.iter().cloned());
            if let Some(first_set) = row.metrics.first() {
                values.extend(first_set.values.iter().cloned());
            }
            rows.push(values);
        }

        let samples_read_counts =
            parse_first_count(&report.data.samples_read_counts, "samplesReadCounts")?;
        let sampling_space_sizes = if samples_read_counts.is_some() {
            parse_first_count(&report.data.sampling_space_sizes, "samplingSpaceSizes")?
        } else {
            None
        };

        Ok(ReportPage {
            info: ReportInfo {
                is_data_golden: report.data.is_data_golden,
                next_page_token: report.next_page_token,
                samples_read_counts,
                sampling_space_sizes,
            },
            table: ReportTable { headers, rows },
        })
    }
}

/// Parse the first element of a sampling counter list, when present.
fn parse_first_count(values: &[String], field: &str) -> Result<Option<i64>, ApiError> {
    match values.first() {
        None => Ok(None),
        Some(raw) => raw
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ApiError::Malformed(format!("non-integer {}: {:?}", field, raw))),
    }
}
