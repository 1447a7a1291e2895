//! Report request construction for the `reports:batchGet` operation.

use serde::Serialize;

use crate::config::ClientConfig;

/// Sampling level requested for every report.
pub const SAMPLING_LEVEL: &str = "LARGE";

/// Page size requested for every report, the service maximum.
pub const PAGE_SIZE: &str = "100000";

/// Pseudo-dimension the service uses to label segmented rows.
pub const SEGMENT_DIMENSION: &str = "ga:segment";

/// Date format accepted by the report date range.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Typed query parameters for one report.
///
/// Dimensions and metrics are required and order-preserving; the remaining
/// parameters default to unset and are omitted from the wire body.
/// `include_empty_rows` defaults to true.
#[derive(Debug, Clone)]
pub struct ReportQuery {
    pub(crate) dimensions: Vec<String>,
    pub(crate) metrics: Vec<String>,
    pub(crate) filter: Option<String>,
    pub(crate) segment: Option<String>,
    pub(crate) page_token: Option<String>,
    pub(crate) include_empty_rows: bool,
}

impl ReportQuery {
    /// Create a query over the given dimensions and metric expressions.
    pub fn new(dimensions: Vec<String>, metrics: Vec<String>) -> Self {
        Self {
            dimensions,
            metrics,
            filter: None,
            segment: None,
            page_token: None,
            include_empty_rows: true,
        }
    }

    /// Add a filters expression.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Apply a segment to the whole query.
    ///
    /// The segment also shows up as a trailing `ga:segment` dimension in
    /// the request and the returned table.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = Some(segment.into());
        self
    }

    /// Start paging from a previously returned continuation token.
    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }

    /// Include or exclude rows whose metric values are all zero.
    pub fn include_empty_rows(mut self, include: bool) -> Self {
        self.include_empty_rows = include;
        self
    }
}

/// Wire shape of one requested dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dimension {
    pub name: String,
}

impl Dimension {
    /// Wrap dimension names in order, no dedup. When `with_segment` is set
    /// the segment pseudo-dimension is appended last.
    pub fn from_names(names: &[String], with_segment: bool) -> Vec<Dimension> {
        let mut dimensions: Vec<Dimension> = names
            .iter()
            .map(|name| Dimension { name: name.clone() })
            .collect();
        if with_segment {
            dimensions.push(Dimension {
                name: SEGMENT_DIMENSION.to_string(),
            });
        }
        dimensions
    }
}

/// Wire shape of one requested metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub expression: String,
}

impl Metric {
    /// Wrap metric expressions in order, no dedup.
    pub fn from_expressions(expressions: &[String]) -> Vec<Metric> {
        expressions
            .iter()
            .map(|expression| Metric {
                expression: expression.clone(),
            })
            .collect()
    }
}

/// Wire shape of the report date range.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

/// Wire shape of a segment reference.
///
/// The element key is `segment_id` verbatim, as the service consumes it
/// from this client.
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub segment_id: String,
}

/// One report request as submitted to `reports:batchGet`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub view_id: String,
    pub date_ranges: DateRange,
    pub dimensions: Vec<Dimension>,
    pub metrics: Vec<Metric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    pub sampling_level: &'static str,
    pub include_empty_rows: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<Segment>>,
    pub page_size: &'static str,
}

impl ReportRequest {
    /// Assemble the wire body for a query against the configured view and
    /// date range. Absent optional parameters stay absent; sampling level
    /// and page size are fixed.
    pub fn build(config: &ClientConfig, query: &ReportQuery) -> Self {
        Self {
            view_id: config.view_id.clone(),
            date_ranges: DateRange {
                start_date: config.start_date.format(DATE_FORMAT).to_string(),
                end_date: config.end_date.format(DATE_FORMAT).to_string(),
            },
            dimensions: Dimension::from_names(&query.dimensions, query.segment.is_some()),
            metrics: Metric::from_expressions(&query.metrics),
            filters_expression: query.filter.clone(),
            page_token: query.page_token.clone(),
            sampling_level: SAMPLING_LEVEL,
            include_empty_rows: query.include_empty_rows,
            segments: query
                .segment
                .as_ref()
                .map(|id| vec![Segment { segment_id: id.clone() }]),
            page_size: PAGE_SIZE,
        }
    }

    /// Wrap the request into the outer `batchGet` body.
    pub fn into_body(self) -> BatchGetRequest {
        BatchGetRequest {
            report_requests: self,
        }
    }
}

/// Outer `batchGet` body wrapping a single report request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetRequest {
    pub report_requests: ReportRequest,
}
