//! Google Analytics Reporting API v4 client.
//!
//! Builds `reports:batchGet` request bodies from typed query parameters,
//! submits them with service-account authentication, and flattens the
//! paginated, nested response into tabular pages.
//!
//! ```no_run
//! use ga_reporting_client::{ReportClient, ReportQuery};
//!
//! # async fn run() -> Result<(), ga_reporting_client::ApiError> {
//! let client = ReportClient::new(
//!     "service-account.json",
//!     "123456789",
//!     chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     chrono::NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
//! )?;
//!
//! let query = ReportQuery::new(
//!     vec!["ga:country".into()],
//!     vec!["ga:sessions".into()],
//! );
//!
//! let mut pages = client.pages(query);
//! while let Some(page) = pages.next_page().await? {
//!     println!("{} rows", page.table.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod request;
pub mod response;

pub use client::{ReportClient, ReportPages};
pub use config::ClientConfig;
pub use credentials::ServiceAccountKey;
pub use error::{ApiError, AuthError, CredentialsError};
pub use request::{ReportQuery, ReportRequest};
pub use response::{ReportInfo, ReportPage, ReportTable};
