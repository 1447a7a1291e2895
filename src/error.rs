//! Unified error types for the Analytics Reporting client.

use reqwest::StatusCode;
use thiserror::Error;

/// Service-account key loading errors.
#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Token request failed with status {status}: {body}")]
    TokenRequestFailed { status: StatusCode, body: String },

    #[error("Token parse error: {0}")]
    TokenParse(String),

    #[error("Assertion signing error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Failed to create HTTP client: {0}")]
    HttpClientInit(String),
}

/// Report request/response errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Credentials error: {0}")]
    Credentials(#[from] CredentialsError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("Reporting API error [{code}]: {message}")]
    Service {
        status: StatusCode,
        code: String,
        message: String,
    },

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Response contained no reports")]
    EmptyReport,

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Failed to create HTTP client: {0}")]
    HttpClientInit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_error_missing_field_display() {
        let error = CredentialsError::MissingField("private_key".to_string());
        assert_eq!(error.to_string(), "Missing required field: private_key");
    }

    #[test]
    fn test_credentials_error_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cred_err: CredentialsError = io_err.into();
        assert!(cred_err.to_string().contains("IO error"));
    }

    #[test]
    fn test_auth_error_token_parse_display() {
        let error = AuthError::TokenParse("invalid JSON".to_string());
        assert_eq!(error.to_string(), "Token parse error: invalid JSON");
    }

    #[test]
    fn test_auth_error_token_request_failed_display() {
        let error = AuthError::TokenRequestFailed {
            status: StatusCode::UNAUTHORIZED,
            body: "invalid_grant".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("401"));
        assert!(display.contains("invalid_grant"));
    }

    #[test]
    fn test_auth_error_http_client_init_display() {
        let error = AuthError::HttpClientInit("connection timeout".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to create HTTP client: connection timeout"
        );
    }

    #[test]
    fn test_api_error_http_error_display() {
        let error = ApiError::Http {
            status: StatusCode::NOT_FOUND,
            body: "Resource not found".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("404"));
        assert!(display.contains("Resource not found"));
    }

    #[test]
    fn test_api_error_service_display() {
        let error = ApiError::Service {
            status: StatusCode::FORBIDDEN,
            code: "PERMISSION_DENIED".to_string(),
            message: "User does not have sufficient permissions for this profile.".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("PERMISSION_DENIED"));
        assert!(display.contains("sufficient permissions"));
    }

    #[test]
    fn test_api_error_empty_report_display() {
        let error = ApiError::EmptyReport;
        assert_eq!(error.to_string(), "Response contained no reports");
    }

    #[test]
    fn test_api_error_from_auth_error() {
        let auth_error = AuthError::TokenParse("bad body".to_string());
        let api_error: ApiError = auth_error.into();
        assert!(api_error.to_string().contains("Authentication error"));
    }

    #[test]
    fn test_api_error_from_credentials_error() {
        let cred_error = CredentialsError::MissingField("client_email".to_string());
        let api_error: ApiError = cred_error.into();
        assert!(api_error.to_string().contains("Credentials error"));
        assert!(api_error.to_string().contains("client_email"));
    }

    #[test]
    fn test_api_error_debug_format() {
        let error = ApiError::Malformed("non-integer samplesReadCounts".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Malformed"));
    }
}
