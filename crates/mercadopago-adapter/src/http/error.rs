/*
[INPUT]:  Error sources (HTTP transport, API payloads, serialization, config)
[OUTPUT]: Structured error types with status and platform error codes
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Main error type for the Mercado Pago adapter
#[derive(Error, Debug)]
pub enum MercadoPagoError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-2xx response
    #[error("API error (status {status}, code {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A URL template placeholder had no supplied value
    #[error("Missing path parameter: {name}")]
    MissingPathParam { name: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error payload returned by the platform on non-2xx responses
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    status: Option<u16>,
    error: Option<String>,
    message: Option<String>,
}

impl MercadoPagoError {
    /// Create an API error from status code, platform error code and message
    pub fn api_error(
        status: StatusCode,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        MercadoPagoError::Api {
            status: status.as_u16(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Decode the platform's structured error body; a body that is not
    /// valid JSON is carried through as the raw message
    pub(crate) fn from_error_body(status: StatusCode, body: &str) -> Self {
        let payload = serde_json::from_str::<ApiErrorBody>(body).unwrap_or_default();
        MercadoPagoError::Api {
            status: payload.status.unwrap_or_else(|| status.as_u16()),
            code: payload.error.unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("unknown").to_string()
            }),
            message: payload.message.unwrap_or_else(|| body.to_string()),
        }
    }

    /// Check if the error is an API error in the 4xx range
    pub fn is_client_error(&self) -> bool {
        matches!(self, MercadoPagoError::Api { status, .. } if (400..500).contains(status))
    }

    /// Check if the error is an API error in the 5xx range
    pub fn is_server_error(&self) -> bool {
        matches!(self, MercadoPagoError::Api { status, .. } if (500..600).contains(status))
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, MercadoPagoError>;
