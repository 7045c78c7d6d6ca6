//! Error types for the portfolio API client.

use thiserror::Error;

/// Errors that can occur while talking to the dashboard API.
///
/// Transport failures, authentication failures, and malformed payloads are
/// kept apart so callers can decide policy per class (a 404 on an optional
/// endpoint is not the same situation as a refused connection).
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a usable response: DNS, connect,
    /// TLS or timeout failures.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("API error {status} {status_text}: {message}")]
    Http {
        /// HTTP status code reported by the backend
        status: u16,
        /// Status reason phrase (e.g. "Not Found")
        status_text: String,
        /// The `detail` message from the error body, or a synthesized
        /// fallback when the body carried none
        message: String,
    },

    /// The backend rejected the bearer token (HTTP 401).
    /// The stored token has already been cleared when this is returned.
    #[error("Unauthorized: credentials rejected")]
    Unauthorized,

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response from {endpoint}: {message}")]
    Deserialization {
        /// Endpoint path the malformed response came from
        endpoint: String,
        /// Decoder error detail
        message: String,
    },

    /// The client was configured with an unusable base URL.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// True when the error is the backend saying "not found" for the
    /// requested resource, as opposed to a transport or decode failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let error = ApiError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            message: "portfolio computation failed".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "API error 500 Internal Server Error: portfolio computation failed"
        );
    }

    #[test]
    fn test_is_not_found_only_matches_404() {
        let not_found = ApiError::Http {
            status: 404,
            status_text: "Not Found".to_string(),
            message: "No holdings found".to_string(),
        };
        assert!(not_found.is_not_found());

        let server_error = ApiError::Http {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            message: "boom".to_string(),
        };
        assert!(!server_error.is_not_found());

        assert!(!ApiError::Unauthorized.is_not_found());
    }

    #[test]
    fn test_deserialization_display_names_endpoint() {
        let error = ApiError::Deserialization {
            endpoint: "/portfolio/summary".to_string(),
            message: "missing field `totalValue`".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Failed to decode response from /portfolio/summary: missing field `totalValue`"
        );
    }
}
