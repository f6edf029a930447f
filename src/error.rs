//! Standard errors used by all functions in the crate.

use serde::Deserialize;
use std::fmt;

/// Message carried by every [`ApiError`].
pub const API_ERROR_MESSAGE: &str = "RazorpayX API Error";

/// Error collecting all possible failures of the RazorpayX client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Missing or invalid client credentials, or a missing required call argument.
    ///
    /// Always raised before any request is sent.
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// A request parameter failed client-side validation.
    ///
    /// Always raised before any request is sent.
    #[error("Validation error: {0}")]
    Validation(String),
    /// The API answered with a non-2xx status, or no response was received at all.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// Reqwest error not tied to an HTTP response, e.g. a body that failed to decode.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

/// How a request failed on its way through the transport.
#[derive(Debug)]
pub(crate) enum TransportFailure {
    /// The server answered with a non-2xx status. Built by the error handling middleware.
    Response(ApiError),
    /// The request never got a response: connection refused, timeout, broken pipe.
    NoResponse(reqwest::Error),
    /// Anything else is not an API failure and is propagated as is.
    Other(Error),
}

impl From<reqwest_middleware::Error> for TransportFailure {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e)
                if e.is_connect() || e.is_timeout() || e.is_request() =>
            {
                TransportFailure::NoResponse(e)
            }
            reqwest_middleware::Error::Reqwest(e) => TransportFailure::Other(Error::HttpError(e)),
            reqwest_middleware::Error::Middleware(e) => match e.downcast::<Error>() {
                Ok(Error::ApiError(api_error)) => TransportFailure::Response(api_error),
                Ok(e) => TransportFailure::Other(e),
                Err(e) => TransportFailure::Other(Error::Other(e)),
            },
        }
    }
}

impl From<TransportFailure> for Error {
    fn from(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::Response(api_error) => Error::ApiError(api_error),
            TransportFailure::NoResponse(e) => {
                tracing::debug!("No response received: {}", e);
                Error::ApiError(ApiError::without_response())
            }
            TransportFailure::Other(e) => e,
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        TransportFailure::from(e).into()
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// RazorpayX HTTP APIs error.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub struct ApiError {
    /// Human readable message. Always [`API_ERROR_MESSAGE`].
    pub message: String,
    /// HTTP status returned by the server, or `-1` if no response was received.
    pub status_code: i32,
    /// Structured error returned by the API in the `error` field of the response body.
    pub detail: Option<ApiErrorDetail>,
}

impl ApiError {
    pub(crate) fn new(status_code: i32, detail: Option<ApiErrorDetail>) -> Self {
        Self {
            message: API_ERROR_MESSAGE.to_string(),
            status_code,
            detail,
        }
    }

    pub(crate) fn without_response() -> Self {
        Self::new(-1, None)
    }

    /// The HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        u16::try_from(self.status_code)
            .ok()
            .and_then(|code| reqwest::StatusCode::from_u16(code).ok())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if self.status_code >= 0 {
            write!(f, " (HTTP {})", self.status_code)?;
        } else {
            write!(f, " (no response)")?;
        }

        if let Some(ref detail) = self.detail {
            write!(f, ": {} - {}", detail.code, detail.description)?;
            if let Some(ref field) = detail.field {
                write!(f, "\nField: {}", field)?;
            }
            if let Some(ref reasons) = detail.reasons {
                write!(f, "\nReason: {}", reasons)?;
            }
        }

        Ok(())
    }
}

/// The `error` object of a RazorpayX error response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ApiErrorDetail {
    /// Error class, e.g. `BAD_REQUEST_ERROR`.
    pub code: String,
    pub description: String,
    #[serde(default)]
    pub source: Option<ErrorSource>,
    #[serde(default, alias = "reason")]
    pub reasons: Option<String>,
    #[serde(default)]
    pub step: Option<String>,
    /// Name of the request parameter that caused the error, if any.
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Where the error originated.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSource {
    Business,
    Internal,
    #[serde(other)]
    Unknown,
}
