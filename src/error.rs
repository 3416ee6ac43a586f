use std::fmt;

use axum::{
    http::StatusCode as HttpStatus,
    response::{IntoResponse, Response},
};
use reqwest::StatusCode;

/// Every failure the application can report.
///
/// Components return the first error they hit; nothing is retried. The
/// variant decides the process exit code through [`Error::exit_code`].
#[derive(Debug)]
pub enum Error {
    /// One or more required configuration values are missing or malformed.
    Config(String),
    /// Transport-level failure (connect, TLS, body read, client construction).
    Request(reqwest::Error),
    /// Upstream answered with a status the caller does not accept.
    Status { endpoint: String, status: StatusCode },
    /// Upstream body was not the JSON we expected.
    Decode(serde_json::Error),
    /// An expected JSON key was absent or had the wrong type.
    FieldMissing(String),
    /// Posting the status update failed; wraps the client's error unchanged.
    Publish(Box<Error>),
    /// The callback server could not bind or serve.
    Server(std::io::Error),
}

impl Error {
    /// Shorthand for [`Error::Status`]; `endpoint` names the upstream in the message.
    pub fn status(endpoint: impl Into<String>, status: StatusCode) -> Self {
        Error::Status {
            endpoint: endpoint.into(),
            status,
        }
    }

    pub fn field_missing(key: impl Into<String>) -> Self {
        Error::FieldMissing(key.into())
    }

    /// Process exit code: `2` when publishing failed, `1` for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Publish(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "configuration error: {}", msg),
            Error::Request(e) => write!(f, "request failed: {}", e),
            Error::Status { endpoint, status } => {
                write!(f, "{} answered with status {}", endpoint, status)
            }
            Error::Decode(e) => write!(f, "malformed response body: {}", e),
            Error::FieldMissing(key) => write!(f, "{} not found in response", key),
            Error::Publish(e) => write!(f, "publish failed: {}", e),
            Error::Server(e) => write!(f, "server error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Request(e) => Some(e),
            Error::Decode(e) => Some(e),
            Error::Publish(e) => Some(e.as_ref()),
            Error::Server(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Request(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Server(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (HttpStatus::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
