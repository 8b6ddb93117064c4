//! Normalized failure shape for every transport call.
//!
//! DESIGN
//! ======
//! Callers only ever see two families: [`AuthError`] when no usable token
//! exists, and [`TransportError`] for everything the HTTP round-trip can do
//! wrong. `Display` output is the human-readable message the content store
//! records for the login/card screens, so the wording is part of the contract.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message used when the server's error body carries no `message` field.
pub const UNKNOWN_SERVER_MESSAGE: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// A content request was attempted with no token held.
    #[error("No authentication token available")]
    MissingToken,
    /// The token endpoint answered but its body had no usable `token`.
    #[error("No token received from server")]
    NoTokenReceived,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The server responded with a non-success status.
    #[error("API Error {status}: {message}")]
    Server { status: u16, message: String },
    /// The request went out but no response came back (connect failure, timeout).
    #[error("Network error: No response from server")]
    Network { detail: String },
    /// The request could not be built, or the response could not be read.
    #[error("Request error: {message}")]
    Request { message: String },
}

impl TransportError {
    /// Classify a `reqwest` failure.
    #[must_use]
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_builder() {
            return Self::Request { message: err.to_string() };
        }
        if err.is_timeout() || err.is_connect() || err.is_request() {
            return Self::Network { detail: err.to_string() };
        }
        if let Some(status) = err.status() {
            return Self::Server {
                status: status.as_u16(),
                message: UNKNOWN_SERVER_MESSAGE.to_owned(),
            };
        }
        Self::Request { message: err.to_string() }
    }

    /// Build a server error from a non-success status and its raw body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(serde_json::Value::as_str)
                    .filter(|m| !m.is_empty())
                    .map(ToOwned::to_owned)
            })
            .unwrap_or_else(|| UNKNOWN_SERVER_MESSAGE.to_owned());
        Self::Server { status, message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
