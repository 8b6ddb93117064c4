//! Wire types for the token and content services.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{ApiError, AuthError, TransportError};

/// One anime entry as returned by `/getContent`.
///
/// Only `id` and `text` carry meaning for the client; every other field is
/// passed through untouched in `extra`, whatever its JSON type. The display
/// fields are read from there and count as absent unless they hold a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(default)]
    pub id: Value,
    /// HTML-ish body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wire names of the fields read through the typed accessors below.
pub const DISPLAY_FIELDS: [&str; 4] = ["title", "thumbNailImage", "mainImage", "logo"];

impl ContentItem {
    /// Identity comparison used for history bookkeeping.
    #[must_use]
    pub fn same_id(&self, other: &Self) -> bool {
        self.id == other.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.extra_str("title")
    }

    #[must_use]
    pub fn thumb_nail_image(&self) -> Option<&str> {
        self.extra_str("thumbNailImage")
    }

    #[must_use]
    pub fn main_image(&self) -> Option<&str> {
        self.extra_str("mainImage")
    }

    #[must_use]
    pub fn logo(&self) -> Option<&str> {
        self.extra_str("logo")
    }

    fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    content: Option<ContentItem>,
}

/// Extract the token from a `/generateToken` success body.
pub(crate) fn parse_token_response(body: &str) -> Result<String, ApiError> {
    let parsed: TokenResponse = serde_json::from_str(body).map_err(|e| TransportError::Request {
        message: format!("invalid token response: {e}"),
    })?;
    match parsed.token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::NoTokenReceived.into()),
    }
}

/// Extract the content item from a `/getContent` success body.
pub(crate) fn parse_content_response(body: &str) -> Result<ContentItem, ApiError> {
    let parsed: ContentResponse = serde_json::from_str(body).map_err(|e| TransportError::Request {
        message: format!("invalid content response: {e}"),
    })?;
    parsed.content.ok_or_else(|| {
        TransportError::Request { message: "content response has no `content` field".to_owned() }.into()
    })
}
